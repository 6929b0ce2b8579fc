use super::{
    entity_select::EntitySelect,
    options::{customer_options, project_options, user_options, UserSelectValue},
};
use crate::api::{ApiClient, ApiError, CustomerResponse, ProjectResponse, UserResponse};
use leptos::*;

pub type UsersResource = Resource<u32, Result<Vec<UserResponse>, ApiError>>;
pub type CustomersResource = Resource<(), Result<Vec<CustomerResponse>, ApiError>>;
pub type ProjectsResource = Resource<(), Result<Vec<ProjectResponse>, ApiError>>;

/// Users list, refetched whenever `reload` changes.
pub fn create_users_resource(api: ApiClient, reload: Signal<u32>) -> UsersResource {
    create_resource(
        move || reload.get(),
        move |_| {
            let api = api.clone();
            async move {
                let result = api.get_users().await;
                if let Err(err) = &result {
                    log::warn!("Failed to load users: {}", err);
                }
                result
            }
        },
    )
}

pub fn create_customers_resource(api: ApiClient) -> CustomersResource {
    create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.get_customers().await }
        },
    )
}

pub fn create_projects_resource(api: ApiClient) -> ProjectsResource {
    create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.get_projects().await }
        },
    )
}

#[component]
pub fn UserSelect(
    users: UsersResource,
    #[prop(into)] value: Signal<String>,
    on_select: Callback<String>,
    #[prop(optional_no_strip)] label: Option<String>,
    #[prop(default = UserSelectValue::Id)] value_kind: UserSelectValue,
    #[prop(into, default = MaybeSignal::Static(false))] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let options = Signal::derive(move || {
        users
            .get()
            .map(|result| result.map(|list| user_options(&list, value_kind)))
    });

    view! {
        <EntitySelect
            options=options
            loading=users.loading()
            on_retry=Callback::new(move |_| users.refetch())
            value=value
            on_select=on_select
            noun="ユーザー"
            label=label
            disabled=disabled
        />
    }
}

#[component]
pub fn CustomerSelect(
    customers: CustomersResource,
    #[prop(into)] value: Signal<String>,
    on_select: Callback<String>,
    #[prop(optional_no_strip)] label: Option<String>,
    #[prop(into, default = MaybeSignal::Static(false))] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let options = Signal::derive(move || {
        customers
            .get()
            .map(|result| result.map(|list| customer_options(&list)))
    });

    view! {
        <EntitySelect
            options=options
            loading=customers.loading()
            on_retry=Callback::new(move |_| customers.refetch())
            value=value
            on_select=on_select
            noun="顧客"
            label=label
            disabled=disabled
        />
    }
}

/// Project picker; an empty `customer_id` lists projects of every customer.
#[component]
pub fn ProjectSelect(
    projects: ProjectsResource,
    #[prop(into)] value: Signal<String>,
    on_select: Callback<String>,
    #[prop(optional, into)] customer_id: MaybeSignal<String>,
    #[prop(optional_no_strip)] label: Option<String>,
    #[prop(into, default = MaybeSignal::Static(false))] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let options = Signal::derive(move || {
        let customer_id = customer_id.get();
        projects
            .get()
            .map(|result| result.map(|list| project_options(&list, &customer_id)))
    });

    view! {
        <EntitySelect
            options=options
            loading=projects.loading()
            on_retry=Callback::new(move |_| projects.refetch())
            value=value
            on_select=on_select
            noun="プロジェクト"
            label=label
            disabled=disabled
        />
    }
}
