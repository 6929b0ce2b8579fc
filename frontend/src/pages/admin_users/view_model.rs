use super::utils::{
    filter_users, paginate_users, CreateUserFormState, MessageState, UserFilters, UserPage,
    USERS_PER_PAGE,
};
use crate::{
    api::{ApiClient, ApiError, CreateUser, UserResponse},
    components::selectors::{
        create_customers_resource, create_projects_resource, create_users_resource,
        CustomersResource, ProjectsResource, UsersResource,
    },
    state::list_page::{use_list_page, ListPageController},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct AdminUsersViewModel {
    pub list: ListPageController<UserFilters>,
    pub users_reload: RwSignal<u32>,
    pub users_resource: UsersResource,
    pub customers_resource: CustomersResource,
    pub projects_resource: ProjectsResource,
    /// Filtered and paginated view of `users_resource`.
    pub user_page: Memo<Option<Result<UserPage, ApiError>>>,
    pub create_form: RwSignal<CreateUserFormState>,
    pub create_messages: RwSignal<MessageState>,
    pub create_action: Action<CreateUser, Result<UserResponse, ApiError>>,
    pub deactivate_target: RwSignal<Option<UserResponse>>,
    pub deactivate_action: Action<String, Result<UserResponse, ApiError>>,
    pub list_messages: RwSignal<MessageState>,
}

/// Folds a finished create request into the form and its messages.
/// Returns `true` when the user list needs reloading.
pub fn apply_create_result(
    form: &mut CreateUserFormState,
    messages: &mut MessageState,
    result: Result<UserResponse, ApiError>,
) -> bool {
    match result {
        Ok(user) => {
            log::info!("Created user {}", user.username);
            messages.set_success(format!("ユーザー '{}' を作成しました。", user.username));
            form.reset();
            true
        }
        Err(err) => {
            log::warn!("Failed to create user: {}", err);
            messages.set_error(err);
            false
        }
    }
}

impl AdminUsersViewModel {
    pub fn reload_users(&self) {
        self.users_reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn handle_create_result(&self, result: Result<UserResponse, ApiError>) {
        let mut form = self.create_form.get_untracked();
        let mut messages = self.create_messages.get_untracked();
        let reload = apply_create_result(&mut form, &mut messages, result);
        self.create_form.set(form);
        self.create_messages.set(messages);
        if reload {
            self.reload_users();
        }
    }

    /// Writes the clamped page of `user_page` back to the list state.
    pub fn sync_page(&self) {
        if let Some(Ok(page)) = self.user_page.get() {
            if page.page != self.list.page() {
                self.list.set_page(page.page);
            }
        }
    }
}

pub fn use_admin_users_view_model() -> AdminUsersViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let list = use_list_page::<UserFilters>();

    let users_reload = create_rw_signal(0u32);
    let users_resource = create_users_resource(api.clone(), users_reload.into());
    let customers_resource = create_customers_resource(api.clone());
    let projects_resource = create_projects_resource(api.clone());

    let committed = list.committed_state();
    let user_page = create_memo(move |_| {
        let state = committed.get();
        users_resource.get().map(|result| {
            result.map(|users| paginate_users(filter_users(&users, &state), state.page(), USERS_PER_PAGE))
        })
    });

    let api_for_create = api.clone();
    let create_user_action = create_action(move |payload: &CreateUser| {
        let api = api_for_create.clone();
        let payload = payload.clone();
        async move { api.create_user(&payload).await }
    });

    let api_for_deactivate = api;
    let deactivate_user_action = create_action(move |user_id: &String| {
        let api = api_for_deactivate.clone();
        let user_id = user_id.clone();
        async move { api.deactivate_user(&user_id).await }
    });

    let vm = AdminUsersViewModel {
        list,
        users_reload,
        users_resource,
        customers_resource,
        projects_resource,
        user_page,
        create_form: create_rw_signal(CreateUserFormState::default()),
        create_messages: create_rw_signal(MessageState::default()),
        create_action: create_user_action,
        deactivate_target: create_rw_signal(None),
        deactivate_action: deactivate_user_action,
        list_messages: create_rw_signal(MessageState::default()),
    };

    create_effect(move |_| vm.sync_page());
    create_effect(move |_| {
        if let Some(result) = vm.create_action.value().get() {
            vm.handle_create_result(result);
        }
    });

    vm
}
