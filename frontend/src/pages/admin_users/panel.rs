use super::{
    components::{
        create_user_form::CreateUserForm, deactivate_dialog::DeactivateUserDialog,
        user_list::UserList,
    },
    layout::AdminUsersFrame,
    utils::MessageState,
    view_model::use_admin_users_view_model,
};
use crate::{
    api::UserResponse,
    components::layout::{Layout, SuccessMessage},
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let vm = use_admin_users_view_model();
    let users_loading = vm.users_resource.loading();
    let list_messages = vm.list_messages;
    let deactivate_target = vm.deactivate_target;

    let open_deactivate = Callback::new(move |user: UserResponse| {
        list_messages.update(MessageState::clear);
        deactivate_target.set(Some(user));
    });
    let on_deactivated = Callback::new(move |user: UserResponse| {
        log::info!("Deactivated user {}", user.username);
        list_messages.update(|state| {
            state.set_success(format!("ユーザー '{}' を無効化しました。", user.username));
        });
        vm.reload_users();
    });
    let close_dialog = Callback::new(move |_| deactivate_target.set(None));

    view! {
        <Title text="ユーザー管理"/>
        <Layout>
            <AdminUsersFrame>
                <CreateUserForm
                    form_state=vm.create_form
                    messages=vm.create_messages
                    create_action=vm.create_action
                    customers=vm.customers_resource
                    projects=vm.projects_resource
                />
                <Show when=move || list_messages.get().success.is_some()>
                    <SuccessMessage message=list_messages.get().success.unwrap_or_default() />
                </Show>
                <UserList
                    list=vm.list
                    user_page=vm.user_page
                    loading=users_loading
                    on_deactivate=open_deactivate
                />
            </AdminUsersFrame>
            <DeactivateUserDialog
                user=deactivate_target
                deactivate_action=vm.deactivate_action
                on_deactivated=on_deactivated
                on_close=close_dialog
            />
        </Layout>
    }
}
