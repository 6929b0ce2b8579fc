use crate::{
    api::{ApiError, CreateUser, UserResponse},
    components::{
        error::InlineErrorMessage,
        layout::SuccessMessage,
        selectors::{CustomerSelect, CustomersResource, ProjectSelect, ProjectsResource},
    },
    pages::admin_users::utils::{CreateUserFormState, MessageState, ROLES},
};
use leptos::{ev, *};

const INPUT_CLASS: &str = "mt-1 w-full border rounded px-2 py-1 bg-form-control-bg text-fg";

#[component]
pub fn CreateUserForm(
    form_state: RwSignal<CreateUserFormState>,
    messages: RwSignal<MessageState>,
    create_action: Action<CreateUser, Result<UserResponse, ApiError>>,
    customers: CustomersResource,
    projects: ProjectsResource,
) -> impl IntoView {
    let pending = create_action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        messages.update(MessageState::clear);
        match form_state.with_untracked(CreateUserFormState::validate) {
            Ok(request) => create_action.dispatch(request),
            Err(err) => messages.update(|state| state.set_error(err)),
        }
    };

    let text_input = move |label: &'static str,
                           input_type: &'static str,
                           read: fn(&CreateUserFormState) -> String,
                           write: fn(&mut CreateUserFormState, String)| {
        view! {
            <div>
                <label class="block text-sm font-medium text-fg">{label}</label>
                <input
                    type=input_type
                    class=INPUT_CLASS
                    prop:value=move || form_state.with(read)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form_state.update(|state| write(state, value));
                    }
                />
            </div>
        }
    };

    let success = Signal::derive(move || messages.get().success);
    let error = Signal::derive(move || messages.get().error);

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h2 class="text-lg font-medium text-fg">{"ユーザー作成"}</h2>
                <p class="text-sm text-fg-muted">{"氏名・メールアドレス・権限を入力し、必要に応じて顧客とプロジェクトを割り当てます。"}</p>
            </div>

            <InlineErrorMessage error=error />
            <Show when=move || success.get().is_some()>
                <SuccessMessage message=success.get().unwrap_or_default() />
            </Show>

            <form class="grid grid-cols-1 md:grid-cols-2 gap-4" on:submit=on_submit>
                {text_input("ユーザー名", "text", |s| s.username.clone(), |s, v| s.username = v)}
                {text_input("氏名", "text", |s| s.full_name.clone(), |s, v| s.full_name = v)}
                {text_input("メールアドレス", "email", |s| s.email.clone(), |s, v| s.email = v)}
                {text_input("パスワード", "password", |s| s.password.clone(), |s, v| s.password = v)}
                <fieldset class="md:col-span-2">
                    <legend class="block text-sm font-medium text-fg">{"権限"}</legend>
                    <div class="mt-1 flex flex-wrap gap-4">
                        {ROLES
                            .iter()
                            .map(|(value, label)| {
                                let value = *value;
                                view! {
                                    <label class="inline-flex items-center space-x-2 text-sm text-fg">
                                        <input
                                            type="checkbox"
                                            class="h-4 w-4 rounded border-border"
                                            prop:checked=move || form_state.with(|state| state.has_role(value))
                                            on:change=move |_| form_state.update(|state| state.toggle_role(value))
                                        />
                                        <span>{*label}</span>
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </fieldset>
                <CustomerSelect
                    customers=customers
                    value=Signal::derive(move || form_state.with(|state| state.customer_id.clone()))
                    on_select=Callback::new(move |id: String| form_state.update(|state| state.set_customer(id)))
                    label=Some("顧客".to_string())
                    disabled=pending
                />
                <ProjectSelect
                    projects=projects
                    value=Signal::derive(move || form_state.with(|state| state.project_id.clone()))
                    on_select=Callback::new(move |id: String| form_state.update(|state| state.project_id = id))
                    customer_id=Signal::derive(move || form_state.with(|state| state.customer_id.clone()))
                    label=Some("プロジェクト".to_string())
                    disabled=pending
                />
                <div class="md:col-span-2">
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="px-4 py-2 bg-action-primary-bg text-action-primary-text rounded disabled:opacity-50"
                    >
                        {move || if pending.get() { "作成中..." } else { "ユーザーを作成" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
