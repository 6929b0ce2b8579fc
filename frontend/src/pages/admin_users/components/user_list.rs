use crate::{
    api::{ApiError, UserResponse},
    components::{
        empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner, pager::Pager,
        search::SearchBar,
    },
    pages::admin_users::utils::{role_label, UserFilterField, UserFilters, UserPage, ROLES, STATUS_OPTIONS},
    state::list_page::ListPageController,
};
use leptos::*;

const SELECT_CLASS: &str = "mt-1 block w-full rounded-md border border-border px-2 py-1 text-sm bg-form-control-bg text-fg";

fn roles_text(user: &UserResponse) -> String {
    if user.roles.is_empty() {
        return "-".to_string();
    }
    user.roles
        .iter()
        .map(|role| role_label(role))
        .collect::<Vec<_>>()
        .join(", ")
}

#[component]
fn StatusBadge(active: bool) -> impl IntoView {
    let (class, label) = if active {
        ("bg-status-success-bg text-status-success-text", "有効")
    } else {
        ("bg-status-neutral-bg text-status-neutral-text", "無効")
    };
    view! {
        <span class=format!("px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}", class)>
            {label}
        </span>
    }
}

#[component]
fn FilterSelect(
    list: ListPageController<UserFilters>,
    field: UserFilterField,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-fg">{label}</label>
            <select
                class=SELECT_CLASS
                prop:value=move || list.filter(field)
                on:change=move |ev| list.handle_filter_change(field, event_target_value(&ev))
            >
                <option value="">"すべて"</option>
                {options
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn UserList(
    list: ListPageController<UserFilters>,
    #[prop(into)] user_page: Signal<Option<Result<UserPage, ApiError>>>,
    #[prop(into)] loading: Signal<bool>,
    on_deactivate: Callback<UserResponse>,
) -> impl IntoView {
    let fetch_error = Signal::derive(move || user_page.get().and_then(|result| result.err()));
    let items = Signal::derive(move || {
        user_page
            .get()
            .and_then(|result| result.ok())
            .map(|page| page.items)
            .unwrap_or_default()
    });
    let page_count = Signal::derive(move || {
        user_page
            .get()
            .and_then(|result| result.ok())
            .map(|page| page.page_count)
    });
    let total = Signal::derive(move || {
        user_page
            .get()
            .and_then(|result| result.ok())
            .map(|page| page.total)
            .unwrap_or(0)
    });
    let is_empty = Signal::derive(move || {
        matches!(user_page.get(), Some(Ok(page)) if page.items.is_empty())
    });

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex flex-col gap-1 md:flex-row md:items-center md:justify-between">
                <h3 class="text-lg font-medium text-fg">{"ユーザー一覧"}</h3>
                <span class="text-sm text-fg-muted">{move || format!("{} 件", total.get())}</span>
            </div>

            <SearchBar
                value=Signal::derive(move || list.search_input())
                on_change=Callback::new(move |value: String| list.handle_search_change(value))
                on_submit=Callback::new(move |_| list.handle_search_submit())
                on_clear=Callback::new(move |_| list.handle_clear_search())
                placeholder="ユーザー名・氏名・メールで検索"
            />
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 items-end">
                <FilterSelect list=list field=UserFilterField::Role label="権限" options=ROLES />
                <FilterSelect list=list field=UserFilterField::Status label="状態" options=STATUS_OPTIONS />
                <button
                    class="text-sm text-fg-muted hover:text-fg disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=move || !list.has_active_filters()
                    on:click=move |_| list.handle_clear_filters()
                >
                    "フィルタをクリア"
                </button>
            </div>

            <InlineErrorMessage error=fetch_error />
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show when=move || is_empty.get()>
                <EmptyState
                    title="ユーザーが見つかりません"
                    description="検索条件を変更するか、新しいユーザーを作成してください。"
                />
            </Show>
            <Show when=move || !items.get().is_empty()>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead>
                            <tr>
                                {["ユーザー名", "氏名", "メールアドレス", "権限", "状態", ""]
                                    .into_iter()
                                    .map(|heading| view! {
                                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{heading}</th>
                                    })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody class="bg-surface-elevated divide-y divide-border">
                            <For
                                each=move || items.get()
                                key=|user| (user.id.clone(), user.is_active)
                                children=move |user: UserResponse| {
                                    let roles = roles_text(&user);
                                    let active = user.is_active;
                                    let target = user.clone();
                                    view! {
                                        <tr>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{user.username}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{user.full_name}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg-muted">{user.email}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{roles}</td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm"><StatusBadge active=active /></td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-right">
                                                {active.then(|| view! {
                                                    <button
                                                        type="button"
                                                        class="text-status-error-text hover:underline"
                                                        on:click=move |_| on_deactivate.call(target.clone())
                                                    >
                                                        "無効化"
                                                    </button>
                                                })}
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
            <Pager
                page=Signal::derive(move || list.page())
                page_count=page_count
                on_page_change=Callback::new(move |page| list.set_page(page))
            />
        </div>
    }
}
