use crate::{
    api::ApiError,
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        selectors::{UserSelect, UserSelectValue, UsersResource},
    },
    pages::admin_audit_logs::utils::{
        AuditLogFilterField, AuditLogFilters, AUDIT_EVENT_TYPES, AUDIT_RESULTS,
    },
    state::list_page::ListPageController,
};
use leptos::{ev, *};

const INPUT_CLASS: &str =
    "mt-1 block w-full rounded-md border-form-control-border bg-form-control-bg text-fg shadow-sm sm:text-sm border px-2 py-1";

#[component]
pub fn AuditLogFilterBar(
    list: ListPageController<AuditLogFilters>,
    users: UsersResource,
    export_action: Action<(), Result<usize, ApiError>>,
) -> impl IntoView {
    let on_field = move |field: AuditLogFilterField| {
        Callback::new(move |value: String| list.handle_filter_change(field, value))
    };
    let on_input = move |field: AuditLogFilterField| {
        move |ev: ev::Event| list.handle_filter_change(field, event_target_value(&ev))
    };

    let range_inverted = Signal::derive(move || list.filters().date_range_is_inverted());
    let export_pending = export_action.pending();
    let export_error = Signal::derive(move || export_action.value().get().and_then(Result::err));

    view! {
        <div class="bg-surface-elevated p-4 rounded-lg shadow space-y-4">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-4">
                <UserSelect
                    users=users
                    value=Signal::derive(move || list.filter(AuditLogFilterField::Username))
                    on_select=on_field(AuditLogFilterField::Username)
                    label=Some("ユーザー".to_string())
                    value_kind=UserSelectValue::Username
                    disabled=export_pending
                />
                <div>
                    <label class="block text-sm font-medium text-fg">"イベント"</label>
                    <select
                        class=INPUT_CLASS
                        prop:value=move || list.filter(AuditLogFilterField::Action)
                        on:change=on_input(AuditLogFilterField::Action)
                    >
                        <option value="">"すべて"</option>
                        {AUDIT_EVENT_TYPES
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"結果"</label>
                    <select
                        class=INPUT_CLASS
                        prop:value=move || list.filter(AuditLogFilterField::Result)
                        on:change=on_input(AuditLogFilterField::Result)
                    >
                        <option value="">"すべて"</option>
                        {AUDIT_RESULTS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"開始日"</label>
                    <input
                        type="date"
                        class=INPUT_CLASS
                        prop:value=move || list.filter(AuditLogFilterField::StartDate)
                        on:change=on_input(AuditLogFilterField::StartDate)
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"終了日"</label>
                    <input
                        type="date"
                        class=INPUT_CLASS
                        prop:value=move || list.filter(AuditLogFilterField::EndDate)
                        on:change=on_input(AuditLogFilterField::EndDate)
                    />
                </div>
            </div>
            <Show when=move || range_inverted.get()>
                <p class="text-sm text-status-warning-text">"開始日が終了日より後になっています。"</p>
            </Show>
            <InlineErrorMessage error=export_error />
            <div class="flex justify-end items-center gap-4">
                <Button
                    variant=ButtonVariant::Secondary
                    disabled=Signal::derive(move || !list.has_active_filters())
                    on:click=move |_| list.handle_clear_filters()
                >
                    "フィルタをクリア"
                </Button>
                <Button
                    variant=ButtonVariant::Primary
                    on:click=move |_| export_action.dispatch(())
                    loading=Signal::derive(move || export_pending.get())
                >
                    {move || if export_pending.get() { "エクスポート中..." } else { "JSONエクスポート" }}
                </Button>
            </div>
        </div>
    }
}
