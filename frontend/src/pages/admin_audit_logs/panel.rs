use super::{
    components::{
        filters::AuditLogFilterBar,
        table::{AuditLogTable, MetadataModal},
    },
    view_model::use_audit_log_view_model,
};
use crate::components::{layout::Layout, pager::Pager, search::SearchBar};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn AdminAuditLogsPage() -> impl IntoView {
    let vm = use_audit_log_view_model();
    let list = vm.list;
    let logs_resource = vm.logs_resource;

    view! {
        <Title text="監査ログ"/>
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"監査ログ"</h1>
                    <p class="mt-1 text-sm text-fg-muted">"システム操作の履歴を確認・エクスポートします。"</p>
                </div>

                <SearchBar
                    value=Signal::derive(move || list.search_input())
                    on_change=Callback::new(move |value: String| list.handle_search_change(value))
                    on_submit=Callback::new(move |_| list.handle_search_submit())
                    on_clear=Callback::new(move |_| list.handle_clear_search())
                    placeholder="ユーザー名・対象・IPで検索"
                />

                <AuditLogFilterBar
                    list=list
                    users=vm.users_resource
                    export_action=vm.export_action
                />

                <AuditLogTable
                    logs=Signal::derive(move || logs_resource.get())
                    selected_metadata=vm.selected_metadata
                    has_active_filters=Signal::derive(move || list.has_active_filters())
                    on_clear_filters=Callback::new(move |_| list.handle_clear_filters())
                />

                <Pager
                    page=Signal::derive(move || list.page())
                    page_count=vm.page_count()
                    on_page_change=Callback::new(move |page| list.set_page(page))
                />

                <MetadataModal selected_metadata=vm.selected_metadata />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_page;

    #[test]
    fn page_renders_search_filters_and_pager() {
        let html = render_page("http://audit-page.invalid/api", || view! { <AdminAuditLogsPage /> });
        assert!(html.contains("監査ログ"));
        assert!(html.contains("ユーザー名・対象・IPで検索"));
        assert!(html.contains("JSONエクスポート"));
        assert!(html.contains("ページ "));
    }
}
