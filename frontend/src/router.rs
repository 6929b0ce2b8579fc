use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::layout::Layout,
    pages::{admin_audit_logs::AdminAuditLogsPage, admin_users::AdminUsersPage},
};

pub const USERS_PATH: &str = "/admin/users";
pub const AUDIT_LOGS_PATH: &str = "/admin/audit-logs";

pub const ROUTE_PATHS: &[&str] = &["/", USERS_PATH, AUDIT_LOGS_PATH];

fn page_title(text: String) -> String {
    if text.is_empty() {
        "Admin Console".to_string()
    } else {
        format!("{} | Admin Console", text)
    }
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <Title formatter=page_title/>
        <Router>
            <Routes>
                <Route path="/" view=|| view! { <Redirect path=USERS_PATH/> }/>
                <Route path=USERS_PATH view=AdminUsersPage/>
                <Route path=AUDIT_LOGS_PATH view=AdminAuditLogsPage/>
                <Route path="/*any" view=NotFound/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Layout>
            <div class="p-6 bg-surface-elevated shadow rounded">
                <p class="text-fg">"ページが見つかりません。"</p>
                <a href=USERS_PATH class="text-action-primary-bg hover:underline">"ユーザー管理へ戻る"</a>
            </div>
        </Layout>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn not_found_links_back_to_users() {
        let html = render_to_string(move || view! { <NotFound /> });
        assert!(html.contains("ページが見つかりません。"));
        assert!(html.contains(USERS_PATH));
    }
}
