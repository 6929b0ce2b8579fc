use crate::{
    api::{ApiError, AuditLog, AuditLogListResponse},
    components::empty_state::EmptyState,
    pages::admin_audit_logs::utils::{event_label, result_badge_class, summarize_metadata},
};
use leptos::*;
use serde_json::Value;

const METADATA_PREVIEW_CHARS: usize = 50;

fn actor_label(log: &AuditLog) -> String {
    log.actor_username
        .clone()
        .or_else(|| log.actor_id.clone())
        .unwrap_or_else(|| "-".to_string())
}

fn target_label(log: &AuditLog) -> String {
    match (log.target_type.as_deref(), log.target_id.as_deref()) {
        (Some(kind), Some(id)) => format!("{} {}", kind, id),
        (Some(only), None) | (None, Some(only)) => only.to_string(),
        (None, None) => "-".to_string(),
    }
}

#[component]
fn AuditLogRow(log: AuditLog, selected_metadata: RwSignal<Option<Value>>) -> impl IntoView {
    let actor = actor_label(&log);
    let target = target_label(&log);
    let metadata = log.metadata.clone().map(|value| {
        let preview = summarize_metadata(&value, METADATA_PREVIEW_CHARS);
        view! {
            <button
                class="text-action-primary-bg hover:underline text-left font-mono text-xs"
                on:click=move |_| selected_metadata.set(Some(value.clone()))
            >
                {preview}
            </button>
        }
    });

    view! {
        <tr>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg-muted">
                {log.occurred_at.format("%Y-%m-%d %H:%M:%S").to_string()}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                {actor}
                <span class="text-xs text-fg-muted block">{log.actor_type.clone()}</span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                {event_label(&log.event_type).to_string()}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg-muted">{target}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm">
                <span class=result_badge_class(&log.result)>{log.result.clone()}</span>
                {log.error_code.clone().map(|code| view! { <span class="block text-xs text-status-error-text">{code}</span> })}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg-muted">{metadata}</td>
        </tr>
    }
}

#[component]
pub fn AuditLogTable(
    #[prop(into)] logs: Signal<Option<Result<AuditLogListResponse, ApiError>>>,
    selected_metadata: RwSignal<Option<Value>>,
    #[prop(into)] has_active_filters: Signal<bool>,
    on_clear_filters: Callback<()>,
) -> impl IntoView {
    let rows = move || {
        logs.get().map(|result| match result {
            Ok(response) if response.items.is_empty() => view! {
                <tr>
                    <td colspan="6" class="p-4">
                        <EmptyState
                            title="ログがありません"
                            description="検索条件に一致する監査ログは見つかりませんでした。"
                        >
                            <Show when=move || has_active_filters.get()>
                                <button
                                    class="text-sm text-action-primary-bg hover:underline"
                                    on:click=move |_| on_clear_filters.call(())
                                >
                                    "フィルタをクリア"
                                </button>
                            </Show>
                        </EmptyState>
                    </td>
                </tr>
            }
            .into_view(),
            Ok(response) => response
                .items
                .into_iter()
                .map(|log| view! { <AuditLogRow log=log selected_metadata=selected_metadata /> })
                .collect_view(),
            Err(err) => view! {
                <tr><td colspan="6" class="p-4 text-center text-status-error-text">{err}</td></tr>
            }
            .into_view(),
        })
    };

    view! {
        <div class="bg-surface-elevated shadow overflow-hidden sm:rounded-lg overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        {["日時", "ユーザー", "イベント", "対象", "結果", "詳細"]
                            .into_iter()
                            .map(|heading| view! {
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{heading}</th>
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="bg-surface-elevated divide-y divide-border">
                    <Suspense fallback=move || view! { <tr><td colspan="6" class="p-4 text-center">"読み込み中..."</td></tr> }>
                        {rows}
                    </Suspense>
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn MetadataModal(selected_metadata: RwSignal<Option<Value>>) -> impl IntoView {
    let pretty = move || {
        selected_metadata
            .get()
            .and_then(|value| serde_json::to_string_pretty(&value).ok())
            .unwrap_or_default()
    };

    view! {
        <Show when=move || selected_metadata.get().is_some()>
            <div class="fixed inset-0 bg-overlay-backdrop flex items-center justify-center z-50 p-4">
                <div role="dialog" aria-modal="true" class="bg-surface-elevated rounded-lg shadow-xl w-full max-w-2xl flex flex-col max-h-[90vh]">
                    <div class="p-4 border-b border-border flex justify-between items-center">
                        <h3 class="text-lg font-bold text-fg">"メタデータ詳細"</h3>
                    </div>
                    <div class="p-4 overflow-auto flex-1 bg-surface-muted font-mono text-xs sm:text-sm text-fg">
                        <pre>{pretty}</pre>
                    </div>
                    <div class="p-4 border-t border-border flex justify-end">
                        <button
                            class="px-4 py-2 bg-surface-muted hover:bg-surface-elevated rounded text-sm font-medium text-fg"
                            on:click=move |_| selected_metadata.set(None)
                        >
                            "閉じる"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    pub(super) fn sample_log(id: &str) -> AuditLog {
        AuditLog {
            id: id.into(),
            occurred_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).single().unwrap(),
            actor_id: Some("u1".into()),
            actor_username: Some("alice".into()),
            actor_type: "user".into(),
            event_type: "user.create".into(),
            target_type: Some("user".into()),
            target_id: Some("u2".into()),
            result: "success".into(),
            error_code: None,
            metadata: Some(serde_json::json!({ "roles": ["member"] })),
            ip: None,
            user_agent: None,
        }
    }

    #[test]
    fn actor_prefers_username_over_id() {
        let mut log = sample_log("a1");
        assert_eq!(actor_label(&log), "alice");
        log.actor_username = None;
        assert_eq!(actor_label(&log), "u1");
        log.actor_id = None;
        assert_eq!(actor_label(&log), "-");
    }

    #[test]
    fn target_joins_available_parts() {
        let mut log = sample_log("a1");
        assert_eq!(target_label(&log), "user u2");
        log.target_id = None;
        assert_eq!(target_label(&log), "user");
        log.target_type = None;
        assert_eq!(target_label(&log), "-");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::tests::sample_log;
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render_table(result: Result<AuditLogListResponse, ApiError>, filtered: bool) -> String {
        render_to_string(move || {
            let result = result.clone();
            view! {
                <AuditLogTable
                    logs=Signal::derive(move || Some(result.clone()))
                    selected_metadata=create_rw_signal(None)
                    has_active_filters=Signal::derive(move || filtered)
                    on_clear_filters=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn renders_rows_with_labels() {
        let html = render_table(
            Ok(AuditLogListResponse {
                page: 1,
                per_page: 20,
                total: 1,
                items: vec![sample_log("a1")],
            }),
            false,
        );
        assert!(html.contains("2025-01-02 03:04:05"));
        assert!(html.contains("alice"));
        assert!(html.contains("ユーザー作成"));
        assert!(html.contains("user u2"));
        assert!(html.contains("roles"));
    }

    #[test]
    fn empty_result_offers_clearing_filters() {
        let empty = AuditLogListResponse {
            page: 1,
            per_page: 20,
            total: 0,
            items: Vec::new(),
        };
        let html = render_table(Ok(empty.clone()), true);
        assert!(html.contains("ログがありません"));
        assert!(html.contains("フィルタをクリア"));

        let html = render_table(Ok(empty), false);
        assert!(!html.contains("フィルタをクリア"));
    }

    #[test]
    fn error_is_rendered_in_table() {
        let html = render_table(Err(ApiError::request_failed("Request failed with status 500")), false);
        assert!(html.contains("Request failed with status 500"));
    }

    #[test]
    fn metadata_modal_pretty_prints_selection() {
        let html = render_to_string(move || {
            let selected = create_rw_signal(Some(serde_json::json!({ "key": "value" })));
            view! { <MetadataModal selected_metadata=selected /> }
        });
        assert!(html.contains("メタデータ詳細"));
        assert!(html.contains("&quot;key&quot;") || html.contains("\"key\""));
    }
}
