use super::utils::{build_audit_log_query, AuditLogFilters, AUDIT_LOGS_PER_PAGE};
use crate::{
    api::{ApiClient, ApiError, AuditLogListResponse, AuditLogQuery},
    components::{
        pager::{page_correction, total_pages},
        selectors::{create_users_resource, UsersResource},
    },
    state::list_page::{use_list_page, ListPageController},
    utils::download::{export_file_name, trigger_download},
};
use chrono::{DateTime, Utc};
use leptos::*;
use serde_json::Value;

pub type AuditLogsResource = Resource<AuditLogQuery, Result<AuditLogListResponse, ApiError>>;

#[derive(Clone, Copy)]
pub struct AuditLogViewModel {
    pub list: ListPageController<AuditLogFilters>,
    /// Rebuilt only when the page, committed search or filters change.
    pub query: Memo<AuditLogQuery>,
    pub logs_resource: AuditLogsResource,
    pub users_resource: UsersResource,
    pub export_action: Action<(), Result<usize, ApiError>>,
    pub selected_metadata: RwSignal<Option<Value>>,
}

fn response_page_count(response: &AuditLogListResponse) -> usize {
    total_pages(response.total.max(0) as usize, response.per_page.max(0) as usize)
}

impl AuditLogViewModel {
    /// `None` until the first page has loaded.
    pub fn page_count(&self) -> Signal<Option<usize>> {
        let logs_resource = self.logs_resource;
        Signal::derive(move || {
            logs_resource
                .get()
                .and_then(|result| result.ok().as_ref().map(response_page_count))
        })
    }

    /// Pulls the page back onto the last page of the loaded result.
    pub fn sync_page(&self) {
        let Some(Ok(response)) = self.logs_resource.get() else {
            return;
        };
        let page = self.list.page();
        if let Some(clamped) = page_correction(page, response_page_count(&response)) {
            log::debug!("Audit log page {} out of range, moving to {}", page, clamped);
            self.list.set_page(clamped);
        }
    }
}

/// A serialized export ready to hand to the browser.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportFile {
    pub name: String,
    pub body: String,
    pub count: usize,
}

pub async fn fetch_export(
    api: &ApiClient,
    query: &AuditLogQuery,
    at: DateTime<Utc>,
) -> Result<ExportFile, ApiError> {
    let logs = api.export_audit_logs(query).await?;
    let body = serde_json::to_string_pretty(&logs)
        .map_err(|err| ApiError::unknown(format!("Failed to serialize export data: {}", err)))?;
    Ok(ExportFile {
        name: export_file_name("audit_logs", "json", at),
        body,
        count: logs.len(),
    })
}

pub fn use_audit_log_view_model() -> AuditLogViewModel {
    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let list = use_list_page::<AuditLogFilters>();

    let committed = list.committed_state();
    let query = create_memo(move |_| {
        committed.with(|state| build_audit_log_query(state, AUDIT_LOGS_PER_PAGE))
    });

    let api = api_client.clone();
    let logs_resource = create_resource(
        move || query.get(),
        move |query| {
            let api = api.clone();
            async move { api.list_audit_logs(&query).await }
        },
    );

    let users_resource = create_users_resource(api_client.clone(), Signal::derive(|| 0));

    let api_export = api_client;
    let export_action = create_action(move |_: &()| {
        let api = api_export.clone();
        let query = query.get_untracked();
        async move {
            let file = fetch_export(&api, &query, Utc::now()).await?;
            trigger_download(&file.name, "application/json", &file.body).map_err(ApiError::unknown)?;
            log::info!("Exported {} audit log entries", file.count);
            Ok(file.count)
        }
    });

    let vm = AuditLogViewModel {
        list,
        query,
        logs_resource,
        users_resource,
        export_action,
        selected_metadata: create_rw_signal(None),
    };

    // A shrinking result set can leave the page index past the end.
    create_effect(move |_| vm.sync_page());

    vm
}
