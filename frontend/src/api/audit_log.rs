use crate::api::client::ApiClient;
use crate::api::types::{ApiError, AuditLog, AuditLogListResponse};

/// Query sent to the audit-log endpoints. `page` is 1-based on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditLogQuery {
    pub page: i64,
    pub per_page: i64,
    pub search: Option<String>,
    pub username: Option<String>,
    pub action: Option<String>,
    pub result: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl AuditLogQuery {
    pub fn filter_params(&self) -> Vec<(String, String)> {
        [
            ("q", &self.search),
            ("username", &self.username),
            ("action", &self.action),
            ("result", &self.result),
            ("from", &self.from),
            ("to", &self.to),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .filter(|v| !v.is_empty())
                .map(|v| (key.to_string(), v.clone()))
        })
        .collect()
    }

    pub fn page_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
        ];
        params.extend(self.filter_params());
        params
    }
}

impl ApiClient {
    pub async fn list_audit_logs(
        &self,
        query: &AuditLogQuery,
    ) -> Result<AuditLogListResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .get(format!("{}/admin/audit-logs", base_url))
            .query(&query.page_params());
        self.send(request).await?.into_json()
    }

    pub async fn export_audit_logs(&self, query: &AuditLogQuery) -> Result<Vec<AuditLog>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .get(format!("{}/admin/audit-logs/export", base_url))
            .query(&query.filter_params());
        self.send(request).await?.into_json()
    }
}
