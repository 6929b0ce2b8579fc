use chrono::{DateTime, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub id: String,
    pub name: String,
    pub customer_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: String,
    pub occurred_at: DateTime<Utc>,
    pub actor_id: Option<String>,
    #[serde(default)]
    pub actor_username: Option<String>,
    pub actor_type: String,
    pub event_type: String,
    pub target_type: Option<String>,
    pub target_id: Option<String>,
    pub result: String,
    pub error_code: Option<String>,
    pub metadata: Option<Value>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogListResponse {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub items: Vec<AuditLog>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");
        assert!(validation.details.is_none());

        let unknown = ApiError::unknown("something failed");
        assert_eq!(unknown.code, "UNKNOWN");

        let request_failed = ApiError::request_failed("network error");
        assert_eq!(request_failed.code, "REQUEST_FAILED");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn user_response_defaults_optional_fields() {
        let user: UserResponse = serde_json::from_value(json!({
            "id": "u1",
            "username": "alice",
            "full_name": "Alice Example"
        }))
        .unwrap();
        assert!(user.is_active);
        assert!(user.roles.is_empty());
        assert_eq!(user.email, "");
        assert!(user.customer_id.is_none());
    }

    #[test]
    fn create_user_omits_empty_assignments() {
        let payload = CreateUser {
            username: "bob".into(),
            password: "secret".into(),
            full_name: "Bob".into(),
            email: "bob@example.com".into(),
            roles: vec!["member".into()],
            customer_id: None,
            project_id: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("customer_id").is_none());
        assert!(value.get("project_id").is_none());
        assert_eq!(value["roles"], json!(["member"]));
    }

    #[test]
    fn audit_log_list_deserializes() {
        let raw = json!({
            "page": 2,
            "per_page": 20,
            "total": 41,
            "items": [{
                "id": "log-1",
                "occurred_at": "2025-01-02T10:00:00Z",
                "actor_id": "u1",
                "actor_type": "user",
                "event_type": "user.create",
                "target_type": "user",
                "target_id": "u2",
                "result": "success",
                "error_code": null,
                "metadata": {"role": "admin"},
                "ip": null,
                "user_agent": null
            }]
        });
        let list: AuditLogListResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(list.total, 41);
        assert_eq!(list.items[0].event_type, "user.create");
        assert!(list.items[0].actor_username.is_none());
    }
}
