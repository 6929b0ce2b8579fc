use crate::api::client::ApiClient;
use crate::api::types::{ApiError, CreateUser, UserResponse};

impl ApiClient {
    pub async fn get_users(&self) -> Result<Vec<UserResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .get(format!("{}/admin/users", base_url));
        self.send(request).await?.into_json()
    }

    pub async fn create_user(&self, payload: &CreateUser) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .post(format!("{}/admin/users", base_url))
            .json(payload);
        self.send(request).await?.into_json()
    }

    pub async fn deactivate_user(&self, user_id: &str) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .post(format!("{}/admin/users/{}/deactivate", base_url, user_id));
        self.send(request).await?.into_json()
    }
}
