use crate::api::client::ApiClient;
use crate::api::types::{ApiError, CustomerResponse, ProjectResponse};

impl ApiClient {
    pub async fn get_customers(&self) -> Result<Vec<CustomerResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .get(format!("{}/admin/customers", base_url));
        self.send(request).await?.into_json()
    }

    pub async fn get_projects(&self) -> Result<Vec<ProjectResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .get(format!("{}/admin/projects", base_url));
        self.send(request).await?.into_json()
    }
}
