use reqwest::{
    header::{HeaderMap, AUTHORIZATION},
    Client, Method, Request, RequestBuilder, StatusCode,
};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config, utils::storage as storage_utils};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    fn auth_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = storage_utils::access_token() {
            match format!("Bearer {}", token).parse() {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => log::warn!("Stored access token is not a valid header value"),
            }
        }
        headers
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<ApiResponse, ApiError> {
        let request = builder
            .headers(Self::auth_headers())
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        if let Some(mocked) = mock_response(&request) {
            return mocked.map(|(status, body)| ApiResponse {
                status,
                body,
                method,
                path,
            });
        }

        let response = self.client.execute(request).await.map_err(|e| {
            log::error!("{} {} could not be sent: {}", method, path, e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?
            .to_vec();
        Ok(ApiResponse {
            status,
            body,
            method,
            path,
        })
    }
}

pub(crate) struct ApiResponse {
    status: StatusCode,
    body: Vec<u8>,
    method: Method,
    path: String,
}

impl ApiResponse {
    pub(crate) fn into_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if self.status == StatusCode::UNAUTHORIZED {
            storage_utils::clear_access_token();
        }
        if self.status.is_success() {
            return serde_json::from_slice(&self.body)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)));
        }
        log::warn!(
            "{} {} failed with status {}",
            self.method,
            self.path,
            self.status.as_u16()
        );
        Err(serde_json::from_slice::<ApiError>(&self.body).unwrap_or_else(|_| {
            ApiError::request_failed(format!(
                "Request failed with status {}",
                self.status.as_u16()
            ))
        }))
    }
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mock_response(_request: &Request) -> Option<Result<(StatusCode, Vec<u8>), ApiError>> {
    None
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mock_response(request: &Request) -> Option<Result<(StatusCode, Vec<u8>), ApiError>> {
    let responder = test_hooks::find_mock(request.url().as_str())?;
    Some(responder.respond(request).map(|mock| {
        let status =
            StatusCode::from_u16(mock.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, mock.body.to_string().into_bytes())
    }))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) use test_hooks::{register_mock, MockResponse, TestResponder};
