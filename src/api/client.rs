use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::observability::api_metrics;

use super::errors::ApiError;
use super::types::UserPayload;

/// Header carrying the static API key on every request
pub const API_KEY_HEADER: &str = "x-api-key";

/// A response captured for assertion and diagnostics: the status code plus
/// the raw body text. Typed parsing happens on demand so non-JSON error
/// bodies can still be attached to reports.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|source| ApiError::InvalidJson {
            status: self.status,
            source,
        })
    }

    /// Body re-rendered as pretty-printed JSON, or verbatim when it isn't JSON.
    pub fn pretty_body(&self) -> String {
        serde_json::from_str::<serde_json::Value>(&self.body)
            .and_then(|value| serde_json::to_string_pretty(&value))
            .unwrap_or_else(|_| self.body.clone())
    }
}

/// User-management operations of the target API. The workflow runner is
/// generic over this trait so tests can drive it with a scripted double.
#[async_trait]
pub trait UserApi {
    async fn create_user(&self, name: &str, job: &str) -> Result<ApiResponse, ApiError>;
    async fn update_user(&self, id: &str, name: &str, job: &str) -> Result<ApiResponse, ApiError>;
    async fn get_user(&self, id: &str) -> Result<ApiResponse, ApiError>;
    async fn delete_user(&self, id: &str) -> Result<ApiResponse, ApiError>;
}

/// HTTP client pre-configured with the base endpoint, path prefix, API key
/// header and JSON content types. Configuration is fixed at construction;
/// every call reuses it.
#[derive(Debug, Clone)]
pub struct UserApiClient {
    http: reqwest::Client,
    base: String,
}

impl UserApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(config.key()).map_err(|_| ApiError::InvalidApiKey)?;
        headers.insert(API_KEY_HEADER, key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ApiError::Build)?;

        let base = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            config.base_path
        );

        Ok(Self { http, base })
    }

    /// Collection and resource URLs under the configured prefix
    fn users_url(&self) -> String {
        format!("{}/users", self.base)
    }

    fn user_url(&self, id: &str) -> String {
        format!("{}/users/{}", self.base, id)
    }

    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<ApiResponse, ApiError> {
        let response = request.send().await.map_err(|source| ApiError::Http {
            endpoint: endpoint.to_string(),
            source,
        })?;
        api_metrics().record_request();

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|source| ApiError::Body {
            endpoint: endpoint.to_string(),
            source,
        })?;

        debug!(endpoint, status, body = %body, "received API response");
        Ok(ApiResponse { status, body })
    }
}

#[async_trait]
impl UserApi for UserApiClient {
    async fn create_user(&self, name: &str, job: &str) -> Result<ApiResponse, ApiError> {
        let url = self.users_url();
        let payload = UserPayload { name, job };
        self.dispatch(self.http.post(&url).json(&payload), "POST /users")
            .await
    }

    async fn update_user(&self, id: &str, name: &str, job: &str) -> Result<ApiResponse, ApiError> {
        let url = self.user_url(id);
        let payload = UserPayload { name, job };
        self.dispatch(self.http.put(&url).json(&payload), "PUT /users/{id}")
            .await
    }

    async fn get_user(&self, id: &str) -> Result<ApiResponse, ApiError> {
        let url = self.user_url(id);
        self.dispatch(self.http.get(&url), "GET /users/{id}").await
    }

    async fn delete_user(&self, id: &str) -> Result<ApiResponse, ApiError> {
        let url = self.user_url(id);
        self.dispatch(self.http.delete(&url), "DELETE /users/{id}")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            base_path: "/api".to_string(),
            api_key: Some("test-key".to_string()),
        }
    }

    #[test]
    fn trailing_slash_on_base_url_is_normalized() {
        let client = UserApiClient::new(&api_config("https://reqres.in/")).unwrap();
        assert_eq!(client.users_url(), "https://reqres.in/api/users");
        assert_eq!(client.user_url("42"), "https://reqres.in/api/users/42");
    }

    #[test]
    fn pretty_body_falls_back_to_raw_text() {
        let response = ApiResponse {
            status: 502,
            body: "upstream unavailable".to_string(),
        };
        assert_eq!(response.pretty_body(), "upstream unavailable");
    }

    #[test]
    fn pretty_body_formats_json() {
        let response = ApiResponse {
            status: 200,
            body: r#"{"job":"QA Engineer"}"#.to_string(),
        };
        assert!(response.pretty_body().contains("\n"));
        assert!(response.pretty_body().contains("QA Engineer"));
    }

    #[test]
    fn parse_surfaces_invalid_json() {
        let response = ApiResponse {
            status: 200,
            body: "not json".to_string(),
        };
        let err = response
            .parse::<super::super::types::CreatedUser>()
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidJson { status: 200, .. }));
    }
}
