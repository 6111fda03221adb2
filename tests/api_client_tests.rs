//! Request builder contract tests
//!
//! Every call must carry the static API key and JSON content types, and hit
//! the configured base path. The mocks only match when the headers are
//! present, so a missing header surfaces as an unmatched 404.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reqres_workflow::api::{ApiError, UserApi, UserApiClient};
use reqres_workflow::config::ApiConfig;

fn client_for(server: &MockServer) -> UserApiClient {
    let config = ApiConfig {
        base_url: server.uri(),
        base_path: "/api".to_string(),
        api_key: Some("contract-key".to_string()),
    };
    UserApiClient::new(&config).unwrap()
}

#[tokio::test]
async fn get_carries_api_key_and_accept_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/7"))
        .and(header("x-api-key", "contract-key"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 7}})))
        .mount(&server)
        .await;

    let response = client_for(&server).get_user("7").await.unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn post_sends_json_payload_with_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(header("x-api-key", "contract-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "Janet Weaver", "job": "Support Engineer"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "Janet Weaver",
            "job": "Support Engineer",
            "id": "12"
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .create_user("Janet Weaver", "Support Engineer")
        .await
        .unwrap();
    assert_eq!(response.status, 201);
    assert!(response.body.contains("\"id\""));
}

#[tokio::test]
async fn delete_targets_the_specific_resource() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/users/12"))
        .and(header("x-api-key", "contract-key"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let response = client_for(&server).delete_user("12").await.unwrap();
    assert_eq!(response.status, 204);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn missing_api_key_header_does_not_match_the_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/7"))
        .and(header("x-api-key", "a-different-key"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    // wiremock answers 404 for unmatched requests
    let response = client_for(&server).get_user("7").await.unwrap();
    assert_eq!(response.status, 404);
}

#[tokio::test]
async fn transport_failure_maps_to_http_error() {
    // nothing listens on this port
    let config = ApiConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        base_path: "/api".to_string(),
        api_key: Some("contract-key".to_string()),
    };
    let client = UserApiClient::new(&config).unwrap();

    let err = client.get_user("1").await.unwrap_err();
    assert!(matches!(err, ApiError::Http { .. }));
    assert!(err.to_string().contains("GET /users/{id}"));
}
