//! Mock server tests for the gitmem-portal SDK.

use gitmem_core::{AuthError, Error, ServerUrl};
use gitmem_portal::PortalClient;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a server URL from a mock server.
fn mock_server_url(server: &MockServer) -> ServerUrl {
    // For tests, we need to allow HTTP localhost
    ServerUrl::new(&format!("http://127.0.0.1:{}", server.address().port())).unwrap()
}

#[tokio::test]
async fn test_login_stores_token_and_returns_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "username": "alice",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "portal-token",
            "account": {"name": "Alice", "role": "admin"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/analytics"))
        .and(header("authorization", "Bearer portal-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "requests": 9000
        })))
        .mount(&server)
        .await;

    let client = PortalClient::new(mock_server_url(&server));

    // Login returns the full body, not just the token.
    let body = client.login("alice", "secret123").await.unwrap();
    assert_eq!(body["account"]["name"], "Alice");

    let analytics = client.analytics().await.unwrap();
    assert_eq!(analytics["requests"], 9000);
}

#[tokio::test]
async fn test_get_before_login_is_unauthenticated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/branding"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "logo": "https://cdn.gitmemory.dev/logo.svg"
        })))
        .mount(&server)
        .await;

    let client = PortalClient::new(mock_server_url(&server));
    let branding = client.branding().await.unwrap();
    assert_eq!(branding["logo"], "https://cdn.gitmemory.dev/logo.svg");

    let requests = server.received_requests().await.unwrap();
    let branding_request = requests
        .iter()
        .find(|r| r.url.path() == "/api/branding")
        .unwrap();
    assert!(branding_request.headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_login_rejected_stores_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Unauthorized",
            "message": "bad credentials"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/portal/plans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "plans": []
        })))
        .mount(&server)
        .await;

    let client = PortalClient::new(mock_server_url(&server));

    let result = client.login("alice", "wrong").await;
    let err = result.unwrap_err();
    assert!(matches!(err, Error::Auth(AuthError::LoginFailed { .. })));
    assert!(err.to_string().contains("401"));

    // The failed login stored no token; later calls stay unauthenticated.
    client.plans().await.unwrap();
    let requests = server.received_requests().await.unwrap();
    let plans_request = requests
        .iter()
        .find(|r| r.url.path() == "/portal/plans")
        .unwrap();
    assert!(plans_request.headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_login_response_without_access_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "wrong-field-name"
        })))
        .mount(&server)
        .await;

    let client = PortalClient::new(mock_server_url(&server));
    let result = client.login("alice", "secret").await;

    assert!(matches!(
        result.unwrap_err(),
        Error::Auth(AuthError::MissingToken {
            field: "accessToken"
        })
    ));
}

#[tokio::test]
async fn test_portal_error_is_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/portal/plans"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "NotFound"
        })))
        .mount(&server)
        .await;

    let client = PortalClient::new(mock_server_url(&server));
    let result = client.plans().await;

    match result.unwrap_err() {
        Error::Protocol(err) => assert_eq!(err.status, 404),
        other => panic!("expected protocol error, got {other:?}"),
    }
}
