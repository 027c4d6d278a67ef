//! Integration tests for the commerce backend client
//!
//! These tests use wiremock to stand in for the backend and exercise the
//! full request/response cycle of the login and customer endpoints.

use commerce_client::{ApiClient, ApiClientConfig, Customer};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiClientConfig::new(server.uri()))
}

// =============================================================================
// Password Login
// =============================================================================

#[tokio::test]
async fn test_password_login_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(serde_json::json!({
            "username": "alice@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": {"id": 42},
            "cookie": "tok_abc"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .login_password("alice@example.com", "hunter2")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(response.user.unwrap().id, 42);
    assert_eq!(response.cookie.as_deref(), Some("tok_abc"));
}

#[tokio::test]
async fn test_password_login_backend_error_payload() {
    let mock_server = MockServer::start().await;

    // The backend answers 200 with an error field rather than a 4xx
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": "Invalid username or password."
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .login_password("alice", "wrong")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(response.error.as_deref(), Some("Invalid username or password."));
    assert!(response.user.is_none());
}

#[tokio::test]
async fn test_password_login_empty_body_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.login_password("alice", "hunter2").await.unwrap();

    assert!(response.is_none());
}

#[tokio::test]
async fn test_password_login_null_body_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.login_password("alice", "hunter2").await.unwrap();

    assert!(response.is_none());
}

// =============================================================================
// Social and SSO Login
// =============================================================================

#[tokio::test]
async fn test_social_login_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/social-login"))
        .and(body_json(serde_json::json!({"access_token": "fb_token"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "wp_user_id": 7,
            "user": {"picture": "https://img.example/p.jpg"},
            "cookie": "tok_fb"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.login_social("fb_token").await.unwrap().unwrap();

    assert_eq!(response.wp_user_id, Some(7));
    assert_eq!(response.cookie.as_deref(), Some("tok_fb"));
}

#[tokio::test]
async fn test_sso_login_sends_composed_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/sso-login"))
        .and(body_json(serde_json::json!({
            "email": "bob@example.com",
            "display_name": "Bob Lee",
            "user_name": "bob"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "wp_user_id": 9,
            "cookie": "tok_sso"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .login_sso("bob@example.com", "Bob Lee", "bob")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(response.wp_user_id, Some(9));
}

// =============================================================================
// Customer Directory
// =============================================================================

#[tokio::test]
async fn test_fetch_customer_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/customers/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 42,
            "name": "Alice",
            "email": "alice@example.com"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let customer: Customer = client.fetch_customer_by_id(42).await.unwrap().unwrap();

    assert_eq!(customer.id, 42);
    assert_eq!(customer.name.as_deref(), Some("Alice"));
}

// =============================================================================
// Error Handling
// =============================================================================

#[tokio::test]
async fn test_http_error_with_structured_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/customers/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": "NotFound",
            "message": "Customer not found"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client.fetch_customer_by_id(99).await.unwrap_err();

    assert_eq!(error.status(), 404);
    assert_eq!(error.code(), "NotFound");
    assert_eq!(error.message(), "Customer not found");
    assert!(!error.is_network_error());
}

#[tokio::test]
async fn test_http_503_is_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(503).set_body_string("gateway sad"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client.login_password("alice", "hunter2").await.unwrap_err();

    assert_eq!(error.status(), 503);
    assert!(error.is_network_error());
}

#[tokio::test]
async fn test_malformed_json_is_network_class_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client.login_password("alice", "hunter2").await.unwrap_err();

    assert_eq!(error.code(), "ParseError");
    assert!(error.is_network_error());
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Nothing listens on this port
    let client = ApiClient::new(ApiClientConfig::new("http://127.0.0.1:1"));
    let error = client.login_password("alice", "hunter2").await.unwrap_err();

    assert_eq!(error.status(), 0);
    assert!(error.is_network_error());
}
