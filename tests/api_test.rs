//! Integration tests for API endpoints.
//!
//! The router is driven in-process with a stub upstream, so no network
//! access is needed.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use random_user_api::api::{create_router, AppState};
use random_user_api::domain::ResultCount;
use random_user_api::errors::{AppError, AppResult};
use random_user_api::infra::UserSource;
use random_user_api::services::UserFeed;

// =============================================================================
// Stub Upstream
// =============================================================================

/// Upstream stub returning a canned body or a transport failure
struct StubSource {
    body: Result<String, String>,
}

impl StubSource {
    fn body(body: Value) -> Self {
        Self {
            body: Ok(body.to_string()),
        }
    }

    fn raw(body: &str) -> Self {
        Self {
            body: Ok(body.to_string()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            body: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl UserSource for StubSource {
    async fn fetch(&self, _count: ResultCount) -> AppResult<String> {
        self.body.clone().map_err(AppError::upstream)
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn app(source: StubSource) -> Router {
    let service = Arc::new(UserFeed::new(Arc::new(source)));
    create_router(AppState::new(service))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn upstream_user(first: &str, last: &str, email: &str, age: u32) -> Value {
    json!({
        "name": {"title": "Mx", "first": first, "last": last},
        "email": email,
        "dob": {"date": "1990-01-01T00:00:00.000Z", "age": age}
    })
}

fn five_users() -> Value {
    json!({
        "results": [
            upstream_user("Jane", "Doe", "jane@example.com", 30),
            upstream_user("John", "Smith", "john@example.com", 41),
            upstream_user("Ana", "Lopez", "ana@example.com", 25),
            upstream_user("Li", "Wei", "li@example.com", 52),
            upstream_user("Sam", "Reed", "sam@example.com", 67),
        ],
        "info": {"seed": "abc", "results": 5, "page": 1, "version": "1.4"}
    })
}

// =============================================================================
// Multi-user Endpoint
// =============================================================================

#[tokio::test]
async fn test_random_users_returns_five_records() {
    let (status, body) = get(app(StubSource::body(five_users())), "/random-users/").await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().expect("array body");
    assert_eq!(users.len(), 5);
    for user in users {
        assert!(user.get("name").is_some());
        assert!(user.get("email").is_some());
        assert!(user.get("age").is_some());
    }
    assert_eq!(
        users[1],
        json!({"name": "John Smith", "email": "john@example.com", "age": "41"})
    );
}

#[tokio::test]
async fn test_random_users_without_trailing_slash() {
    let (status, body) = get(app(StubSource::body(five_users())), "/random-users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn test_random_users_empty_results_is_404() {
    let (status, body) = get(app(StubSource::raw(r#"{"results": []}"#)), "/random-users/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "No user data found"}));
}

#[tokio::test]
async fn test_random_users_malformed_record_is_500_with_details() {
    let payload = json!({"results": [
        upstream_user("Jane", "Doe", "jane@example.com", 30),
        {"name": {"first": "John"}, "email": "john@example.com", "dob": {"age": 41}},
    ]});

    let (status, body) = get(app(StubSource::body(payload)), "/random-users/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error processing user data");
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("results[1].name.last"));
}

#[tokio::test]
async fn test_random_users_validation_failure_is_400() {
    let payload = json!({"results": [upstream_user("Jane", "Doe", "jane-at-example", 30)]});

    let (status, body) = get(app(StubSource::body(payload)), "/random-users/").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"email": ["Enter a valid email address."]}));
}

// =============================================================================
// Single-user Endpoint
// =============================================================================

#[tokio::test]
async fn test_single_user_returns_object() {
    let payload = json!({"results": [{
        "name": {"first": "Jane", "last": "Doe"},
        "email": "jane@example.com",
        "dob": {"age": 30}
    }]});

    let (status, body) = get(app(StubSource::body(payload)), "/single-user/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"name": "Jane Doe", "email": "jane@example.com", "age": "30"})
    );
}

#[tokio::test]
async fn test_single_user_missing_results_is_404() {
    let (status, body) = get(app(StubSource::raw(r#"{"info": {}}"#)), "/single-user/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "No user data found"}));
}

#[tokio::test]
async fn test_single_user_invalid_json_is_500() {
    let (status, body) = get(app(StubSource::raw("not json")), "/single-user/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error processing user data");
    assert!(body.get("details").is_some());
}

// =============================================================================
// Upstream Failures
// =============================================================================

#[tokio::test]
async fn test_transport_error_is_500_on_both_endpoints() {
    for uri in ["/random-users/", "/single-user/"] {
        let source = StubSource::failing("error sending request for url");
        let (status, body) = get(app(source), uri).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(body, json!({"error": "error sending request for url"}));
    }
}

// =============================================================================
// Supplementary Endpoints
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get(app(StubSource::failing("unused")), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (status, body) = get(app(StubSource::failing("unused")), "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/random-users/").is_some());
    assert!(body["paths"].get("/single-user/").is_some());
}
