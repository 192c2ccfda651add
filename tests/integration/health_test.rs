//! Integration tests for the health endpoint and request correlation.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::empty().await;

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
    assert!(response.body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = TestApp::empty().await;

    let response = app.request("GET", "/no-such-route", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = TestApp::empty().await;

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .header("x-request-id", "test-correlation-id")
        .body(Body::empty())
        .expect("Failed to build request");

    let response = app
        .router
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    assert_eq!(response.headers()["x-request-id"], "test-correlation-id");
}

#[tokio::test]
async fn test_request_id_is_generated_when_absent() {
    let app = TestApp::empty().await;

    let response = app.request("GET", "/health", None).await;

    let header = response
        .headers
        .get("x-request-id")
        .expect("x-request-id header");
    assert!(!header.to_str().expect("ascii header").is_empty());
}
