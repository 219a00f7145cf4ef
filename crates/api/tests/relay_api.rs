//! Integration tests for the upstream relay endpoints.
//!
//! The test config points the relay at an unroutable local port, so
//! authenticated requests exercise the transport-failure path without
//! touching the real upstream.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{body_json, get, post_json};
use serde_json::json;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: relay routes reject requests without an Authorization header
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_prediction_without_auth_returns_401() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = post_json(app, "/api/predictions", json!({"input": {}})).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Authorization header required");
}

#[tokio::test]
async fn create_model_prediction_without_auth_returns_401() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = post_json(
        app,
        "/api/models/minimax/video-01/predictions",
        json!({"input": {"prompt": "a cat"}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Authorization header required");
}

#[tokio::test]
async fn get_prediction_without_auth_returns_401() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = get(app, "/api/predictions/abc123").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Authorization header required");
}

#[tokio::test]
async fn get_account_without_auth_returns_401() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = get(app, "/api/account").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Authorization header required");
}

// ---------------------------------------------------------------------------
// Test: authenticated relay request that cannot reach the upstream
// ---------------------------------------------------------------------------

#[tokio::test]
async fn relay_upstream_unreachable_returns_500_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/account")
        .header(header::AUTHORIZATION, "Bearer r8_test_token")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

// ---------------------------------------------------------------------------
// Test: CORS preflight succeeds for browser clients
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_for_relay_route_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/predictions")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
