//! Integration tests for the history, settings, models, and account
//! validation endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: history starts empty and tolerates deletes of unknown ids
// ---------------------------------------------------------------------------

#[tokio::test]
async fn history_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = get(app, "/api/v1/history").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn deleting_unknown_history_id_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = delete(app, "/api/v1/history/no-such-id").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn clearing_empty_history_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = delete(app, "/api/v1/history").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Test: settings round-trip through the HTTP surface
// ---------------------------------------------------------------------------

#[tokio::test]
async fn settings_default_and_partial_update() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = get(app.clone(), "/api/v1/settings").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["api_token"], "");
    assert_eq!(json["data"]["default_model"], "minimax");
    assert_eq!(json["data"]["default_aspect_ratio"], "16:9");

    // Partial update: untouched fields keep their values.
    let response = put_json(
        app.clone(),
        "/api/v1/settings",
        json!({"default_model": "luma"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["default_model"], "luma");
    assert_eq!(json["data"]["default_aspect_ratio"], "16:9");

    let response = get(app, "/api/v1/settings").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["default_model"], "luma");
}

// ---------------------------------------------------------------------------
// Test: model catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn models_lists_the_catalog_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = get(app, "/api/v1/models").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let models = json["data"].as_array().unwrap();

    assert_eq!(models.len(), 3);
    assert_eq!(models[0]["id"], "minimax");
    assert_eq!(models[0]["name"], "Minimax Hailuo");
    assert_eq!(models[1]["id"], "luma");
    assert_eq!(models[2]["id"], "kling");
    assert!(models.iter().all(|m| m["description"].is_string()));
}

// ---------------------------------------------------------------------------
// Test: account validation verdicts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validating_blank_token_is_rejected_without_network() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = post_json(app, "/api/v1/account/validate", json!({"token": "  "})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["valid"], false);
}

#[tokio::test]
async fn validating_token_against_unreachable_upstream_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = post_json(
        app,
        "/api/v1/account/validate",
        json!({"token": "r8_test_token"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["valid"], false);
    assert!(json["data"]["error"].is_string());
}
