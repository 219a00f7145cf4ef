//! Handlers for the history (result store) resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/history -- newest first.
pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    let history = state.history.lock().await;
    Json(DataResponse {
        data: history.list().to_vec(),
    })
}

/// DELETE /api/v1/history/{id}
///
/// Idempotent: deleting an absent id leaves the store unchanged and
/// still answers 204.
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    state.history.lock().await.delete(&id);
    StatusCode::NO_CONTENT
}

/// DELETE /api/v1/history -- clear all records.
pub async fn clear(State(state): State<AppState>) -> impl IntoResponse {
    state.history.lock().await.clear();
    StatusCode::NO_CONTENT
}
