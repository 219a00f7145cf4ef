//! Handler for the fixed provider listing.

use axum::response::IntoResponse;
use axum::Json;
use videoai_core::models::available_models;

use crate::response::DataResponse;

/// GET /api/v1/models
pub async fn list() -> impl IntoResponse {
    Json(DataResponse {
        data: available_models(),
    })
}
