//! Handler for credential validation.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use videoai_replicate::engine;

use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ValidateBody {
    pub token: String,
}

/// POST /api/v1/account/validate
///
/// Checks the token against the upstream account endpoint. Always
/// answers 200; the verdict is in the body.
pub async fn validate(
    State(state): State<AppState>,
    Json(body): Json<ValidateBody>,
) -> impl IntoResponse {
    let check = engine::validate_credential(&state.replicate, &body.token).await;
    Json(DataResponse { data: check })
}
