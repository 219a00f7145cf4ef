//! Handlers for the settings record.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use videoai_store::SettingsUpdate;

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/settings
pub async fn get(State(state): State<AppState>) -> impl IntoResponse {
    let settings = state.settings.lock().await;
    Json(DataResponse {
        data: settings.get().clone(),
    })
}

/// PUT /api/v1/settings -- partial merge; omitted fields are unchanged.
pub async fn update(
    State(state): State<AppState>,
    Json(patch): Json<SettingsUpdate>,
) -> impl IntoResponse {
    let mut settings = state.settings.lock().await;
    Json(DataResponse {
        data: settings.update(patch).clone(),
    })
}
