//! Route definitions for the `/api/v1` application surface.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{account, generate, history, models, settings};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate::start))
        .route("/generate/progress", get(generate::progress))
        .route("/generate/reset", post(generate::reset))
        .route("/models", get(models::list))
        .route("/history", get(history::list).delete(history::clear))
        .route("/history/{id}", delete(history::delete))
        .route("/settings", get(settings::get).put(settings::update))
        .route("/account/validate", post(account::validate))
}
