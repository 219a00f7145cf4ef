//! Route definitions for the proxy relay surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::relay;
use crate::state::AppState;

/// Routes mounted at `/api` (the paths the browser app calls).
///
/// ```text
/// POST /predictions                           -> create_prediction
/// GET  /predictions/{id}                      -> get_prediction
/// POST /models/{owner}/{model}/predictions    -> create_model_prediction
/// GET  /account                               -> get_account
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/predictions", post(relay::create_prediction))
        .route("/predictions/{id}", get(relay::get_prediction))
        .route(
            "/models/{owner}/{model}/predictions",
            post(relay::create_model_prediction),
        )
        .route("/account", get(relay::get_account))
}
