pub mod health;
pub mod relay;
pub mod v1;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /predictions                           relay: create (flat), POST
/// /predictions/{id}                      relay: status, GET
/// /models/{owner}/{model}/predictions    relay: create (model-scoped), POST
/// /account                               relay: account info, GET
///
/// /v1/generate                           start workflow, POST
/// /v1/generate/progress                  snapshot, GET
/// /v1/generate/reset                     abandon observation, POST
/// /v1/models                             provider listing, GET
/// /v1/history                            list GET, clear DELETE
/// /v1/history/{id}                       delete one, DELETE
/// /v1/settings                           get GET, merge-update PUT
/// /v1/account/validate                   credential check, POST
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(relay::router())
        .nest("/v1", v1::router())
}
