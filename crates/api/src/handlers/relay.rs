//! Stateless relay endpoints mirroring the upstream predictions API.
//!
//! Each handler requires the caller's bearer credential, forwards the
//! request to the configured upstream base URL, and relays the
//! upstream status code and JSON body unchanged. No business logic
//! lives here.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// POST /api/models/{owner}/{model}/predictions -- create a job on the
/// model-scoped endpoint.
pub async fn create_model_prediction(
    State(state): State<AppState>,
    Path((owner, model)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let Some(auth) = authorization(&headers) else {
        return missing_auth();
    };
    let url = format!(
        "{}/models/{owner}/{model}/predictions",
        state.config.upstream_api_url
    );
    tracing::debug!(%url, "Relaying prediction creation");
    forward(
        state
            .http
            .post(&url)
            .header(header::AUTHORIZATION, auth)
            .json(&body),
    )
    .await
}

/// POST /api/predictions -- create a job on the flat endpoint
/// (version-keyed requests).
pub async fn create_prediction(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let Some(auth) = authorization(&headers) else {
        return missing_auth();
    };
    let url = format!("{}/predictions", state.config.upstream_api_url);
    forward(
        state
            .http
            .post(&url)
            .header(header::AUTHORIZATION, auth)
            .json(&body),
    )
    .await
}

/// GET /api/predictions/{id} -- fetch job status by id.
pub async fn get_prediction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let Some(auth) = authorization(&headers) else {
        return missing_auth();
    };
    let url = format!("{}/predictions/{id}", state.config.upstream_api_url);
    forward(state.http.get(&url).header(header::AUTHORIZATION, auth)).await
}

/// GET /api/account -- fetch account info for the supplied credential.
pub async fn get_account(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(auth) = authorization(&headers) else {
        return missing_auth();
    };
    let url = format!("{}/account", state.config.upstream_api_url);
    forward(state.http.get(&url).header(header::AUTHORIZATION, auth)).await
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn authorization(headers: &HeaderMap) -> Option<HeaderValue> {
    headers.get(header::AUTHORIZATION).cloned()
}

fn missing_auth() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Authorization header required" })),
    )
        .into_response()
}

/// Issue the upstream request and relay status + JSON body verbatim.
/// Transport failures surface as 500 with the error message.
async fn forward(request: reqwest::RequestBuilder) -> Response {
    match request.send().await {
        Ok(response) => {
            let status = StatusCode::from_u16(response.status().as_u16())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            match response.json::<Value>().await {
                Ok(body) => (status, Json(body)).into_response(),
                Err(e) => {
                    tracing::error!(error = %e, "Upstream response body was not JSON");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "error": e.to_string() })),
                    )
                        .into_response()
                }
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Relay request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
