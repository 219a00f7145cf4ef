//! Handlers driving the generation workflow.
//!
//! Routes:
//! - `POST /generate`          -- start a generation
//! - `GET  /generate/progress` -- snapshot of the active generation
//! - `POST /generate/reset`    -- abandon observation of the active job

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use videoai_core::types::GenerationRequest;
use videoai_replicate::engine;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    pub prompt: String,
    /// Model id; defaults to the settings record.
    #[serde(default)]
    pub model: Option<String>,
    /// Defaults to the settings record.
    #[serde(default)]
    pub aspect_ratio: Option<String>,
    /// Bearer token; defaults to the stored token. Absent both ways
    /// selects the demo path.
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateAccepted {
    pub state: &'static str,
}

/// POST /api/v1/generate
///
/// Starts the workflow as a background task and returns 202. The
/// single-generation contract is advisory: a second start while one is
/// active is rejected with 409, nothing blocks the engine itself.
pub async fn start(
    State(state): State<AppState>,
    Json(body): Json<GenerateBody>,
) -> AppResult<impl IntoResponse> {
    if body.prompt.trim().is_empty() {
        return Err(AppError::BadRequest("prompt must not be empty".to_string()));
    }

    let settings = state.settings.lock().await.get().clone();
    let request = GenerationRequest {
        prompt: body.prompt,
        model: body.model.unwrap_or(settings.default_model),
        aspect_ratio: body.aspect_ratio.unwrap_or(settings.default_aspect_ratio),
        credential: body
            .token
            .filter(|token| !token.trim().is_empty())
            .or_else(|| (!settings.api_token.trim().is_empty()).then_some(settings.api_token)),
    };

    let Some(epoch) = state.tracker.begin() else {
        return Err(AppError::Conflict(
            "a generation is already running".to_string(),
        ));
    };

    tracing::info!(model = %request.model, demo = !request.has_credential(), "Generation started");
    tokio::spawn(run_workflow(state.clone(), request, epoch));

    Ok((
        StatusCode::ACCEPTED,
        Json(DataResponse {
            data: GenerateAccepted { state: "running" },
        }),
    ))
}

/// GET /api/v1/generate/progress
///
/// Snapshot of the active generation: last progress event while
/// running, the result or error once terminal.
pub async fn progress(State(state): State<AppState>) -> impl IntoResponse {
    Json(DataResponse {
        data: state.tracker.snapshot(),
    })
}

/// POST /api/v1/generate/reset
///
/// Abandons observation of an in-flight job. The upstream job is not
/// cancelled; any late updates from it are dropped by the epoch check.
pub async fn reset(State(state): State<AppState>) -> impl IntoResponse {
    state.tracker.reset();
    tracing::info!("Generation tracking reset");
    Json(DataResponse {
        data: state.tracker.snapshot(),
    })
}

/// Drive one workflow to completion, updating the tracker and, on
/// success, the history store.
async fn run_workflow(state: AppState, request: GenerationRequest, epoch: u64) {
    let observer = Arc::clone(&state.tracker);
    let outcome = engine::generate(&state.replicate, &request, move |event| {
        observer.progress(epoch, event);
    })
    .await;

    match outcome {
        Ok(result) => {
            // Skip persistence when observation was abandoned mid-run.
            if state.tracker.is_current(epoch) {
                state.history.lock().await.append(
                    &result.prompt,
                    &result.video_url,
                    &result.model,
                    &request.aspect_ratio,
                );
            }
            state.tracker.succeed(epoch, result);
        }
        Err(err) => {
            tracing::warn!(error = %err, code = err.code(), "Generation failed");
            state.tracker.fail(epoch, &err);
        }
    }
}
