//! The job workflow engine.
//!
//! [`generate`] drives one request end to end: submit the prediction,
//! poll to a terminal status, resolve the video URL. The upstream
//! polling contract is reproduced exactly: a fixed 5 s interval, a
//! hard cap of 120 attempts, and silent skips of failed polls (each
//! skip still consumes an attempt).

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tokio::time::sleep;
use videoai_core::error::GenerateError;
use videoai_core::job::{extract_video_url, JobStatus};
use videoai_core::models::ProviderProfile;
use videoai_core::progress::{
    poll_progress, ProgressEvent, MAX_POLL_ATTEMPTS, POLL_INTERVAL_SECS, STAGE_COMPLETE,
    STAGE_CONNECTING, STAGE_PROCESSING, STAGE_QUEUED, STAGE_STARTING,
};
use videoai_core::types::{GenerationRequest, GenerationResult};

use crate::api::{PredictionsApi, ReplicateApi, ReplicateApiError};
use crate::demo;

/// Run the full generation workflow for one request.
///
/// Requests without a usable credential take the demo path and never
/// touch `api`. Progress events are pushed synchronously to
/// `on_progress` at every stage; polls are strictly sequential.
pub async fn generate<A, F>(
    api: &A,
    request: &GenerationRequest,
    mut on_progress: F,
) -> Result<GenerationResult, GenerateError>
where
    A: PredictionsApi + ?Sized,
    F: FnMut(ProgressEvent),
{
    on_progress(ProgressEvent::new(STAGE_STARTING, "Starting up...", 5));

    if !request.has_credential() {
        return Ok(demo::generate_demo(&request.prompt, &mut on_progress).await);
    }

    generate_live(api, request, &mut on_progress).await
}

async fn generate_live<A, F>(
    api: &A,
    request: &GenerationRequest,
    on_progress: &mut F,
) -> Result<GenerationResult, GenerateError>
where
    A: PredictionsApi + ?Sized,
    F: FnMut(ProgressEvent),
{
    let profile = ProviderProfile::resolve(&request.model);
    let token = request.credential.as_deref().unwrap_or_default();

    on_progress(ProgressEvent::new(
        STAGE_CONNECTING,
        format!("Connecting to {}...", profile.display_name()),
        10,
    ));

    let input = profile.input_payload(&request.prompt);
    tracing::debug!(
        owner = profile.owner(),
        model = profile.model(),
        "Submitting prediction",
    );

    let prediction = api
        .create_model_prediction(profile.owner(), profile.model(), &input, token)
        .await
        .map_err(map_create_error)?;

    // The creation response can already carry a failure detail.
    if let Some(detail) = prediction.error.as_deref().filter(|e| !e.is_empty()) {
        return Err(GenerateError::JobFailed(detail.to_string()));
    }

    tracing::info!(job_id = %prediction.id, "Prediction created, polling");
    on_progress(ProgressEvent::new(
        STAGE_QUEUED,
        "Waiting in the queue...",
        20,
    ));

    let mut current = prediction;
    let mut attempts: u32 = 0;

    while !current.status.is_terminal() && attempts < MAX_POLL_ATTEMPTS {
        sleep(Duration::from_secs(POLL_INTERVAL_SECS)).await;
        attempts += 1;

        let progress = poll_progress(attempts, MAX_POLL_ATTEMPTS);
        on_progress(ProgressEvent::new(
            STAGE_PROCESSING,
            format!(
                "{} is generating the video... ({progress}%)",
                profile.display_name()
            ),
            progress,
        ));

        match api.get_prediction(&current.id, token).await {
            Ok(next) => {
                if let Some(logs) = next.logs.as_deref() {
                    tracing::debug!(job_id = %next.id, logs = log_tail(logs), "Poll logs");
                }
                current = next;
            }
            // A failed poll is skipped; it still consumes an attempt.
            Err(e) => {
                tracing::debug!(attempt = attempts, error = %e, "Poll failed, skipping");
            }
        }
    }

    match current.status {
        JobStatus::Failed => Err(GenerateError::JobFailed(
            current
                .error
                .filter(|detail| !detail.is_empty())
                .unwrap_or_else(|| "Video generation failed. Please try again.".to_string()),
        )),
        JobStatus::Canceled => Err(GenerateError::JobCanceled),
        JobStatus::Succeeded => {
            on_progress(ProgressEvent::new(STAGE_COMPLETE, "Done!", 100));
            let output = current.output.as_ref().ok_or(GenerateError::OutputMissing)?;
            let video_url = extract_video_url(output).ok_or(GenerateError::OutputMissing)?;
            Ok(GenerationResult {
                video_url,
                model: profile.display_name().to_string(),
                prompt: request.prompt.clone(),
                is_demo: false,
            })
        }
        // Attempt budget exhausted without a terminal status.
        _ => Err(GenerateError::JobTimeout),
    }
}

/// Map a failed creation call onto the domain taxonomy.
fn map_create_error(err: ReplicateApiError) -> GenerateError {
    match err {
        ReplicateApiError::Api { status: 401, .. } => GenerateError::InvalidCredential,
        ReplicateApiError::Api { status: 402, .. } => GenerateError::QuotaExhausted,
        ReplicateApiError::Api { status: 404, .. } => GenerateError::ModelNotFound,
        ReplicateApiError::Api { status, body } => GenerateError::Upstream {
            status,
            message: upstream_detail(&body).unwrap_or_else(|| format!("API error: {status}")),
        },
        ReplicateApiError::Request(e) => GenerateError::ProxyUnreachable(e.to_string()),
    }
}

/// Pull the `detail` or `error` message out of an upstream error body.
fn upstream_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .or_else(|| value.get("error"))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Last 100 bytes of a log blob, respecting char boundaries.
fn log_tail(logs: &str) -> &str {
    let mut start = logs.len().saturating_sub(100);
    while start < logs.len() && !logs.is_char_boundary(start) {
        start += 1;
    }
    &logs[start..]
}

// ---------------------------------------------------------------------------
// Credential validation
// ---------------------------------------------------------------------------

/// Outcome of a credential check against the account endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialCheck {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Check a token against `GET /account`.
///
/// A blank token is invalid without a network call; a transport
/// failure reports the proxy as unreachable rather than the token as
/// bad.
pub async fn validate_credential(api: &ReplicateApi, token: &str) -> CredentialCheck {
    if token.trim().is_empty() {
        return CredentialCheck {
            valid: false,
            username: None,
            error: Some("Token is empty".to_string()),
        };
    }

    match api.get_account(token).await {
        Ok(account) => CredentialCheck {
            valid: true,
            username: Some(account.username),
            error: None,
        },
        Err(ReplicateApiError::Api { status, .. }) => CredentialCheck {
            valid: false,
            username: None,
            error: Some(format!("Token was rejected ({status})")),
        },
        Err(ReplicateApiError::Request(e)) => CredentialCheck {
            valid: false,
            username: None,
            error: Some(format!("Cannot reach the API proxy: {e}")),
        },
    }
}
