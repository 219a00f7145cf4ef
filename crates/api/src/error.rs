use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use videoai_core::error::GenerateError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`GenerateError`] for domain errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON
/// error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level workflow error.
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A conflicting request, e.g. starting a second generation while
    /// one is active.
    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Generate(err) => (generate_status(err), err.code(), err.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// HTTP status for each domain error.
fn generate_status(err: &GenerateError) -> StatusCode {
    match err {
        GenerateError::InvalidCredential => StatusCode::UNAUTHORIZED,
        GenerateError::QuotaExhausted => StatusCode::PAYMENT_REQUIRED,
        GenerateError::ModelNotFound => StatusCode::NOT_FOUND,
        GenerateError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        GenerateError::ProxyUnreachable(_) => StatusCode::BAD_GATEWAY,
        GenerateError::JobFailed(_) => StatusCode::BAD_GATEWAY,
        GenerateError::JobCanceled => StatusCode::CONFLICT,
        GenerateError::JobTimeout => StatusCode::GATEWAY_TIMEOUT,
        GenerateError::OutputMissing => StatusCode::UNPROCESSABLE_ENTITY,
    }
}
