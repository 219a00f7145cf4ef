//! Domain error taxonomy for the generation workflow.

/// Everything that can go wrong between prompt submission and a
/// resolved video URL.
///
/// Storage write failures are deliberately absent: the store swallows
/// them at its own boundary and the session continues in memory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The upstream rejected the bearer token (HTTP 401 on creation).
    #[error("API token was rejected. Check your Replicate token.")]
    InvalidCredential,

    /// The account has no credits left (HTTP 402 on creation).
    #[error("Out of credits. Top up your account at replicate.com.")]
    QuotaExhausted,

    /// The owner/model pair does not exist upstream (HTTP 404).
    #[error("Model not found. Try a different model.")]
    ModelNotFound,

    /// Any other non-success response from the upstream API.
    #[error("API error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// The relay (or upstream host) could not be reached at all.
    /// Distinct from an upstream API error: nothing answered.
    #[error("Cannot reach the API proxy: {0}")]
    ProxyUnreachable(String),

    /// The job reached the `failed` terminal status.
    #[error("Video generation failed: {0}")]
    JobFailed(String),

    /// The job reached the `canceled` terminal status.
    #[error("Video generation was canceled.")]
    JobCanceled,

    /// The poll budget ran out before a terminal status was observed.
    #[error("Timed out waiting for the video to finish.")]
    JobTimeout,

    /// The job succeeded but no usable video URL could be extracted
    /// from its output.
    #[error("No video found in the job output.")]
    OutputMissing,
}

impl GenerateError {
    /// Stable machine-readable code for API responses and snapshots.
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::InvalidCredential => "INVALID_CREDENTIAL",
            GenerateError::QuotaExhausted => "QUOTA_EXHAUSTED",
            GenerateError::ModelNotFound => "MODEL_NOT_FOUND",
            GenerateError::Upstream { .. } => "UPSTREAM_ERROR",
            GenerateError::ProxyUnreachable(_) => "PROXY_UNREACHABLE",
            GenerateError::JobFailed(_) => "JOB_FAILED",
            GenerateError::JobCanceled => "JOB_CANCELED",
            GenerateError::JobTimeout => "JOB_TIMEOUT",
            GenerateError::OutputMissing => "OUTPUT_MISSING",
        }
    }
}
