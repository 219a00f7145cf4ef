//! Progress reporting for the generation workflow.
//!
//! Events are ephemeral: they are pushed synchronously to a
//! caller-supplied observer at every suspension point and never
//! persisted.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Polling constants
// ---------------------------------------------------------------------------

/// Seconds between status polls. Fixed interval; the upstream contract
/// has no backoff or jitter.
pub const POLL_INTERVAL_SECS: u64 = 5;

/// Hard cap on poll attempts (~10 minutes wall clock at 5 s each).
pub const MAX_POLL_ATTEMPTS: u32 = 120;

// ---------------------------------------------------------------------------
// Stage tags
// ---------------------------------------------------------------------------

pub const STAGE_STARTING: &str = "starting";
pub const STAGE_CONNECTING: &str = "connecting";
pub const STAGE_DEMO: &str = "demo";
pub const STAGE_QUEUED: &str = "queued";
pub const STAGE_PROCESSING: &str = "processing";
pub const STAGE_GENERATING: &str = "generating";
pub const STAGE_RENDERING: &str = "rendering";
pub const STAGE_COMPLETE: &str = "complete";

/// A progress update pushed to the workflow observer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressEvent {
    /// One of the stage tags above.
    pub status: String,
    /// Human-readable description of the current stage.
    pub message: String,
    /// Percentage estimate in `[0, 100]`.
    pub progress: u8,
}

impl ProgressEvent {
    pub fn new(status: &str, message: impl Into<String>, progress: u8) -> Self {
        Self {
            status: status.to_string(),
            message: message.into(),
            progress,
        }
    }
}

/// Interpolated progress estimate for poll `attempt` of `max_attempts`.
///
/// Climbs from 20 toward 90 as the attempt budget is consumed, clamped
/// at 90. Non-decreasing in `attempt`.
pub fn poll_progress(attempt: u32, max_attempts: u32) -> u8 {
    if max_attempts == 0 {
        return 90;
    }
    let raw = 20.0 + (f64::from(attempt) / f64::from(max_attempts)) * 70.0;
    raw.min(90.0).round() as u8
}
