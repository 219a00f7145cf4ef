//! Tracks the single advisory in-flight generation.
//!
//! The tracker is a snapshot the progress endpoint polls. [`begin`]
//! claims the active slot and returns an epoch token; every later
//! update must present that token, and updates carrying a stale epoch
//! are dropped. That is how [`reset`] abandons observation of an
//! in-flight job without cancelling it upstream: the job keeps
//! running, its late writes just never land.
//!
//! [`begin`]: GenerationTracker::begin
//! [`reset`]: GenerationTracker::reset

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use videoai_core::error::GenerateError;
use videoai_core::progress::{ProgressEvent, STAGE_STARTING};
use videoai_core::types::GenerationResult;

/// Where the tracked generation currently stands.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GenerationSnapshot {
    #[default]
    Idle,
    Running {
        event: ProgressEvent,
    },
    Succeeded {
        result: GenerationResult,
    },
    Failed {
        code: &'static str,
        message: String,
    },
}

#[derive(Default)]
struct Inner {
    epoch: u64,
    running: bool,
    snapshot: GenerationSnapshot,
}

/// Epoch-guarded snapshot of the active generation.
#[derive(Default)]
pub struct GenerationTracker {
    inner: Mutex<Inner>,
}

impl GenerationTracker {
    /// Claim the active slot. Returns the epoch token to present on
    /// updates, or `None` when a generation is already running.
    pub fn begin(&self) -> Option<u64> {
        let mut inner = self.lock();
        if inner.running {
            return None;
        }
        inner.epoch += 1;
        inner.running = true;
        inner.snapshot = GenerationSnapshot::Running {
            event: ProgressEvent::new(STAGE_STARTING, "Starting up...", 0),
        };
        Some(inner.epoch)
    }

    /// Record a progress event if `epoch` is still current.
    pub fn progress(&self, epoch: u64, event: ProgressEvent) {
        let mut inner = self.lock();
        if inner.epoch != epoch {
            return;
        }
        inner.snapshot = GenerationSnapshot::Running { event };
    }

    /// Mark the tracked generation succeeded if `epoch` is still
    /// current. Returns whether the write landed.
    pub fn succeed(&self, epoch: u64, result: GenerationResult) -> bool {
        let mut inner = self.lock();
        if inner.epoch != epoch {
            return false;
        }
        inner.running = false;
        inner.snapshot = GenerationSnapshot::Succeeded { result };
        true
    }

    /// Mark the tracked generation failed if `epoch` is still current.
    pub fn fail(&self, epoch: u64, error: &GenerateError) -> bool {
        let mut inner = self.lock();
        if inner.epoch != epoch {
            return false;
        }
        inner.running = false;
        inner.snapshot = GenerationSnapshot::Failed {
            code: error.code(),
            message: error.to_string(),
        };
        true
    }

    /// Whether `epoch` still identifies the observed generation.
    pub fn is_current(&self, epoch: u64) -> bool {
        self.lock().epoch == epoch
    }

    /// Abandon observation: bump the epoch and clear to idle. The
    /// upstream job is not contacted.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.epoch += 1;
        inner.running = false;
        inner.snapshot = GenerationSnapshot::Idle;
    }

    pub fn snapshot(&self) -> GenerationSnapshot {
        self.lock().snapshot.clone()
    }

    /// Lock the inner state, recovering from poisoning -- a panicked
    /// writer leaves a consistent snapshot behind.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
