//! Shared request, result, and record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::DEFAULT_MODEL_ID;

/// Default aspect ratio for new requests and settings.
pub const DEFAULT_ASPECT_RATIO: &str = "16:9";

/// A user submission. Immutable once handed to the engine.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    /// Model id; unknown values fall back to the default profile.
    pub model: String,
    /// Stored on the history record; not injected into provider payloads.
    pub aspect_ratio: String,
    /// Bearer token for the upstream API. Absent or blank selects the
    /// demo path, which never contacts the API.
    pub credential: Option<String>,
}

impl GenerationRequest {
    /// Whether a usable credential is present.
    pub fn has_credential(&self) -> bool {
        self.credential
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }
}

/// Outcome of a completed workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub video_url: String,
    /// Display name of the model that produced the video.
    pub model: String,
    pub prompt: String,
    /// True when the result came from the credential-free demo path.
    pub is_demo: bool,
}

/// A persisted record of a past successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    pub prompt: String,
    pub video_url: String,
    pub model: String,
    pub aspect_ratio: String,
    pub created_at: DateTime<Utc>,
}

/// User settings, read at workflow start and UI load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Upstream API token; empty means demo mode.
    pub api_token: String,
    pub default_model: String,
    pub default_aspect_ratio: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            default_model: DEFAULT_MODEL_ID.to_string(),
            default_aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
        }
    }
}
