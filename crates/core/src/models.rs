//! Static provider profiles for the supported video models.
//!
//! Each profile carries the upstream owner/model pair plus its
//! provider-specific input payload shape. The set is fixed at compile
//! time; an unknown model id resolves to the default profile.

use serde::Serialize;
use serde_json::{json, Value};

/// Model id used when a request names an unknown model.
pub const DEFAULT_MODEL_ID: &str = "minimax";

/// A supported video-generation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderProfile {
    Minimax,
    Luma,
    Kling,
}

impl ProviderProfile {
    pub const ALL: &'static [ProviderProfile] = &[
        ProviderProfile::Minimax,
        ProviderProfile::Luma,
        ProviderProfile::Kling,
    ];

    /// Resolve a model id, falling back to the default profile.
    pub fn resolve(id: &str) -> ProviderProfile {
        match id {
            "minimax" => ProviderProfile::Minimax,
            "luma" => ProviderProfile::Luma,
            "kling" => ProviderProfile::Kling,
            _ => ProviderProfile::Minimax,
        }
    }

    /// Short id used in requests and settings.
    pub fn id(self) -> &'static str {
        match self {
            ProviderProfile::Minimax => "minimax",
            ProviderProfile::Luma => "luma",
            ProviderProfile::Kling => "kling",
        }
    }

    /// Human-readable model name.
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderProfile::Minimax => "Minimax Hailuo",
            ProviderProfile::Luma => "Luma Dream Machine",
            ProviderProfile::Kling => "Kling AI",
        }
    }

    /// Upstream owner namespace.
    pub fn owner(self) -> &'static str {
        match self {
            ProviderProfile::Minimax => "minimax",
            ProviderProfile::Luma => "luma",
            ProviderProfile::Kling => "kwaivgi",
        }
    }

    /// Upstream model slug.
    pub fn model(self) -> &'static str {
        match self {
            ProviderProfile::Minimax => "video-01",
            ProviderProfile::Luma => "ray",
            ProviderProfile::Kling => "kling-video",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ProviderProfile::Minimax => "Hailuo AI - 6 second high-quality clips",
            ProviderProfile::Luma => "Luma AI - cinematic quality video",
            ProviderProfile::Kling => "Kuaishou Kling - highly detailed video",
        }
    }

    /// Build the provider-specific input payload for a prompt.
    pub fn input_payload(self, prompt: &str) -> Value {
        match self {
            ProviderProfile::Minimax => json!({
                "prompt": prompt,
                "prompt_optimizer": true,
            }),
            ProviderProfile::Luma => json!({
                "prompt": prompt,
            }),
            ProviderProfile::Kling => json!({
                "prompt": prompt,
                "negative_prompt": "blurry, low quality",
                "cfg_scale": 0.5,
                "duration": 5,
            }),
        }
    }
}

/// Listing entry for the model-selection surface.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// All supported models, in presentation order.
pub fn available_models() -> Vec<ModelInfo> {
    ProviderProfile::ALL
        .iter()
        .map(|profile| ModelInfo {
            id: profile.id(),
            name: profile.display_name(),
            description: profile.description(),
        })
        .collect()
}
