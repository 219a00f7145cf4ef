//! Single-record settings persistence.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use videoai_core::types::Settings;

const SETTINGS_FILE: &str = "settings.json";

/// The one mutable settings record, backed by a JSON file.
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

/// Partial settings patch; `None` fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsUpdate {
    pub api_token: Option<String>,
    pub default_model: Option<String>,
    pub default_aspect_ratio: Option<String>,
}

impl SettingsStore {
    /// Open the store in `data_dir`. Absent or corrupt data yields the
    /// defaults (logged, non-fatal).
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        let path = data_dir.as_ref().join(SETTINGS_FILE);
        let settings = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Settings file is corrupt, using defaults",
                );
                Settings::default()
            }),
            Err(_) => Settings::default(),
        };
        Self { path, settings }
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Merge the patch into the record and persist best-effort.
    pub fn update(&mut self, update: SettingsUpdate) -> &Settings {
        if let Some(api_token) = update.api_token {
            self.settings.api_token = api_token;
        }
        if let Some(default_model) = update.default_model {
            self.settings.default_model = default_model;
        }
        if let Some(default_aspect_ratio) = update.default_aspect_ratio {
            self.settings.default_aspect_ratio = default_aspect_ratio;
        }
        self.persist();
        &self.settings
    }

    /// Best-effort write-through. Failures are logged and swallowed.
    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to persist settings, continuing in memory",
            );
        }
    }

    fn try_persist(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.settings).map_err(std::io::Error::other)?;
        fs::write(&self.path, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::open(dir.path());
        assert_eq!(store.get(), &Settings::default());
    }

    #[test]
    fn update_merges_only_given_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SettingsStore::open(dir.path());

        store.update(SettingsUpdate {
            api_token: Some("r8_token".to_string()),
            ..Default::default()
        });

        assert_eq!(store.get().api_token, "r8_token");
        // Untouched fields keep their defaults.
        assert_eq!(store.get().default_model, Settings::default().default_model);
    }

    #[test]
    fn settings_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = SettingsStore::open(dir.path());
            store.update(SettingsUpdate {
                default_model: Some("kling".to_string()),
                ..Default::default()
            });
        }
        let store = SettingsStore::open(dir.path());
        assert_eq!(store.get().default_model, "kling");
    }

    #[test]
    fn corrupt_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "][").unwrap();

        let store = SettingsStore::open(dir.path());
        assert_eq!(store.get(), &Settings::default());
    }
}
