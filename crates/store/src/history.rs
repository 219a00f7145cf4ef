//! Bounded, ordered store of past generation records.
//!
//! The JSON array on disk mirrors the in-memory list (newest first).
//! The list is capped: appending past the cap evicts the oldest
//! record.

use std::fs;
use std::path::{Path, PathBuf};

use videoai_core::types::HistoryRecord;

/// Maximum number of records kept.
pub const MAX_HISTORY_ITEMS: usize = 20;

const HISTORY_FILE: &str = "history.json";

/// Newest-first bounded record store backed by a single JSON file.
pub struct HistoryStore {
    path: PathBuf,
    records: Vec<HistoryRecord>,
}

impl HistoryStore {
    /// Open the store in `data_dir`, loading any existing records.
    ///
    /// A missing file starts empty; unreadable or corrupt data also
    /// degrades to an empty list (logged, non-fatal).
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        let path = data_dir.as_ref().join(HISTORY_FILE);
        let records = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "History file is corrupt, starting empty",
                );
                Vec::new()
            }),
            Err(_) => Vec::new(),
        };
        Self { path, records }
    }

    /// Prepend a new record, evicting the oldest past the cap.
    pub fn append(
        &mut self,
        prompt: &str,
        video_url: &str,
        model: &str,
        aspect_ratio: &str,
    ) -> HistoryRecord {
        let record = HistoryRecord {
            id: uuid::Uuid::new_v4().to_string(),
            prompt: prompt.to_string(),
            video_url: video_url.to_string(),
            model: model.to_string(),
            aspect_ratio: aspect_ratio.to_string(),
            created_at: chrono::Utc::now(),
        };
        self.records.insert(0, record.clone());
        self.records.truncate(MAX_HISTORY_ITEMS);
        self.persist();
        record
    }

    /// Newest-first view of the stored records.
    pub fn list(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Remove a record by id. Absent ids are a no-op.
    pub fn delete(&mut self, id: &str) {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        if self.records.len() != before {
            self.persist();
        }
    }

    /// Drop every record and remove the backing file.
    pub fn clear(&mut self) {
        self.records.clear();
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove history file",
                );
            }
        }
    }

    /// Best-effort write-through. Failures are logged and swallowed.
    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to persist history, continuing in memory",
            );
        }
    }

    fn try_persist(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.records).map_err(std::io::Error::other)?;
        fs::write(&self.path, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn append_n(store: &mut HistoryStore, n: usize) {
        for i in 0..n {
            store.append(&format!("prompt {i}"), "https://x/v.mp4", "Demo Mode", "16:9");
        }
    }

    #[test]
    fn append_puts_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::open(dir.path());

        store.append("first", "a.mp4", "Demo Mode", "16:9");
        store.append("second", "b.mp4", "Demo Mode", "16:9");

        let prompts: Vec<_> = store.list().iter().map(|r| r.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["second", "first"]);
    }

    #[test]
    fn cap_evicts_oldest() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::open(dir.path());

        append_n(&mut store, MAX_HISTORY_ITEMS + 5);

        assert_eq!(store.list().len(), MAX_HISTORY_ITEMS);
        // Newest survives, the five oldest are gone.
        assert_eq!(store.list()[0].prompt, "prompt 24");
        assert!(store.list().iter().all(|r| r.prompt != "prompt 0"));
        assert!(store.list().iter().all(|r| r.prompt != "prompt 4"));
        assert_eq!(
            store.list().last().map(|r| r.prompt.as_str()),
            Some("prompt 5")
        );
    }

    #[test]
    fn records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = HistoryStore::open(dir.path());
            store.append("kept", "a.mp4", "Demo Mode", "16:9");
        }
        let store = HistoryStore::open(dir.path());
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0].prompt, "kept");
    }

    #[test]
    fn delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::open(dir.path());
        let record = store.append("keep me", "a.mp4", "Demo Mode", "16:9");

        store.delete("no-such-id");
        assert_eq!(store.list().len(), 1);

        store.delete(&record.id);
        assert!(store.list().is_empty());

        store.delete(&record.id);
        assert!(store.list().is_empty());
    }

    #[test]
    fn clear_removes_records_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::open(dir.path());
        append_n(&mut store, 3);

        store.clear();

        assert!(store.list().is_empty());
        assert!(!dir.path().join(HISTORY_FILE).exists());
        // Clearing an already empty store is fine.
        store.clear();
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(HISTORY_FILE), "{ not json").unwrap();

        let store = HistoryStore::open(dir.path());
        assert!(store.list().is_empty());
    }
}
