//! JSON-file-backed persistence for history and settings.
//!
//! Both stores are best-effort durable: a failed write is logged and
//! swallowed, and the in-memory view stays authoritative for the rest
//! of the session.

pub mod history;
pub mod settings;

pub use history::{HistoryStore, MAX_HISTORY_ITEMS};
pub use settings::{SettingsStore, SettingsUpdate};
