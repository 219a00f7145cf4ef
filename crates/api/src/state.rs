use std::sync::Arc;

use tokio::sync::Mutex;
use videoai_replicate::api::ReplicateApi;
use videoai_store::{HistoryStore, SettingsStore};

use crate::config::ServerConfig;
use crate::tracker::GenerationTracker;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Shared HTTP client used by the relay forwarders.
    pub http: reqwest::Client,
    /// Typed upstream client driving the workflow engine.
    pub replicate: ReplicateApi,
    /// Bounded record of past generations.
    pub history: Arc<Mutex<HistoryStore>>,
    /// The single mutable settings record.
    pub settings: Arc<Mutex<SettingsStore>>,
    /// Snapshot of the advisory single in-flight generation.
    pub tracker: Arc<GenerationTracker>,
}

impl AppState {
    /// Build the full state from configuration, opening the stores
    /// under the configured data directory.
    pub fn new(config: ServerConfig) -> Self {
        let http = reqwest::Client::new();
        let replicate = ReplicateApi::with_client(http.clone(), config.upstream_api_url.clone());
        let history = Arc::new(Mutex::new(HistoryStore::open(&config.data_dir)));
        let settings = Arc::new(Mutex::new(SettingsStore::open(&config.data_dir)));

        Self {
            config: Arc::new(config),
            http,
            replicate,
            history,
            settings,
            tracker: Arc::new(GenerationTracker::default()),
        }
    }
}
