//! REST client for the upstream predictions API.
//!
//! Wraps the prediction endpoints (model-scoped creation, status
//! lookup, account info) using [`reqwest`]. The caller's bearer token
//! is attached per request, mirroring the relay contract: the client
//! itself holds no credential.

use serde::Deserialize;
use serde_json::{json, Value};
use videoai_core::job::Prediction;

/// HTTP client for one upstream base URL (the API itself or a relay).
#[derive(Clone)]
pub struct ReplicateApi {
    client: reqwest::Client,
    base_url: String,
}

/// Account payload returned by `GET /account`.
#[derive(Debug, Deserialize)]
pub struct Account {
    pub username: String,
}

/// Errors from the upstream API layer.
#[derive(Debug, thiserror::Error)]
pub enum ReplicateApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream returned a non-2xx status code.
    #[error("Upstream API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body, usually JSON with a `detail` or `error` field.
        body: String,
    },
}

/// Seam over the prediction endpoints so the workflow engine can be
/// driven by a scripted implementation in tests.
#[async_trait::async_trait]
pub trait PredictionsApi: Send + Sync {
    /// Create a prediction on the model-scoped endpoint
    /// (`POST /models/{owner}/{model}/predictions`).
    async fn create_model_prediction(
        &self,
        owner: &str,
        model: &str,
        input: &Value,
        token: &str,
    ) -> Result<Prediction, ReplicateApiError>;

    /// Fetch the current state of a prediction (`GET /predictions/{id}`).
    async fn get_prediction(&self, id: &str, token: &str)
        -> Result<Prediction, ReplicateApiError>;
}

impl ReplicateApi {
    /// Create a client for an upstream base URL, e.g.
    /// `https://api.replicate.com/v1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (connection pooling across the relay and the engine).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch account info for a token (`GET /account`). Used for
    /// credential validation only.
    pub async fn get_account(&self, token: &str) -> Result<Account, ReplicateApiError> {
        let response = self
            .client
            .get(format!("{}/account", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`ReplicateApiError::Api`]
    /// carrying the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ReplicateApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ReplicateApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ReplicateApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl PredictionsApi for ReplicateApi {
    async fn create_model_prediction(
        &self,
        owner: &str,
        model: &str,
        input: &Value,
        token: &str,
    ) -> Result<Prediction, ReplicateApiError> {
        let body = json!({ "input": input });

        let response = self
            .client
            .post(format!(
                "{}/models/{owner}/{model}/predictions",
                self.base_url
            ))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn get_prediction(
        &self,
        id: &str,
        token: &str,
    ) -> Result<Prediction, ReplicateApiError> {
        let response = self
            .client
            .get(format!("{}/predictions/{id}", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;

        Self::parse_response(response).await
    }
}
