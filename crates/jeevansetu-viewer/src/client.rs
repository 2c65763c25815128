//! REST client for the dashboard server.
//!
//! Actions are fire-once: a failed request is reported to the caller and
//! never retried.

use jeevansetu_types::{ActionResponse, Snapshot};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ViewerConfig;
use crate::error::ViewerError;

/// HTTP client bound to one server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: ViewerConfig,
}

impl ApiClient {
    /// Create a client for the configured server.
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// `GET /data`.
    pub async fn fetch_snapshot(&self) -> Result<Snapshot, ViewerError> {
        self.send(self.client.get(self.config.endpoint("/data")), "/data")
            .await
    }

    /// `POST /simulate-surge`.
    pub async fn simulate_surge(&self) -> Result<ActionResponse, ViewerError> {
        self.send(
            self.client.post(self.config.endpoint("/simulate-surge")),
            "/simulate-surge",
        )
        .await
    }

    /// `POST /reset`.
    pub async fn reset(&self) -> Result<ActionResponse, ViewerError> {
        self.send(self.client.post(self.config.endpoint("/reset")), "/reset")
            .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<T, ViewerError> {
        let response = request.send().await.map_err(|e| ViewerError::Http {
            path: path.to_owned(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ViewerError::Status {
                path: path.to_owned(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| ViewerError::Http {
            path: path.to_owned(),
            message: format!("reading body: {e}"),
        })?;
        debug!(path, bytes = body.len(), "Response received");
        Ok(serde_json::from_slice(&body)?)
    }
}
