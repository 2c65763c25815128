//! Shared application state for the Observer API server.
//!
//! [`AppState`] pairs the [`Dashboard`] (the only writer of resource
//! state) with the [`Broadcaster`] that WebSocket handlers subscribe to.
//! The dashboard publishes into the same broadcaster, so every write the
//! handlers or the ticker make reaches every connected viewer.

use std::sync::Arc;

use jeevansetu_core::Dashboard;
use jeevansetu_core::config::SimulationConfig;
use jeevansetu_types::PushEvent;
use tokio::sync::broadcast;

use crate::broadcast::Broadcaster;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The dashboard that owns the resource snapshot.
    pub dashboard: Arc<Dashboard>,
    /// The push channel the dashboard publishes into.
    pub broadcaster: Broadcaster,
}

impl AppState {
    /// Create a dashboard wired to a fresh broadcaster.
    pub fn new(settings: SimulationConfig) -> Self {
        let broadcaster = Broadcaster::new();
        let dashboard = Arc::new(Dashboard::new(settings, Arc::new(broadcaster.clone())));
        Self {
            dashboard,
            broadcaster,
        }
    }

    /// Subscribe to the push channel.
    pub fn subscribe(&self) -> broadcast::Receiver<PushEvent> {
        self.broadcaster.subscribe()
    }

    /// Number of connected push subscribers.
    pub fn viewer_count(&self) -> usize {
        self.broadcaster.subscriber_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
