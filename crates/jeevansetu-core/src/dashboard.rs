//! The owned dashboard: state store, simulation settings and publisher.
//!
//! One [`Dashboard`] is created at startup and shared by [`Arc`] with the
//! ticker task and the HTTP handlers. Nothing is global.
//!
//! [`Arc`]: std::sync::Arc

use std::sync::Arc;
use std::time::Duration;

use jeevansetu_types::{PushEvent, Snapshot};

use crate::alerts::AlertKind;
use crate::config::SimulationConfig;
use crate::publish::Publisher;
use crate::store::StateStore;

/// Shared dashboard state and its outbound publisher.
pub struct Dashboard {
    store: StateStore,
    settings: SimulationConfig,
    publisher: Arc<dyn Publisher>,
}

impl Dashboard {
    /// Create a dashboard holding the initial snapshot.
    pub fn new(settings: SimulationConfig, publisher: Arc<dyn Publisher>) -> Self {
        Self {
            store: StateStore::new(),
            settings,
            publisher,
        }
    }

    /// Create a dashboard around an existing store.
    pub fn with_store(
        store: StateStore,
        settings: SimulationConfig,
        publisher: Arc<dyn Publisher>,
    ) -> Self {
        Self {
            store,
            settings,
            publisher,
        }
    }

    /// The underlying state store.
    pub const fn store(&self) -> &StateStore {
        &self.store
    }

    /// Simulation timing settings.
    pub const fn settings(&self) -> &SimulationConfig {
        &self.settings
    }

    /// Period between simulation ticks.
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.settings.tick_interval_ms)
    }

    /// How long the ticker stays suppressed after a reset.
    pub const fn reset_pause(&self) -> Duration {
        Duration::from_millis(self.settings.reset_pause_ms)
    }

    /// A copy of the current snapshot.
    pub async fn snapshot(&self) -> Snapshot {
        self.store.current().await
    }

    /// Whether the ticker is currently suppressed.
    pub async fn is_paused(&self) -> bool {
        self.store.is_paused().await
    }

    /// Push the full snapshot to every subscriber.
    pub(crate) fn publish_snapshot(&self, snapshot: &Snapshot) {
        self.publisher
            .publish(PushEvent::UpdateData(snapshot.clone()));
    }

    /// Push an alert message to every subscriber.
    pub(crate) fn publish_alert(&self, alert: AlertKind) {
        self.publisher
            .publish(PushEvent::Alert(alert.message().to_owned()));
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("store", &self.store)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
