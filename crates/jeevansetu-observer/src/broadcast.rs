//! Fan-out of [`PushEvent`]s to every connected viewer.
//!
//! A thin wrapper over [`tokio::sync::broadcast`]: no acknowledgment, no
//! replay, no per-client state. A subscriber that falls more than
//! [`BROADCAST_CAPACITY`] messages behind skips to the newest.

use jeevansetu_core::Publisher;
use jeevansetu_types::PushEvent;
use tokio::sync::broadcast;
use tracing::trace;

/// Capacity of the broadcast channel.
pub const BROADCAST_CAPACITY: usize = 256;

/// Cloneable handle to the push channel.
#[derive(Debug, Clone)]
pub struct Broadcaster {
    tx: broadcast::Sender<PushEvent>,
}

impl Broadcaster {
    /// Create a channel with no subscribers.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self { tx }
    }

    /// Subscribe to every event sent from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<PushEvent> {
        self.tx.subscribe()
    }

    /// Send an event to all current subscribers.
    ///
    /// Returns the number of subscribers that received it; 0 when nobody
    /// is connected, which is not an error.
    pub fn send(&self, event: PushEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    /// Number of connected subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Publisher for Broadcaster {
    fn publish(&self, event: PushEvent) {
        let name = event.name();
        let receivers = self.send(event);
        trace!(event = name, receivers, "Push event sent");
    }
}
