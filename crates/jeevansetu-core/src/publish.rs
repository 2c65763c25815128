//! Seam between state changes and the push channel.
//!
//! The core never talks to sockets. Every write is followed by calls to a
//! [`Publisher`], which the observer implements on top of its broadcast
//! channel.

use std::sync::{Mutex, PoisonError};

use jeevansetu_types::PushEvent;

/// Receives every event the dashboard pushes.
///
/// Implementations must not block: `publish` is called while the state
/// store lock is held so that delivery order matches write order.
pub trait Publisher: Send + Sync {
    /// Fan an event out to all current subscribers. Best effort.
    fn publish(&self, event: PushEvent);
}

/// A publisher that keeps every event in memory, for tests and tooling.
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    events: Mutex<Vec<PushEvent>>,
}

impl MemoryPublisher {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything published so far.
    pub fn take(&self) -> Vec<PushEvent> {
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *events)
    }
}

impl Publisher for MemoryPublisher {
    fn publish(&self, event: PushEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
