//! The state store: single owner of the [`Snapshot`], the ICU
//! [`IcuHistory`] window and the pause flag.
//!
//! # Concurrency
//!
//! All state sits behind one async mutex. Writers take a [`StoreWriter`]
//! for the whole read-modify-publish sequence so a tick, a surge and a
//! reset can never interleave, and every reader sees writes in the order
//! they happened.

use std::sync::{Arc, Weak};
use std::time::Duration;

use jeevansetu_types::Snapshot;
use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::history::IcuHistory;
use crate::pause::PauseState;

/// Everything guarded by the store lock.
#[derive(Debug, Default)]
struct StoreState {
    snapshot: Snapshot,
    history: IcuHistory,
    pause: PauseState,
}

/// In-memory, single-process store for the dashboard state.
#[derive(Debug, Default)]
pub struct StateStore {
    inner: Arc<Mutex<StoreState>>,
}

impl StateStore {
    /// Create a store holding the initial snapshot, empty history and a
    /// cleared pause flag.
    pub fn new() -> Self {
        Self::with_snapshot(Snapshot::initial())
    }

    /// Create a store starting from an arbitrary snapshot.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreState {
                snapshot,
                history: IcuHistory::new(),
                pause: PauseState::new(),
            })),
        }
    }

    /// Acquire exclusive write access.
    pub async fn write(&self) -> StoreWriter<'_> {
        StoreWriter {
            state: self.inner.lock().await,
            inner: &self.inner,
        }
    }

    /// A copy of the current snapshot.
    pub async fn current(&self) -> Snapshot {
        self.inner.lock().await.snapshot.clone()
    }

    /// The ICU history window, oldest first.
    pub async fn history(&self) -> Vec<u32> {
        self.inner.lock().await.history.samples()
    }

    /// Whether the ticker is currently suppressed.
    pub async fn is_paused(&self) -> bool {
        self.inner.lock().await.pause.is_paused()
    }

    /// Apply a pure mutation and return the new snapshot.
    pub async fn apply<F>(&self, mutation: F) -> Snapshot
    where
        F: FnOnce(&Snapshot) -> Snapshot,
    {
        self.write().await.apply(mutation).clone()
    }

    /// Restore the initial snapshot and clear the history window.
    pub async fn reset(&self) -> Snapshot {
        self.write().await.reset().clone()
    }
}

/// Exclusive write access to the store.
///
/// Holds the store lock until dropped.
pub struct StoreWriter<'a> {
    state: MutexGuard<'a, StoreState>,
    inner: &'a Arc<Mutex<StoreState>>,
}

impl StoreWriter<'_> {
    /// The current snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.state.snapshot
    }

    /// The ICU history window.
    pub fn history(&self) -> &IcuHistory {
        &self.state.history
    }

    /// Whether the ticker is currently suppressed.
    pub fn is_paused(&self) -> bool {
        self.state.pause.is_paused()
    }

    /// Replace the snapshot with `mutation(current)` and return it.
    pub fn apply<F>(&mut self, mutation: F) -> &Snapshot
    where
        F: FnOnce(&Snapshot) -> Snapshot,
    {
        self.state.snapshot = mutation(&self.state.snapshot);
        &self.state.snapshot
    }

    /// Restore the initial snapshot and clear the history window.
    pub fn reset(&mut self) -> &Snapshot {
        self.state.snapshot = Snapshot::initial();
        self.state.history.clear();
        &self.state.snapshot
    }

    /// Push the current ICU count into the history window.
    pub fn record_icu(&mut self) -> &IcuHistory {
        let icu = self.state.snapshot.icu;
        self.state.history.push(icu);
        &self.state.history
    }

    /// Set the pause flag and schedule it to clear after `window`.
    ///
    /// A pending clear from an earlier engagement is cancelled. The clear
    /// task holds only a weak reference, so it does nothing once the
    /// store is gone.
    pub fn engage_pause(&mut self, window: Duration) {
        let epoch = self.state.pause.engage();
        let store: Weak<Mutex<StoreState>> = Arc::downgrade(self.inner);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let Some(store) = store.upgrade() else {
                return;
            };
            let cleared = store.lock().await.pause.clear_if_current(epoch);
            debug!(epoch, cleared, "Pause window elapsed");
        });

        self.state.pause.set_pending(epoch, handle);
    }
}
