//! Pause flag that suppresses the simulation ticker after a reset.
//!
//! Each engagement bumps an epoch and owns the handle of the one-shot
//! task that will clear the flag. Engaging again aborts the pending clear
//! and replaces it, so the pause window always runs from the latest
//! engagement. A clear task only takes effect if its epoch is still
//! current, which covers the case where it was already running when it
//! got replaced.
//!
//! The state lives inside the state store's lock; see
//! [`StoreWriter::engage_pause`](crate::store::StoreWriter::engage_pause).

use tokio::task::JoinHandle;

/// Pause flag plus the pending deferred clear.
#[derive(Debug, Default)]
pub struct PauseState {
    paused: bool,
    epoch: u64,
    pending: Option<JoinHandle<()>>,
}

impl PauseState {
    /// A cleared flag with no pending task.
    pub const fn new() -> Self {
        Self {
            paused: false,
            epoch: 0,
            pending: None,
        }
    }

    /// Whether the ticker is currently suppressed.
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Set the flag and return the new epoch. Aborts any pending clear.
    pub fn engage(&mut self) -> u64 {
        self.paused = true;
        self.epoch = self.epoch.wrapping_add(1);
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }
        self.epoch
    }

    /// Record the task that will clear the flag for `epoch`.
    pub fn set_pending(&mut self, epoch: u64, handle: JoinHandle<()>) {
        if epoch == self.epoch {
            self.pending = Some(handle);
        } else {
            handle.abort();
        }
    }

    /// Clear the flag if `epoch` is still the latest engagement.
    ///
    /// Returns whether the flag was cleared.
    pub fn clear_if_current(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.paused = false;
        self.pending = None;
        true
    }
}

impl Drop for PauseState {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unpaused() {
        let state = PauseState::new();
        assert!(!state.is_paused());
    }

    #[test]
    fn engage_then_clear() {
        let mut state = PauseState::new();
        let epoch = state.engage();
        assert!(state.is_paused());
        assert!(state.clear_if_current(epoch));
        assert!(!state.is_paused());
    }

    #[test]
    fn stale_clear_is_ignored() {
        let mut state = PauseState::new();
        let first = state.engage();
        let second = state.engage();
        assert_ne!(first, second);
        assert!(!state.clear_if_current(first));
        assert!(state.is_paused());
        assert!(state.clear_if_current(second));
        assert!(!state.is_paused());
    }
}
