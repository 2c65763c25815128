//! Rolling window of recent ICU counts.
//!
//! The window only exists to spot a short downward trend, so it holds
//! the last [`HISTORY_CAPACITY`] samples and nothing more.

use std::collections::VecDeque;

/// Number of ICU samples retained.
pub const HISTORY_CAPACITY: usize = 3;

/// The most recent ICU counts, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IcuHistory {
    samples: VecDeque<u32>,
}

impl IcuHistory {
    /// Create an empty window.
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Append a sample, evicting the oldest once the window is full.
    pub fn push(&mut self, icu: u32) {
        self.samples.push_back(icu);
        while self.samples.len() > HISTORY_CAPACITY {
            self.samples.pop_front();
        }
    }

    /// Drop every sample.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of samples held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the window holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether the window is full and every sample is strictly lower
    /// than the one before it.
    pub fn is_strictly_decreasing(&self) -> bool {
        self.samples.len() == HISTORY_CAPACITY
            && self
                .samples
                .iter()
                .zip(self.samples.iter().skip(1))
                .all(|(older, newer)| older > newer)
    }

    /// Samples, oldest first.
    pub fn samples(&self) -> Vec<u32> {
        self.samples.iter().copied().collect()
    }
}

impl FromIterator<u32> for IcuHistory {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut history = Self::new();
        for sample in iter {
            history.push(sample);
        }
        history
    }
}
