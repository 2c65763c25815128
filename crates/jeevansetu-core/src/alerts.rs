//! Alert rules and the fixed alert messages pushed to viewers.
//!
//! Two rules run on every simulation tick, trend first:
//!
//! - **Capacity trend** -- the ICU history window is full and strictly
//!   decreasing.
//! - **ICU critical** -- ICU beds are down to one or two (but not zero).
//!
//! The surge and reset actions push their own fixed messages.

use crate::history::IcuHistory;

/// ICU count at or below which the critical alert fires (when non-zero).
pub const ICU_CRITICAL_THRESHOLD: u32 = 2;

/// A kind of alert the server can push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    /// ICU availability fell on each of the last three ticks.
    CapacityTrend,
    /// ICU availability is almost exhausted.
    IcuCritical,
    /// An emergency surge was simulated.
    Surge,
    /// The system was reset to its initial snapshot.
    Reset,
}

impl AlertKind {
    /// Human-readable message pushed to viewers.
    pub const fn message(self) -> &'static str {
        match self {
            Self::CapacityTrend => "⚠ AI Prediction: ICU capacity decreasing rapidly!",
            Self::IcuCritical => "🚨 CRITICAL: ICU Almost Full!",
            Self::Surge => "🚨 Emergency Surge Detected!",
            Self::Reset => "✅ System Reset Successfully",
        }
    }
}

/// Whether the ICU count is in the critical band `1..=2`.
pub const fn is_icu_critical(icu: u32) -> bool {
    icu > 0 && icu <= ICU_CRITICAL_THRESHOLD
}

/// Evaluate the tick alert rules in firing order.
pub fn evaluate(history: &IcuHistory, icu: u32) -> Vec<AlertKind> {
    let mut fired = Vec::with_capacity(2);
    if history.is_strictly_decreasing() {
        fired.push(AlertKind::CapacityTrend);
    }
    if is_icu_critical(icu) {
        fired.push(AlertKind::IcuCritical);
    }
    fired
}
