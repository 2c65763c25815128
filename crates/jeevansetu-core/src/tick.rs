//! A single simulation tick.
//!
//! Each non-paused tick runs, under the store lock:
//!
//! 1. **Churn** -- ICU and General lose the drawn bed churn, O- loses one
//!    unit.
//! 2. **History** -- the new ICU count enters the history window.
//! 3. **Alerts** -- trend rule, then critical rule; each that fires is
//!    published.
//! 4. **Broadcast** -- the updated snapshot is published.
//!
//! A paused tick does nothing at all.

use jeevansetu_types::Snapshot;
use rand::Rng;
use tracing::{debug, warn};

use crate::alerts::{self, AlertKind};
use crate::dashboard::Dashboard;
use crate::resources::{self, MAX_BED_CHURN};

/// What a tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The pause flag was set; nothing changed and nothing was published.
    Paused,
    /// The tick ran.
    Applied(TickReport),
}

/// Details of a tick that ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Bed churn applied to ICU and General.
    pub churn: u32,
    /// The snapshot after the tick.
    pub snapshot: Snapshot,
    /// ICU history window after the tick, oldest first.
    pub history: Vec<u32>,
    /// Alerts that fired, in publish order.
    pub alerts: Vec<AlertKind>,
}

/// Draw the bed churn for one tick, uniformly from `0..=1`.
pub fn draw_churn<R: Rng>(rng: &mut R) -> u32 {
    rng.random_range(0..=MAX_BED_CHURN)
}

/// Run one tick with the given bed churn.
pub async fn run_tick(dashboard: &Dashboard, churn: u32) -> TickOutcome {
    let mut writer = dashboard.store().write().await;
    if writer.is_paused() {
        debug!("Tick skipped, ticker paused");
        return TickOutcome::Paused;
    }

    let snapshot = writer.apply(|s| resources::after_tick(s, churn)).clone();
    let history = writer.record_icu();
    let fired = alerts::evaluate(history, snapshot.icu);
    let samples = history.samples();

    for alert in &fired {
        warn!(alert = ?alert, icu = snapshot.icu, "Alert raised");
        dashboard.publish_alert(*alert);
    }
    dashboard.publish_snapshot(&snapshot);
    drop(writer);

    debug!(
        churn,
        icu = snapshot.icu,
        general = snapshot.general,
        history = ?samples,
        "Tick applied"
    );

    TickOutcome::Applied(TickReport {
        churn,
        snapshot,
        history: samples,
        alerts: fired,
    })
}
