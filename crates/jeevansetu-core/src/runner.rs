//! The recurring simulation ticker.
//!
//! [`run_ticker`] drives [`run_tick`] on a fixed period for as long as
//! the task lives. The first tick fires one full period after start.
//! Ticks never overlap: a tick that runs long delays the next one rather
//! than bunching up.
//!
//! The ticker ignores resets beyond what the pause flag tells it; the
//! reset pause window is its own one-shot timer held by the state store.
//!
//! [`run_tick`]: crate::tick::run_tick

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use crate::dashboard::Dashboard;
use crate::tick::{self, TickOutcome};

/// Build the churn generator from the configured seed, or from OS entropy.
pub fn churn_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Run the ticker forever.
///
/// Intended to be spawned on its own task; abort the task to stop it.
pub async fn run_ticker(dashboard: Arc<Dashboard>, mut rng: StdRng) {
    let period = dashboard.tick_interval();
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; the first update is one period out.
    ticker.tick().await;

    info!(
        tick_interval_ms = dashboard.settings().tick_interval_ms,
        "Simulation ticker started"
    );

    loop {
        ticker.tick().await;
        let churn = tick::draw_churn(&mut rng);
        if let TickOutcome::Applied(report) = tick::run_tick(&dashboard, churn).await {
            info!(
                icu = report.snapshot.icu,
                general = report.snapshot.general,
                alerts = report.alerts.len(),
                "Sensor update broadcast"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use jeevansetu_types::{PushEvent, Snapshot};

    use super::*;
    use crate::actions;
    use crate::config::SimulationConfig;
    use crate::publish::MemoryPublisher;

    fn updates(events: &[PushEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, PushEvent::UpdateData(_)))
            .count()
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_one_period() {
        let publisher = Arc::new(MemoryPublisher::new());
        let dashboard = Arc::new(Dashboard::new(
            SimulationConfig::default(),
            publisher.clone(),
        ));
        let handle = tokio::spawn(run_ticker(Arc::clone(&dashboard), churn_rng(Some(1))));

        tokio::time::sleep(Duration::from_millis(9_900)).await;
        assert_eq!(updates(&publisher.take()), 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(updates(&publisher.take()), 1);

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(updates(&publisher.take()), 2);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_inside_reset_window_are_suppressed() {
        let publisher = Arc::new(MemoryPublisher::new());
        let dashboard = Arc::new(Dashboard::new(
            SimulationConfig::default(),
            publisher.clone(),
        ));
        let handle = tokio::spawn(run_ticker(Arc::clone(&dashboard), churn_rng(Some(3))));

        // Reset at t=8s; the pause holds until t=13s, covering the t=10s tick.
        tokio::time::sleep(Duration::from_secs(8)).await;
        actions::reset_system(&dashboard).await;
        let _ = publisher.take();

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert!(publisher.take().is_empty());
        assert_eq!(dashboard.snapshot().await, Snapshot::initial());

        // The t=20s tick runs again.
        tokio::time::sleep(Duration::from_secs(9)).await;
        assert_eq!(updates(&publisher.take()), 1);

        handle.abort();
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = churn_rng(Some(99));
        let mut b = churn_rng(Some(99));
        let draws_a: Vec<u32> = (0..16).map(|_| tick::draw_churn(&mut a)).collect();
        let draws_b: Vec<u32> = (0..16).map(|_| tick::draw_churn(&mut b)).collect();
        assert_eq!(draws_a, draws_b);
    }
}
