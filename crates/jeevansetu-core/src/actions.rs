//! The two operator actions that mutate state outside the ticker.
//!
//! | Action | Effect | Alert |
//! |--------|--------|-------|
//! | surge | ICU -5, O- -2 (floor 0) | surge detected |
//! | reset | initial snapshot, empty history, ticker paused | reset successful |

use jeevansetu_types::Snapshot;
use tracing::info;

use crate::alerts::AlertKind;
use crate::dashboard::Dashboard;
use crate::resources;

/// Simulate an emergency surge.
///
/// Publishes the updated snapshot, then the surge alert. Repeated calls
/// keep flooring at zero.
pub async fn simulate_surge(dashboard: &Dashboard) -> Snapshot {
    let mut writer = dashboard.store().write().await;
    let snapshot = writer.apply(resources::after_surge).clone();

    dashboard.publish_snapshot(&snapshot);
    dashboard.publish_alert(AlertKind::Surge);
    drop(writer);

    info!(icu = snapshot.icu, "Emergency surge simulated");
    snapshot
}

/// Reset the system to the initial snapshot.
///
/// Pauses the ticker first, restores the snapshot, clears the history,
/// publishes the snapshot and the reset alert, and leaves the pause flag
/// set until the configured window elapses. A reset during an active
/// window restarts the window.
pub async fn reset_system(dashboard: &Dashboard) -> Snapshot {
    let mut writer = dashboard.store().write().await;
    writer.engage_pause(dashboard.reset_pause());
    let snapshot = writer.reset().clone();

    dashboard.publish_snapshot(&snapshot);
    dashboard.publish_alert(AlertKind::Reset);
    drop(writer);

    info!(
        pause_ms = dashboard.settings().reset_pause_ms,
        "System reset, ticker paused"
    );
    snapshot
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use jeevansetu_types::{BloodType, PushEvent};

    use super::*;
    use crate::config::SimulationConfig;
    use crate::publish::MemoryPublisher;

    fn make_dashboard() -> (Dashboard, Arc<MemoryPublisher>) {
        let publisher = Arc::new(MemoryPublisher::new());
        let dashboard = Dashboard::new(SimulationConfig::default(), publisher.clone());
        (dashboard, publisher)
    }

    #[tokio::test]
    async fn surge_publishes_snapshot_then_alert() {
        let (dashboard, publisher) = make_dashboard();
        let snap = simulate_surge(&dashboard).await;

        assert_eq!(snap.icu, 5);
        assert_eq!(snap.blood_units(BloodType::ONegative), Some(4));

        let events = publisher.take();
        assert_eq!(
            events,
            vec![
                PushEvent::UpdateData(snap),
                PushEvent::Alert(String::from("🚨 Emergency Surge Detected!")),
            ]
        );
    }

    #[tokio::test]
    async fn repeated_surges_floor_at_zero() {
        let (dashboard, _publisher) = make_dashboard();
        for _ in 0..4 {
            simulate_surge(&dashboard).await;
        }
        let snap = dashboard.snapshot().await;
        assert_eq!(snap.icu, 0);
        assert_eq!(snap.blood_units(BloodType::ONegative), Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn reset_restores_initial_and_pauses() {
        let (dashboard, publisher) = make_dashboard();
        simulate_surge(&dashboard).await;
        let _ = publisher.take();

        let snap = reset_system(&dashboard).await;
        assert_eq!(snap, Snapshot::initial());
        assert!(dashboard.store().history().await.is_empty());
        assert!(dashboard.is_paused().await);

        assert_eq!(
            publisher.take(),
            vec![
                PushEvent::UpdateData(Snapshot::initial()),
                PushEvent::Alert(String::from("✅ System Reset Successfully")),
            ]
        );

        tokio::time::sleep(Duration::from_millis(5_001)).await;
        assert!(!dashboard.is_paused().await);
    }
}
