//! Plain-text rendering of the viewer state.

use std::time::Instant;

use jeevansetu_types::BedCategory;

use crate::intel::ResourceIntel;
use crate::state::ViewerState;

/// Width of the occupancy bar in cells.
const BAR_WIDTH: u32 = 20;

/// Emergency contacts panel.
pub const CONTACTS: [&str; 4] = [
    "Ambulance: 108",
    "District Control Room: +91 9876543210",
    "Email: control@jeevansetu.gov.in",
    "Cyber Incident Helpline: 1800-SECURE",
];

/// Cybersecurity monitoring panel.
pub const CYBER_STATUS: [&str; 3] = [
    "Secure API Channel: Active",
    "Node Authentication: Verified",
    "Anomaly Detection Engine: Running",
];

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  role admin|public    switch role
  surge                simulate an emergency surge (Admin)
  reset                reset the system (Admin)
  attack               simulate a cyber attack (Admin)
  detail <resource>    intelligence view, e.g. detail ICU, detail O-
  district <name>      Jaipur, Delhi, Pune or Ahmedabad
  help                 this list
  quit                 exit";

/// Render the full dashboard.
pub fn dashboard(state: &ViewerState, now: Instant) -> String {
    let mut lines = vec![
        String::from("==== JeevanSetu ===="),
        String::from("Smart City Emergency Intelligence Platform"),
        format!("District: {} | Role: {}", state.district(), state.role()),
        String::new(),
    ];

    if let Some(alert) = state.active_alert(now) {
        lines.push(format!(">>> {alert} <<<"));
        lines.push(String::new());
    }

    lines.push(String::from("🔐 Cybersecurity Monitoring"));
    lines.extend(CYBER_STATUS.iter().map(|s| format!("  {s}")));
    lines.push(String::new());

    match state.snapshot() {
        Some(snapshot) => {
            lines.push(String::from("🏥 Bed Availability"));
            for category in BedCategory::ALL {
                let label = format!("{category} Beds");
                lines.push(format!("  {label:<16}{:>4}", snapshot.beds(category)));
            }
            lines.push(String::new());
            lines.push(String::from("🩸 Blood Bank Status"));
            for (blood_type, units) in &snapshot.blood {
                let label = format!("{blood_type} Units");
                lines.push(format!("  {label:<16}{units:>4}"));
            }
        }
        None => lines.push(String::from("Waiting for data...")),
    }
    lines.push(String::new());

    if state.role().is_admin() {
        lines.push(String::from("Admin controls: surge | reset | attack"));
        lines.push(String::new());
    }

    lines.push(String::from("📞 Emergency Contacts"));
    lines.extend(CONTACTS.iter().map(|s| format!("  {s}")));
    lines.push(String::new());

    lines.push(String::from("📜 System Activity Log"));
    for entry in state.log().entries() {
        lines.push(format!(
            "  [{}] {}",
            entry.time.format("%H:%M:%S"),
            entry.message
        ));
    }
    lines.push(String::new());

    let updated = state
        .last_updated()
        .map_or_else(|| String::from("--"), |t| t.format("%H:%M:%S").to_string());
    lines.push(format!(
        "District: {} | Last Updated: {updated}",
        state.district()
    ));

    lines.join("\n")
}

/// Render the intelligence view for one resource.
pub fn intel(view: &ResourceIntel) -> String {
    [
        format!("{} Resource Intelligence", view.label),
        format!("  Availability: {}", view.availability),
        format!("  Depletion Forecast: {} mins", view.depletion_minutes),
        format!(
            "  Redistribution: {}",
            if view.redistribution_required {
                "Required"
            } else {
                "Not Required"
            }
        ),
        format!("  Ambulance Routing: {}", view.routing),
        format!("  Escalation: {}", view.escalation),
        format!(
            "  Occupancy: [{}] {}% ({})",
            bar(view.occupancy_percent),
            view.occupancy_percent,
            view.band
        ),
    ]
    .join("\n")
}

fn bar(percent: u32) -> String {
    let filled = percent
        .min(100)
        .saturating_mul(BAR_WIDTH)
        .checked_div(100)
        .unwrap_or(0);
    let empty = BAR_WIDTH.saturating_sub(filled);
    let cells = |n: u32| usize::try_from(n).unwrap_or(0);
    format!("{}{}", "#".repeat(cells(filled)), "-".repeat(cells(empty)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use jeevansetu_types::{PushEvent, Snapshot};

    use super::*;
    use crate::config::ViewerConfig;
    use crate::intel;
    use crate::role::Role;

    #[test]
    fn waiting_screen_before_first_snapshot() {
        let state = ViewerState::new(&ViewerConfig::default());
        let text = dashboard(&state, Instant::now());
        assert!(text.contains("Waiting for data..."));
        assert!(text.contains("District: Jaipur | Last Updated: --"));
        assert!(!text.contains("Admin controls"));
    }

    #[test]
    fn shows_counts_alert_and_log() {
        let mut state = ViewerState::new(&ViewerConfig::default());
        let now = Instant::now();
        state.initial_sync(Snapshot::initial());
        state.apply_event(PushEvent::Alert(String::from("🚨 Emergency Surge Detected!")), now);

        let text = dashboard(&state, now);
        assert!(text.contains("ICU Beds"));
        assert!(text.contains("O- Units"));
        assert!(text.contains(">>> 🚨 Emergency Surge Detected! <<<"));
        assert!(text.contains("AI Alert: 🚨 Emergency Surge Detected!"));
        assert!(text.contains("Initial data sync completed."));
        assert!(text.contains("Ambulance: 108"));
    }

    #[test]
    fn admin_sees_controls() {
        let mut state = ViewerState::new(&ViewerConfig::default());
        state.set_role(Role::Admin);
        assert!(dashboard(&state, Instant::now()).contains("Admin controls"));
    }

    #[test]
    fn intel_view_lists_every_indicator() {
        let text = intel(&intel::assess("O-", 1));
        assert!(text.starts_with("O- Resource Intelligence"));
        assert!(text.contains("Depletion Forecast: 8 mins"));
        assert!(text.contains("Redistribution: Required"));
        assert!(text.contains("Ambulance Routing: Redirect Recommended"));
        assert!(text.contains("Escalation: District Authority Alert"));
        assert!(text.contains("[##################--] 90% (red)"));
    }
}
