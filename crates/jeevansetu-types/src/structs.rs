//! Core record types: the resource [`Snapshot`] and the REST response
//! bodies served by the observer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{BedCategory, BloodType, ResourceKind};

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Complete current set of hospital resource counts.
///
/// Counts are unsigned; every mutation uses saturating arithmetic so a
/// count can never drop below zero. There is no upper bound other than
/// what [`Snapshot::initial`] establishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Snapshot {
    /// Intensive care unit beds available.
    #[serde(rename = "ICU")]
    pub icu: u32,
    /// General ward beds available.
    #[serde(rename = "General")]
    pub general: u32,
    /// Pediatric ward beds available.
    #[serde(rename = "Pediatric")]
    pub pediatric: u32,
    /// Maternity ward beds available.
    #[serde(rename = "Maternity")]
    pub maternity: u32,
    /// Isolation ward beds available.
    #[serde(rename = "Isolation")]
    pub isolation: u32,
    /// Blood bank units keyed by blood type.
    pub blood: BTreeMap<BloodType, u32>,
}

impl Snapshot {
    /// The fixed starting snapshot, also restored by a system reset.
    pub fn initial() -> Self {
        Self {
            icu: 10,
            general: 30,
            pediatric: 8,
            maternity: 6,
            isolation: 12,
            blood: BTreeMap::from([
                (BloodType::APositive, 15),
                (BloodType::ONegative, 6),
                (BloodType::BPositive, 10),
            ]),
        }
    }

    /// Beds available in the given category.
    pub const fn beds(&self, category: BedCategory) -> u32 {
        match category {
            BedCategory::Icu => self.icu,
            BedCategory::General => self.general,
            BedCategory::Pediatric => self.pediatric,
            BedCategory::Maternity => self.maternity,
            BedCategory::Isolation => self.isolation,
        }
    }

    /// Units held for a blood type, or `None` if the bank does not track it.
    pub fn blood_units(&self, blood_type: BloodType) -> Option<u32> {
        self.blood.get(&blood_type).copied()
    }

    /// Count for any resource kind. Untracked blood types read as `None`.
    pub fn value_of(&self, kind: ResourceKind) -> Option<u32> {
        match kind {
            ResourceKind::Bed(c) => Some(self.beds(c)),
            ResourceKind::Blood(t) => self.blood_units(t),
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}

// ---------------------------------------------------------------------------
// REST bodies
// ---------------------------------------------------------------------------

/// Acknowledgment returned by the mutating action endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ActionResponse {
    /// Human-readable confirmation.
    pub message: String,
}

impl ActionResponse {
    /// Build a response with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Server status returned by `GET /status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ServerStatus {
    /// Whether the simulation ticker is currently suppressed.
    pub paused: bool,
    /// Simulation tick period in milliseconds.
    #[ts(type = "number")]
    pub tick_interval_ms: u64,
    /// Pause window applied after each reset, in milliseconds.
    #[ts(type = "number")]
    pub reset_pause_ms: u64,
    /// Number of connected push subscribers.
    #[ts(type = "number")]
    pub viewers: usize,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn initial_snapshot_serializes_with_wire_labels() {
        let json = serde_json::to_value(Snapshot::initial()).unwrap_or_default();
        assert_eq!(json["ICU"], 10);
        assert_eq!(json["General"], 30);
        assert_eq!(json["Pediatric"], 8);
        assert_eq!(json["Maternity"], 6);
        assert_eq!(json["Isolation"], 12);
        assert_eq!(json["blood"]["A+"], 15);
        assert_eq!(json["blood"]["O-"], 6);
        assert_eq!(json["blood"]["B+"], 10);
    }

    #[test]
    fn snapshot_deserializes_from_dashboard_json() {
        let raw = r#"{"ICU":2,"General":1,"Pediatric":0,"Maternity":3,"Isolation":4,"blood":{"O-":0,"AB+":7}}"#;
        let snap: Snapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snap.icu, 2);
        assert_eq!(snap.blood_units(BloodType::ONegative), Some(0));
        assert_eq!(snap.blood_units(BloodType::AbPositive), Some(7));
        assert_eq!(snap.blood_units(BloodType::APositive), None);
    }

    #[test]
    fn value_of_reads_beds_and_blood() {
        let snap = Snapshot::initial();
        assert_eq!(snap.value_of(ResourceKind::Bed(BedCategory::Isolation)), Some(12));
        assert_eq!(snap.value_of(ResourceKind::Blood(BloodType::BPositive)), Some(10));
        assert_eq!(snap.value_of(ResourceKind::Blood(BloodType::ANegative)), None);
    }
}
