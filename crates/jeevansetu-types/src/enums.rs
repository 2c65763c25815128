//! Enumeration types for the resource dashboard.
//!
//! Bed categories and blood types carry the exact labels used on the
//! wire (`"ICU"`, `"O-"`, ...) so the JSON shape matches what existing
//! dashboards expect.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A label that did not match any known bed category or blood type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource label: {0}")]
pub struct UnknownLabel(pub String);

// ---------------------------------------------------------------------------
// Bed categories
// ---------------------------------------------------------------------------

/// One of the five tracked bed categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum BedCategory {
    /// Intensive care unit beds.
    #[serde(rename = "ICU")]
    Icu,
    /// General ward beds.
    General,
    /// Pediatric ward beds.
    Pediatric,
    /// Maternity ward beds.
    Maternity,
    /// Isolation ward beds.
    Isolation,
}

impl BedCategory {
    /// All categories in dashboard display order.
    pub const ALL: [Self; 5] = [
        Self::Icu,
        Self::General,
        Self::Pediatric,
        Self::Maternity,
        Self::Isolation,
    ];

    /// Wire label for this category.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Icu => "ICU",
            Self::General => "General",
            Self::Pediatric => "Pediatric",
            Self::Maternity => "Maternity",
            Self::Isolation => "Isolation",
        }
    }
}

impl fmt::Display for BedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BedCategory {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLabel(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Blood types
// ---------------------------------------------------------------------------

/// ABO/Rh blood type used as the key of the blood bank map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum BloodType {
    /// A positive.
    #[serde(rename = "A+")]
    APositive,
    /// A negative.
    #[serde(rename = "A-")]
    ANegative,
    /// B positive.
    #[serde(rename = "B+")]
    BPositive,
    /// B negative.
    #[serde(rename = "B-")]
    BNegative,
    /// AB positive.
    #[serde(rename = "AB+")]
    AbPositive,
    /// AB negative.
    #[serde(rename = "AB-")]
    AbNegative,
    /// O positive.
    #[serde(rename = "O+")]
    OPositive,
    /// O negative, the universal donor type drained by the simulation.
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodType {
    /// Every blood type.
    pub const ALL: [Self; 8] = [
        Self::APositive,
        Self::ANegative,
        Self::BPositive,
        Self::BNegative,
        Self::AbPositive,
        Self::AbNegative,
        Self::OPositive,
        Self::ONegative,
    ];

    /// Wire label for this blood type.
    pub const fn label(self) -> &'static str {
        match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BloodType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLabel(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Resource (either kind)
// ---------------------------------------------------------------------------

/// Any single count shown on the dashboard: a bed category or a blood type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A bed category count.
    Bed(BedCategory),
    /// A blood bank unit count.
    Blood(BloodType),
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bed(c) => c.fmt(f),
            Self::Blood(t) => t.fmt(f),
        }
    }
}

impl FromStr for ResourceKind {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<BedCategory>()
            .map(Self::Bed)
            .or_else(|_| s.parse::<BloodType>().map(Self::Blood))
    }
}
