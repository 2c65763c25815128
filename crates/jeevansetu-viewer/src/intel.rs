//! Resource intelligence view.
//!
//! Derived indicators for a single resource count, measured against a
//! nominal capacity of [`REFERENCE_CAPACITY`]. Purely presentational;
//! nothing here feeds back into the server.

use std::fmt;

/// Nominal capacity the occupancy bar is drawn against.
pub const REFERENCE_CAPACITY: u32 = 10;

/// Minutes of supply assumed per available unit.
pub const MINUTES_PER_UNIT: u32 = 8;

/// At or below this count, redistribution and rerouting are advised.
pub const LOW_STOCK: u32 = 2;

/// At or below this count, the district authority is alerted.
pub const ESCALATION_STOCK: u32 = 1;

/// Colour band of the occupancy bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// Occupancy under 40%.
    Green,
    /// Occupancy under 70%.
    Amber,
    /// Occupancy 70% and above.
    Red,
}

impl Band {
    /// Band for an occupancy percentage.
    pub const fn for_percent(percent: u32) -> Self {
        if percent < 40 {
            Self::Green
        } else if percent < 70 {
            Self::Amber
        } else {
            Self::Red
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Red => "red",
        })
    }
}

/// Indicators for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceIntel {
    /// Resource label, e.g. `ICU` or `O-`.
    pub label: String,
    /// Units currently available.
    pub availability: u32,
    /// Forecast minutes until depletion.
    pub depletion_minutes: u32,
    /// Whether stock should be moved in from elsewhere.
    pub redistribution_required: bool,
    /// Ambulance routing advice.
    pub routing: &'static str,
    /// Escalation status.
    pub escalation: &'static str,
    /// Occupancy against the reference capacity, 0 to 100.
    pub occupancy_percent: u32,
    /// Colour band for the occupancy.
    pub band: Band,
}

/// Compute the intelligence view for a resource count.
pub fn assess(label: impl Into<String>, value: u32) -> ResourceIntel {
    let low = value <= LOW_STOCK;
    let occupancy_percent = occupancy(value);
    ResourceIntel {
        label: label.into(),
        availability: value,
        depletion_minutes: value.saturating_mul(MINUTES_PER_UNIT),
        redistribution_required: low,
        routing: if low {
            "Redirect Recommended"
        } else {
            "Normal Routing"
        },
        escalation: if value <= ESCALATION_STOCK {
            "District Authority Alert"
        } else {
            "Monitoring"
        },
        occupancy_percent,
        band: Band::for_percent(occupancy_percent),
    }
}

/// `max(0, (1 - value / capacity) * 100)`, in whole percent.
fn occupancy(value: u32) -> u32 {
    REFERENCE_CAPACITY
        .saturating_sub(value)
        .saturating_mul(100)
        .checked_div(REFERENCE_CAPACITY)
        .unwrap_or(0)
}
