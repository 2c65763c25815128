//! Pure snapshot mutations.
//!
//! Each function takes the current [`Snapshot`] and returns the next one.
//! Counts are unsigned and every decrement saturates, so nothing can go
//! below zero.

use jeevansetu_types::{BloodType, Snapshot};

/// ICU beds consumed by a surge.
pub const SURGE_ICU_DROP: u32 = 5;

/// O- units consumed by a surge.
pub const SURGE_O_NEGATIVE_DROP: u32 = 2;

/// O- units consumed by every simulation tick.
pub const TICK_O_NEGATIVE_DRAIN: u32 = 1;

/// Largest bed churn a single tick can draw.
pub const MAX_BED_CHURN: u32 = 1;

/// Apply one simulation tick with the given bed churn.
///
/// ICU and General each lose `churn` beds; O- loses one unit. Other
/// categories and blood types are untouched.
pub fn after_tick(snapshot: &Snapshot, churn: u32) -> Snapshot {
    let mut next = snapshot.clone();
    next.icu = next.icu.saturating_sub(churn);
    next.general = next.general.saturating_sub(churn);
    drain_blood(&mut next, BloodType::ONegative, TICK_O_NEGATIVE_DRAIN);
    next
}

/// Apply an emergency surge: ICU loses five beds, O- loses two units.
pub fn after_surge(snapshot: &Snapshot) -> Snapshot {
    let mut next = snapshot.clone();
    next.icu = next.icu.saturating_sub(SURGE_ICU_DROP);
    drain_blood(&mut next, BloodType::ONegative, SURGE_O_NEGATIVE_DROP);
    next
}

/// Remove `units` from a blood type, flooring at zero.
///
/// An untracked blood type stays untracked.
fn drain_blood(snapshot: &mut Snapshot, blood_type: BloodType, units: u32) {
    if let Some(held) = snapshot.blood.get_mut(&blood_type) {
        *held = held.saturating_sub(units);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_drains_icu_general_and_o_negative() {
        let next = after_tick(&Snapshot::initial(), 1);
        assert_eq!(next.icu, 9);
        assert_eq!(next.general, 29);
        assert_eq!(next.blood_units(BloodType::ONegative), Some(5));
        assert_eq!(next.blood_units(BloodType::APositive), Some(15));
        assert_eq!(next.blood_units(BloodType::BPositive), Some(10));
        assert_eq!(next.pediatric, 8);
        assert_eq!(next.maternity, 6);
        assert_eq!(next.isolation, 12);
    }

    #[test]
    fn zero_churn_still_drains_o_negative() {
        let next = after_tick(&Snapshot::initial(), 0);
        assert_eq!(next.icu, 10);
        assert_eq!(next.general, 30);
        assert_eq!(next.blood_units(BloodType::ONegative), Some(5));
    }

    #[test]
    fn surge_from_initial() {
        let next = after_surge(&Snapshot::initial());
        assert_eq!(next.icu, 5);
        assert_eq!(next.blood_units(BloodType::ONegative), Some(4));
        assert_eq!(next.general, 30);
    }

    #[test]
    fn surge_clamps_at_zero() {
        let mut snap = Snapshot::initial();
        snap.icu = 3;
        snap.blood.insert(BloodType::ONegative, 1);
        let next = after_surge(&snap);
        assert_eq!(next.icu, 0);
        assert_eq!(next.blood_units(BloodType::ONegative), Some(0));
    }

    #[test]
    fn untracked_o_negative_stays_untracked() {
        let mut snap = Snapshot::initial();
        snap.blood.remove(&BloodType::ONegative);
        let next = after_tick(&snap, 1);
        assert_eq!(next.blood_units(BloodType::ONegative), None);
    }

    #[test]
    fn counts_never_underflow_over_many_ticks() {
        let mut snap = Snapshot::initial();
        for _ in 0..100 {
            snap = after_tick(&snap, MAX_BED_CHURN);
        }
        assert_eq!(snap.icu, 0);
        assert_eq!(snap.general, 0);
        assert_eq!(snap.blood_units(BloodType::ONegative), Some(0));
    }
}
