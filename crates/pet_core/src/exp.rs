//! Activity-to-EXP conversion policy.

/// EXP granted per active minute.
pub const EXP_PER_ACTIVE_MINUTE: u64 = 2;

/// Input events needed for one EXP point.
pub const INPUT_EVENTS_PER_EXP: u64 = 20;

/// Estimates the EXP one activity sample would grant.
///
/// Active minutes are worth [`EXP_PER_ACTIVE_MINUTE`] each and input events
/// one point per [`INPUT_EVENTS_PER_EXP`], rounded down on the combined sum.
/// The estimate is capped at `daily_cap` and is never negative.
pub fn estimate_exp(active_minutes: u64, input_events: u64, daily_cap: u64) -> u64 {
    // The minutes term is integral, so truncating the events division floors
    // the combined sum in one shot.
    let raw = active_minutes * EXP_PER_ACTIVE_MINUTE + input_events / INPUT_EVENTS_PER_EXP;
    raw.min(daily_cap)
}
