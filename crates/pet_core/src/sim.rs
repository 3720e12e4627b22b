//! Fixed-step decay simulation over the four bounded pet stats.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

pub const STAT_MIN: f64 = 0.0;
pub const STAT_MAX: f64 = 100.0;

/// Clamps a single stat to the playable range.
pub fn clamp_stat(value: f64) -> f64 {
    value.clamp(STAT_MIN, STAT_MAX)
}

/// The four bounded stats, each in `[0.0, 100.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PetStats {
    pub hunger: f64,
    pub happiness: f64,
    pub cleanliness: f64,
    pub health: f64,
}

impl PetStats {
    /// A freshly rested pet; every stat at maximum.
    pub fn full() -> Self {
        Self {
            hunger: STAT_MAX,
            happiness: STAT_MAX,
            cleanliness: STAT_MAX,
            health: STAT_MAX,
        }
    }

    /// Returns a copy with every stat clamped into range.
    pub fn clamped(self) -> Self {
        Self {
            hunger: clamp_stat(self.hunger),
            happiness: clamp_stat(self.happiness),
            cleanliness: clamp_stat(self.cleanliness),
            health: clamp_stat(self.health),
        }
    }
}

impl Default for PetStats {
    fn default() -> Self {
        Self::full()
    }
}

/// Per-tick decay applied to the three care stats. Health decays only
/// through the danger penalty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayRates {
    pub hunger: f64,
    pub happiness: f64,
    pub cleanliness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    pub minutes: u64,
    pub tick: NonZeroU64,
    pub decay: DecayRates,
    pub health_penalty: f64,
    pub danger_threshold: f64,
}

impl SimParams {
    /// Number of decay steps the run covers. A run shorter than one tick
    /// (including zero minutes) still advances exactly one step.
    pub fn steps(&self) -> u64 {
        (self.minutes / self.tick.get()).max(1)
    }
}

/// End state of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimReport {
    pub minutes: u64,
    pub tick: u64,
    pub steps: u64,
    pub stats: PetStats,
}

/// Runs the decay loop from `start` and reports the end state.
///
/// Each step subtracts the decay rates from hunger, happiness, and
/// cleanliness, clamping after every subtraction. If hunger or cleanliness
/// then sits at or below the danger threshold, health takes the penalty,
/// likewise clamped. The starting stats are clamped on entry.
pub fn simulate(start: PetStats, params: &SimParams) -> SimReport {
    let steps = params.steps();
    let mut stats = start.clamped();

    for _ in 0..steps {
        stats.hunger = clamp_stat(stats.hunger - params.decay.hunger);
        stats.happiness = clamp_stat(stats.happiness - params.decay.happiness);
        stats.cleanliness = clamp_stat(stats.cleanliness - params.decay.cleanliness);

        if stats.hunger <= params.danger_threshold
            || stats.cleanliness <= params.danger_threshold
        {
            stats.health = clamp_stat(stats.health - params.health_penalty);
        }
    }

    SimReport {
        minutes: params.minutes,
        tick: params.tick.get(),
        steps,
        stats,
    }
}

/// Names the stats sitting at or below the danger threshold, in the order
/// the overlay surfaces them. Reports "all stats nominal" when none are.
pub fn danger_warnings(stats: &PetStats, threshold: f64) -> Vec<&'static str> {
    let mut warnings = Vec::new();
    if stats.hunger <= threshold {
        warnings.push("hunger low");
    }
    if stats.cleanliness <= threshold {
        warnings.push("cleanliness low");
    }
    if stats.happiness <= threshold {
        warnings.push("happiness low");
    }
    if stats.health <= threshold {
        warnings.push("health low");
    }

    if warnings.is_empty() {
        warnings.push("all stats nominal");
    }

    warnings
}
