//! Stay rules: what one visit to a location does to the traveler.
//!
//! A stay lasts one notional time unit, split evenly:
//!
//! 1. **Eat** (first half, only while `energy_pct < 50`): up to
//!    `0.5 / time_cost_per_unit_mass` mass is eaten from the reserve, each
//!    unit worth `gain_per_mass[health]` energy, capped at 100 %.
//! 2. **Research** (second half, always): costs
//!    `(0.5 / time_cost_per_unit_mass) × energy_cost_per_time_unit` energy.
//! 3. **Life effect**: `life_budget += life_delta`.
//!
//! The caller checks [`Resources::is_dead`] on the result before moving on.

use vg_core::{HealthTier, ResearchParams, Resources};
use vg_core::resources::MAX_ENERGY_PCT;

/// Eating only happens below this energy level.
pub const EAT_THRESHOLD_PCT: f64 = 50.0;

/// Share of the stay available to each phase.
pub const PHASE_SHARE: f64 = 0.5;

/// Result of one stay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StayOutcome {
    /// Resources after eating, researching and the life effect.  Not clamped
    /// below: a stay that kills the traveler reports the raw values.
    pub after: Resources,
    /// Reserve mass consumed.
    pub eaten: f64,
    /// Energy spent on research.
    pub research_cost: f64,
}

impl StayOutcome {
    #[inline]
    pub fn died(&self) -> bool {
        self.after.is_dead()
    }
}

/// Apply one stay at a location with coefficients `research`.
pub fn stay(resources: Resources, health: HealthTier, research: &ResearchParams) -> StayOutcome {
    let time_cost = research.guarded_time_cost();
    let mut r = resources;

    let mut eaten = 0.0;
    if r.energy_pct < EAT_THRESHOLD_PCT {
        let max_mass = PHASE_SHARE / time_cost;
        eaten = r.reserve_mass.max(0.0).min(max_mass);
        r.energy_pct = (r.energy_pct + eaten * health.gain_per_mass()).min(MAX_ENERGY_PCT);
        r.reserve_mass -= eaten;
    }

    let research_cost = PHASE_SHARE / time_cost * research.energy_cost_per_time_unit;
    r.energy_pct -= research_cost;

    r.life_budget += research.life_delta;

    StayOutcome { after: r, eaten, research_cost }
}
