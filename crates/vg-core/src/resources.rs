//! The traveler's mutable resource state.
//!
//! `Resources` is the triple the stay and movement rules rewrite; `Traveler`
//! pairs it with the (fixed for a run) health tier.  Both are `Copy`: every
//! rule takes a value and returns a new one, so strategies can fork states
//! freely (the beam search relies on this).

use crate::HealthTier;

/// Upper bound of `energy_pct`.
pub const MAX_ENERGY_PCT: f64 = 100.0;

/// Energy, consumable reserve and remaining travel budget.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resources {
    /// Energy percentage.  Reported values are clamped to `[0, 100]`.
    pub energy_pct: f64,
    /// Mass of the consumable store.
    pub reserve_mass: f64,
    /// Remaining travel-distance budget.  Travel never regenerates it; only
    /// a location's `life_delta` can raise it.
    pub life_budget: f64,
}

impl Resources {
    /// Build a resource triple, clamping energy into `[0, 100]` and the
    /// reserve to be non-negative.
    pub fn new(energy_pct: f64, reserve_mass: f64, life_budget: f64) -> Self {
        Self {
            energy_pct:   energy_pct.clamp(0.0, MAX_ENERGY_PCT),
            reserve_mass: reserve_mass.max(0.0),
            life_budget,
        }
    }

    /// Terminal condition: out of energy or out of travel budget.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.energy_pct <= 0.0 || self.life_budget <= 0.0
    }

    /// The snapshot handed to callers: energy in `[0, 100]`, reserve and life
    /// budget floored at zero.
    pub fn clamped(self) -> Self {
        Self {
            energy_pct:   self.energy_pct.clamp(0.0, MAX_ENERGY_PCT),
            reserve_mass: self.reserve_mass.max(0.0),
            life_budget:  self.life_budget.max(0.0),
        }
    }
}

/// Initial traveler state supplied by the caller for one route computation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Traveler {
    pub health:    HealthTier,
    pub resources: Resources,
}

impl Traveler {
    pub fn new(health: HealthTier, energy_pct: f64, reserve_mass: f64, life_budget: f64) -> Self {
        Self {
            health,
            resources: Resources::new(energy_pct, reserve_mass, life_budget),
        }
    }

    /// Dead by health marker or by exhausted resources.
    pub fn is_dead(&self) -> bool {
        self.health.is_dead() || self.resources.is_dead()
    }
}
