//! Per-location attributes consumed by the stay rules.

/// Location category.  `Boost` locations multiply the traveler's energy and
/// reserve on arrival, but only under the beam-search strategy.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LocationKind {
    #[default]
    Normal,
    Boost,
}

impl LocationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LocationKind::Normal => "normal",
            LocationKind::Boost  => "boost",
        }
    }
}

/// Research coefficients of a location.
///
/// A stay splits one notional time unit in half: the first half may be spent
/// eating, the second is always spent researching.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResearchParams {
    /// Time needed to eat one unit of reserve mass.  Must be `>= 0`; values
    /// at or near zero are floored at [`ResearchParams::MIN_TIME_COST`].
    pub time_cost_per_unit_mass: f64,
    /// Energy spent per unit of research time.
    pub energy_cost_per_time_unit: f64,
    /// Signed life-budget effect applied once per stay.
    pub life_delta: f64,
}

impl ResearchParams {
    /// Floor for `time_cost_per_unit_mass` when used as a divisor.
    pub const MIN_TIME_COST: f64 = 1e-9;

    pub fn new(time_cost_per_unit_mass: f64, energy_cost_per_time_unit: f64, life_delta: f64) -> Self {
        Self { time_cost_per_unit_mass, energy_cost_per_time_unit, life_delta }
    }

    /// `time_cost_per_unit_mass` with the epsilon floor applied.
    #[inline]
    pub fn guarded_time_cost(&self) -> f64 {
        self.time_cost_per_unit_mass.max(Self::MIN_TIME_COST)
    }

    /// `true` if every coefficient is finite and the time cost is not negative.
    pub fn is_valid(&self) -> bool {
        self.time_cost_per_unit_mass.is_finite()
            && self.time_cost_per_unit_mass >= 0.0
            && self.energy_cost_per_time_unit.is_finite()
            && self.life_delta.is_finite()
    }
}

impl Default for ResearchParams {
    fn default() -> Self {
        Self {
            time_cost_per_unit_mass:   1.0,
            energy_cost_per_time_unit: 0.0,
            life_delta:                0.0,
        }
    }
}
