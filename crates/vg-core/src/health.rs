//! Traveler health tiers and the tables keyed on them.
//!
//! Health affects two things: how much energy one unit of reserve mass yields
//! when eaten, and how expensive a unit of travel distance is in energy.
//!
//! | Tier    | Energy per unit mass | Movement cost multiplier |
//! |---------|----------------------|--------------------------|
//! | `best`  | 5.0                  | 1.0                      |
//! | `good`  | 3.0                  | 1.2                      |
//! | `poor`  | 2.0                  | 1.5                      |
//! | `dying` | 2.0                  | 2.0                      |
//! | `dead`  | 2.0                  | 2.0                      |

use std::str::FromStr;

use crate::VgError;

/// Ordered health classification, best first.  `Dying` and `Dead` are the
/// terminal markers of the vocabulary.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HealthTier {
    #[default]
    Best,
    Good,
    Poor,
    Dying,
    Dead,
}

impl HealthTier {
    /// Energy gained per unit of reserve mass eaten.
    ///
    /// Tiers below `Poor` eat no better than `Poor`.
    #[inline]
    pub fn gain_per_mass(self) -> f64 {
        match self {
            HealthTier::Best => 5.0,
            HealthTier::Good => 3.0,
            HealthTier::Poor | HealthTier::Dying | HealthTier::Dead => 2.0,
        }
    }

    /// Energy spent per unit of distance travelled.
    #[inline]
    pub fn movement_multiplier(self) -> f64 {
        match self {
            HealthTier::Best => 1.0,
            HealthTier::Good => 1.2,
            HealthTier::Poor => 1.5,
            HealthTier::Dying | HealthTier::Dead => 2.0,
        }
    }

    #[inline]
    pub fn is_dead(self) -> bool {
        matches!(self, HealthTier::Dead)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HealthTier::Best  => "best",
            HealthTier::Good  => "good",
            HealthTier::Poor  => "poor",
            HealthTier::Dying => "dying",
            HealthTier::Dead  => "dead",
        }
    }
}

impl FromStr for HealthTier {
    type Err = VgError;

    /// Parse the fixed label vocabulary, ignoring case and surrounding spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best"  => Ok(HealthTier::Best),
            "good"  => Ok(HealthTier::Good),
            "poor"  => Ok(HealthTier::Poor),
            "dying" => Ok(HealthTier::Dying),
            "dead"  => Ok(HealthTier::Dead),
            _ => Err(VgError::UnknownHealth(s.to_owned())),
        }
    }
}

impl std::fmt::Display for HealthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
