//! Engine configuration.
//!
//! Typically built with `EngineConfig::default()` or loaded from JSON by the
//! application crate and handed to the strategy constructors.

use crate::{VgError, VgResult};

/// Weights of the beam-search objective:
///
/// ```text
/// score = visited − alpha·(initial_life − life) + beta·life + gamma·energy
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreWeights {
    pub alpha: f64,
    pub beta:  f64,
    pub gamma: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self { alpha: 0.1, beta: 0.01, gamma: 0.01 }
    }
}

/// Multipliers applied on arrival at a `Boost` location (beam search only).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoostFactors {
    pub energy:  f64,
    pub reserve: f64,
}

impl Default for BoostFactors {
    fn default() -> Self {
        Self { energy: 1.5, reserve: 2.0 }
    }
}

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Iteration cap shared by every strategy and the simulator.  Bounds the
    /// run even on cyclic graphs or graphs full of zero-distance edges.
    pub max_steps: usize,

    /// Number of partial paths the beam search keeps between rounds.
    pub beam_width: usize,

    pub score: ScoreWeights,

    pub boost: BoostFactors,
}

impl EngineConfig {
    pub const DEFAULT_MAX_STEPS: usize = 1000;
    pub const DEFAULT_BEAM_WIDTH: usize = 10;

    /// Reject zero caps and non-finite weights.
    pub fn validate(&self) -> VgResult<()> {
        if self.max_steps == 0 {
            return Err(VgError::Config("max_steps must be at least 1".into()));
        }
        if self.beam_width == 0 {
            return Err(VgError::Config("beam_width must be at least 1".into()));
        }
        let weights = [
            ("score.alpha", self.score.alpha),
            ("score.beta", self.score.beta),
            ("score.gamma", self.score.gamma),
            ("boost.energy", self.boost.energy),
            ("boost.reserve", self.boost.reserve),
        ];
        for (name, value) in weights {
            if !value.is_finite() {
                return Err(VgError::Config(format!("{name} must be finite, got {value}")));
            }
        }
        if self.boost.energy < 0.0 || self.boost.reserve < 0.0 {
            return Err(VgError::Config("boost factors must not be negative".into()));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_steps:  Self::DEFAULT_MAX_STEPS,
            beam_width: Self::DEFAULT_BEAM_WIDTH,
            score:      ScoreWeights::default(),
            boost:      BoostFactors::default(),
        }
    }
}
