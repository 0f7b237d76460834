//! The two greedy strategies.
//!
//! Both always take the nearest affordable, unvisited neighbor.  They differ
//! only in whether the traveler stays (eats and researches) at each location
//! before moving on.

use tracing::{debug, info};

use vg_core::{EngineConfig, Traveler};
use vg_graph::TravelGraph;
use vg_rules::nearest;

use crate::cycle::{CycleOutcome, stay_then_move};
use crate::strategy::begin;
use crate::{RouteResult, RouteStrategy, StopReason, Walk};

// ── MovementGreedy ────────────────────────────────────────────────────────────

/// Travel cost only: no stays, no eating, no research.  The audit baseline.
#[derive(Copy, Clone, Debug)]
pub struct MovementGreedy {
    pub max_steps: usize,
}

impl MovementGreedy {
    pub const NAME: &'static str = "greedy";

    pub fn from_config(config: &EngineConfig) -> Self {
        Self { max_steps: config.max_steps }
    }
}

impl Default for MovementGreedy {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl RouteStrategy for MovementGreedy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn compute(&self, graph: &TravelGraph, origin: &str, traveler: Traveler) -> RouteResult {
        let start = match begin(Self::NAME, graph, origin, traveler) {
            Ok(n) => n,
            Err(done) => return done,
        };

        let health = traveler.health;
        let mut r = traveler.resources;
        let mut walk = Walk::new(start);
        let mut reason = StopReason::StepLimitReached;

        for _ in 0..self.max_steps {
            let at = walk.current();
            let Some(m) = nearest(graph, at, &r, health, |n| walk.contains(n)) else {
                reason = StopReason::NoViableNeighbor;
                break;
            };
            r = m.apply(r);
            debug!(strategy = Self::NAME, from = graph.label(at).unwrap_or("?"),
                   to = graph.label(m.to).unwrap_or("?"), distance = m.distance,
                   energy = r.energy_pct, life = r.life_budget, "move");
            walk.push(&m);
        }

        info!(strategy = Self::NAME, visited = walk.len(), distance = walk.travelled(),
              %reason, "route finished");
        walk.finish(Self::NAME, traveler, r, reason, false)
    }
}

// ── StayGreedy ────────────────────────────────────────────────────────────────

/// Stay at every location, then move to the nearest affordable neighbor.
#[derive(Copy, Clone, Debug)]
pub struct StayGreedy {
    pub max_steps: usize,
}

impl StayGreedy {
    pub const NAME: &'static str = "greedy-stay";

    pub fn from_config(config: &EngineConfig) -> Self {
        Self { max_steps: config.max_steps }
    }
}

impl Default for StayGreedy {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl RouteStrategy for StayGreedy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn compute(&self, graph: &TravelGraph, origin: &str, traveler: Traveler) -> RouteResult {
        let start = match begin(Self::NAME, graph, origin, traveler) {
            Ok(n) => n,
            Err(done) => return done,
        };

        let health = traveler.health;
        let mut r = traveler.resources;
        let mut walk = Walk::new(start);
        let mut reason = StopReason::StepLimitReached;

        for _ in 0..self.max_steps {
            let cycle = stay_then_move(graph, walk.current(), r, health, |n| walk.contains(n));
            debug!(strategy = Self::NAME, at = graph.label(cycle.at).unwrap_or("?"), eaten = cycle.stay.eaten,
                   energy = cycle.stay.after.energy_pct, life = cycle.stay.after.life_budget, "stay");
            r = cycle.after();
            match cycle.outcome {
                CycleOutcome::Died => {
                    reason = StopReason::DiedDuringStay;
                    break;
                }
                CycleOutcome::Stuck => {
                    reason = StopReason::NoViableNeighbor;
                    break;
                }
                CycleOutcome::Moved(m) => {
                    debug!(strategy = Self::NAME, from = graph.label(cycle.at).unwrap_or("?"),
                           to = graph.label(m.to).unwrap_or("?"), distance = m.distance, "move");
                    walk.push(&m);
                }
            }
        }

        info!(strategy = Self::NAME, visited = walk.len(), distance = walk.travelled(),
              %reason, "route finished");
        let died = reason == StopReason::DiedDuringStay;
        walk.finish(Self::NAME, traveler, r, reason, died)
    }
}
