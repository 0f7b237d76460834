//! Beam search with stays.
//!
//! Each round expands every beam member over all its open, unvisited
//! neighbors that the remaining life budget can reach.  For each neighbor the
//! distance is deducted from life (movement costs no energy here), the boost
//! bonus is applied if the neighbor is a [`LocationKind::Boost`] location, and
//! then the traveler stays there.  Candidates that survive the stay are scored
//!
//! ```text
//! score = visited − α·(life₀ − life) + β·life + γ·energy
//! ```
//!
//! and the best `width` (stable, so earlier candidates win ties) form the
//! next beam.  The best state ever seen (more visited first, then higher
//! score) is returned when a round produces no candidates or the round cap is
//! reached.  The origin itself gets no stay.

use tracing::{debug, info};

use vg_core::{BoostFactors, EngineConfig, LocationKind, NodeId, Resources, ScoreWeights, Traveler};
use vg_core::resources::MAX_ENERGY_PCT;
use vg_graph::TravelGraph;
use vg_rules::{reachable, stay};

use crate::strategy::begin;
use crate::{RouteResult, RouteStrategy, StopReason, Walk};

#[derive(Copy, Clone, Debug)]
pub struct BeamSearch {
    pub width:     usize,
    pub max_steps: usize,
    pub weights:   ScoreWeights,
    pub boost:     BoostFactors,
}

#[derive(Clone, Debug)]
struct BeamState {
    walk:      Walk,
    resources: Resources,
    score:     f64,
}

impl BeamState {
    #[inline]
    fn at(&self) -> NodeId {
        self.walk.current()
    }

    /// More visited locations first, then strictly higher score.
    fn beats(&self, other: &BeamState) -> bool {
        match self.walk.len().cmp(&other.walk.len()) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => self.score > other.score,
        }
    }
}

impl BeamSearch {
    pub const NAME: &'static str = "beam";

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            width:     config.beam_width,
            max_steps: config.max_steps,
            weights:   config.score,
            boost:     config.boost,
        }
    }

    fn score(&self, visited: usize, r: &Resources, initial_life: f64) -> f64 {
        let w = &self.weights;
        visited as f64 - w.alpha * (initial_life - r.life_budget)
            + w.beta * r.life_budget
            + w.gamma * r.energy_pct
    }

    fn apply_boost(&self, r: Resources) -> Resources {
        Resources {
            energy_pct:   (r.energy_pct * self.boost.energy).min(MAX_ENERGY_PCT),
            reserve_mass: r.reserve_mass * self.boost.reserve,
            life_budget:  r.life_budget,
        }
    }

    /// Every surviving successor of `state`, in neighbor order.
    fn expand(
        &self,
        graph:        &TravelGraph,
        state:        &BeamState,
        traveler:     &Traveler,
        initial_life: f64,
        out:          &mut Vec<BeamState>,
    ) {
        let health = traveler.health;
        for m in reachable(graph, state.at(), &state.resources, |n| state.walk.contains(n)) {
            let mut r = m.apply(state.resources);
            if graph.kind(m.to) == LocationKind::Boost {
                r = self.apply_boost(r);
            }
            let outcome = stay(r, health, &graph.research(m.to));
            if outcome.died() {
                continue;
            }
            let mut walk = state.walk.clone();
            walk.push(&m);
            let score = self.score(walk.len(), &outcome.after, initial_life);
            out.push(BeamState { walk, resources: outcome.after, score });
        }
    }
}

impl Default for BeamSearch {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl RouteStrategy for BeamSearch {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn compute(&self, graph: &TravelGraph, origin: &str, traveler: Traveler) -> RouteResult {
        let start = match begin(Self::NAME, graph, origin, traveler) {
            Ok(n) => n,
            Err(done) => return done,
        };

        let initial_life = traveler.resources.life_budget;
        let seed = BeamState {
            walk:      Walk::new(start),
            resources: traveler.resources,
            score:     self.score(1, &traveler.resources, initial_life),
        };
        let mut best = seed.clone();
        let mut beam = vec![seed];
        let mut reason = StopReason::StepLimitReached;
        let mut next = Vec::new();

        for round in 0..self.max_steps {
            next.clear();
            for state in &beam {
                self.expand(graph, state, &traveler, initial_life, &mut next);
            }
            if next.is_empty() {
                reason = StopReason::NoViableNeighbor;
                break;
            }

            next.sort_by(|a, b| b.score.total_cmp(&a.score));
            next.truncate(self.width.max(1));
            if next[0].beats(&best) {
                best = next[0].clone();
            }
            debug!(strategy = Self::NAME, round, beam = next.len(),
                   top_score = next[0].score, best_visited = best.walk.len(), "round");
            std::mem::swap(&mut beam, &mut next);
        }

        info!(strategy = Self::NAME, visited = best.walk.len(), distance = best.walk.travelled(),
              score = best.score, %reason, "route finished");
        best.walk.finish(Self::NAME, traveler, best.resources, reason, false)
    }
}
