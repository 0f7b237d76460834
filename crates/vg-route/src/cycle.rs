//! One stay-then-move cycle at a single location.
//!
//! Both [`StayGreedy`][crate::StayGreedy] and the simulator in `vg-sim` are
//! built from repeated calls to [`stay_then_move`]; keeping the cycle in one
//! place guarantees the two produce identical routes.

use vg_core::{HealthTier, NodeId, Resources};
use vg_graph::TravelGraph;
use vg_rules::{MoveCandidate, StayOutcome, nearest, stay};

/// How a cycle ended.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CycleOutcome {
    /// The stay exhausted a resource; no move was attempted.
    Died,
    /// The traveler survived the stay but no neighbor is viable.
    Stuck,
    /// The traveler moved along the given candidate.
    Moved(MoveCandidate),
}

/// Snapshot of one cycle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cycle {
    pub at:      NodeId,
    /// Resources on arrival, before the stay.
    pub before:  Resources,
    pub stay:    StayOutcome,
    pub outcome: CycleOutcome,
}

impl Cycle {
    /// Resources at the end of the cycle: after the move if one happened,
    /// otherwise after the stay.
    pub fn after(&self) -> Resources {
        match self.outcome {
            CycleOutcome::Moved(m) => m.apply(self.stay.after),
            CycleOutcome::Died | CycleOutcome::Stuck => self.stay.after,
        }
    }

    /// The move taken, if any.
    pub fn step(&self) -> Option<&MoveCandidate> {
        match &self.outcome {
            CycleOutcome::Moved(m) => Some(m),
            _ => None,
        }
    }
}

/// Stay at `at`, then pick the nearest affordable neighbor not yet visited.
pub fn stay_then_move(
    graph:      &TravelGraph,
    at:         NodeId,
    before:     Resources,
    health:     HealthTier,
    is_visited: impl Fn(NodeId) -> bool,
) -> Cycle {
    let stay = stay(before, health, &graph.research(at));
    let outcome = if stay.died() {
        CycleOutcome::Died
    } else {
        match nearest(graph, at, &stay.after, health, is_visited) {
            Some(m) => CycleOutcome::Moved(m),
            None => CycleOutcome::Stuck,
        }
    };
    Cycle { at, before, stay, outcome }
}
