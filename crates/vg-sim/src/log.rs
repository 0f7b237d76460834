//! Execution steps and the run log they accumulate into.

use vg_core::{EdgeId, NodeId, Resources, Traveler};
use vg_route::StopReason;

/// One stay + optional move cycle.
///
/// `before` is the state on arrival at `from`.  `after` is the state after
/// the stay and, when `to` is present, after paying for the move as well.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExecutionStep {
    /// Zero-based cycle number.
    pub index:    usize,
    pub from:     NodeId,
    /// `None` when the traveler was stuck at `from`.
    pub to:       Option<NodeId>,
    pub edge:     Option<EdgeId>,
    /// Distance moved; 0.0 when stuck.
    pub distance: f64,
    /// Reserve mass eaten during the stay.
    pub eaten:    f64,
    pub before:   Resources,
    pub after:    Resources,
}

impl ExecutionStep {
    #[inline]
    pub fn moved(&self) -> bool {
        self.to.is_some()
    }
}

/// Everything a finished simulation produced.
#[derive(Clone, Debug, PartialEq)]
pub struct RunLog {
    pub steps:         Vec<ExecutionStep>,
    /// Locations in the order they were entered, origin first.
    pub visited_order: Vec<NodeId>,
    pub stop_reason:   StopReason,
    pub initial:       Traveler,
    /// Final resources, clamped to their reportable ranges.
    pub final_state:   Resources,
    pub died:          bool,
}

impl RunLog {
    /// Traversed `(from, to)` pairs, in order.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        self.steps
            .iter()
            .filter_map(|s| s.to.map(|to| (s.from, to)))
            .collect()
    }

    /// Traversed connection ids, in order.
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.steps.iter().filter_map(|s| s.edge).collect()
    }

    pub fn total_distance(&self) -> f64 {
        self.steps.iter().map(|s| s.distance).sum()
    }

    /// Reserve mass eaten over the whole run.
    pub fn reserve_consumed(&self) -> f64 {
        (self.initial.resources.reserve_mass - self.final_state.reserve_mass).max(0.0)
    }

    /// Reserve mass eaten during logged stays at `node`.
    pub fn reserve_consumed_at(&self, node: NodeId) -> f64 {
        self.steps.iter().filter(|s| s.from == node).map(|s| s.eaten).sum()
    }
}
