//! Route results, stop reasons and the walk accumulator shared by all
//! strategies.

use std::collections::BTreeSet;
use std::fmt;

use rustc_hash::FxHashSet;

use vg_core::{EdgeId, NodeId, Resources, Traveler};
use vg_graph::TravelGraph;
use vg_rules::MoveCandidate;

// ── StopReason ────────────────────────────────────────────────────────────────

/// Why a route computation or simulation ended.
///
/// Every variant is a normal outcome; none of them is an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// The origin identifier is not in the graph.  Nothing was computed.
    OriginNotFound,
    /// The traveler was dead before the first stay.
    AlreadyDead,
    /// A stay exhausted energy or life budget.
    DiedDuringStay,
    /// No affordable, unvisited, unblocked neighbor remained.
    NoViableNeighbor,
    /// The iteration cap was reached.
    StepLimitReached,
}

impl StopReason {
    pub fn as_str(self) -> &'static str {
        match self {
            StopReason::OriginNotFound   => "origin not found in graph",
            StopReason::AlreadyDead      => "traveler is already dead",
            StopReason::DiedDuringStay   => "died during stay",
            StopReason::NoViableNeighbor => "no viable neighbor",
            StopReason::StepLimitReached => "step limit reached",
        }
    }

    /// `true` for the reasons that end with a dead traveler.
    pub fn is_death(self) -> bool {
        matches!(self, StopReason::AlreadyDead | StopReason::DiedDuringStay)
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RouteResult ───────────────────────────────────────────────────────────────

/// Outcome of one [`RouteStrategy::compute`][crate::RouteStrategy::compute].
#[derive(Clone, Debug, PartialEq)]
pub struct RouteResult {
    /// Name of the strategy that produced this result.
    pub strategy: &'static str,
    /// Visited locations in order, origin first.  Empty if the origin was
    /// not found.
    pub path: Vec<NodeId>,
    /// Traversed connections; `edges[i]` joins `path[i]` and `path[i + 1]`.
    pub edges: Vec<EdgeId>,
    /// The set of locations in `path`.
    pub visited: BTreeSet<NodeId>,
    /// Sum of traversed connection distances.
    pub total_distance: f64,
    /// Traveler state the computation started from.
    pub initial: Traveler,
    /// Final resources, clamped to their reportable ranges.
    pub remaining: Resources,
    pub reason: StopReason,
    pub died: bool,
}

impl RouteResult {
    /// Result for a computation that never left the starting line.
    pub(crate) fn unstarted(
        strategy: &'static str,
        path:     Vec<NodeId>,
        initial:  Traveler,
        reason:   StopReason,
    ) -> Self {
        Self {
            strategy,
            visited: path.iter().copied().collect(),
            path,
            edges: Vec::new(),
            total_distance: 0.0,
            initial,
            remaining: initial.resources.clamped(),
            reason,
            died: reason.is_death(),
        }
    }

    /// Path resolved to location identifiers.
    pub fn labels(&self, graph: &TravelGraph) -> Vec<String> {
        graph.labels(&self.path)
    }

    /// Number of distinct locations visited.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

// ── Walk ──────────────────────────────────────────────────────────────────────

/// A path under construction: ordered nodes and edges, a membership set for
/// the not-visited filter, and the distance covered so far.
#[derive(Clone, Debug)]
pub struct Walk {
    path:      Vec<NodeId>,
    edges:     Vec<EdgeId>,
    seen:      FxHashSet<NodeId>,
    travelled: f64,
}

impl Walk {
    pub fn new(origin: NodeId) -> Self {
        let mut seen = FxHashSet::default();
        seen.insert(origin);
        Self { path: vec![origin], edges: Vec::new(), seen, travelled: 0.0 }
    }

    /// The node the walk currently ends at.
    #[inline]
    pub fn current(&self) -> NodeId {
        // `new` seeds the path, so it is never empty.
        self.path[self.path.len() - 1]
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.seen.contains(&node)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn travelled(&self) -> f64 {
        self.travelled
    }

    /// Extend the walk along `step`.
    pub fn push(&mut self, step: &MoveCandidate) {
        self.path.push(step.to);
        self.edges.push(step.edge);
        self.seen.insert(step.to);
        self.travelled += step.distance;
    }

    /// Close the walk into a [`RouteResult`].
    pub fn finish(
        self,
        strategy:  &'static str,
        initial:   Traveler,
        remaining: Resources,
        reason:    StopReason,
        died:      bool,
    ) -> RouteResult {
        RouteResult {
            strategy,
            visited: self.path.iter().copied().collect(),
            path: self.path,
            edges: self.edges,
            total_distance: self.travelled,
            initial,
            remaining: remaining.clamped(),
            reason,
            died,
        }
    }
}
