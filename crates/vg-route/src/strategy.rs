//! The pluggable strategy trait and the start-of-run checks every
//! implementation shares.

use vg_core::{NodeId, Traveler};
use vg_graph::TravelGraph;

use crate::{RouteResult, StopReason};

/// A route computation strategy.
///
/// Implementations never fail: a missing origin, death, being stuck and the
/// iteration cap all come back as a [`RouteResult`] with the matching
/// [`StopReason`].
pub trait RouteStrategy {
    /// Short identifier, e.g. `"greedy"`.
    fn name(&self) -> &'static str;

    /// Compute a route from the location labelled `origin`.
    fn compute(&self, graph: &TravelGraph, origin: &str, traveler: Traveler) -> RouteResult;
}

/// Resolve `origin` and check the traveler is alive.
///
/// `Err` carries the finished result for the two cases in which nothing
/// is computed.
pub(crate) fn begin(
    strategy: &'static str,
    graph:    &TravelGraph,
    origin:   &str,
    traveler: Traveler,
) -> Result<NodeId, RouteResult> {
    let Some(start) = graph.node_id(origin) else {
        tracing::warn!(strategy, origin, "origin not found in graph");
        return Err(RouteResult::unstarted(strategy, Vec::new(), traveler, StopReason::OriginNotFound));
    };
    if traveler.is_dead() {
        tracing::info!(strategy, origin, health = %traveler.health, "traveler is already dead");
        return Err(RouteResult::unstarted(strategy, vec![start], traveler, StopReason::AlreadyDead));
    }
    Ok(start)
}
