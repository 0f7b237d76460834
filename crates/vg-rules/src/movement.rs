//! Movement rules: which neighbors the traveler can afford to move to.
//!
//! Travelling `d` units costs `d` of life budget and
//! `d × health.movement_multiplier()` energy.  A move is affordable only if
//! both resources stay strictly positive afterwards.
//!
//! [`reachable`] is the looser rule used by beam search: only the life budget
//! has to stay positive and the move costs no energy.
//!
//! Candidates come out in the graph's neighbor order (ascending neighbor
//! label), which is also the tie-break for equal distances in [`nearest`].

use vg_core::{EdgeId, HealthTier, NodeId, Resources};
use vg_graph::TravelGraph;

/// One affordable move out of the current location.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MoveCandidate {
    pub edge:        EdgeId,
    pub to:          NodeId,
    pub distance:    f64,
    pub energy_cost: f64,
    pub life_cost:   f64,
}

impl MoveCandidate {
    /// Resources after taking this move.
    #[inline]
    pub fn apply(&self, r: Resources) -> Resources {
        Resources {
            energy_pct:   r.energy_pct - self.energy_cost,
            reserve_mass: r.reserve_mass,
            life_budget:  r.life_budget - self.life_cost,
        }
    }
}

/// `true` if a move of `distance` leaves both energy and life budget positive.
#[inline]
pub fn affordable(r: &Resources, health: HealthTier, distance: f64) -> bool {
    r.life_budget - distance > 0.0 && r.energy_pct - distance * health.movement_multiplier() > 0.0
}

/// All affordable moves from `from` to non-blocked, not-yet-visited neighbors.
pub fn candidates(
    graph:      &TravelGraph,
    from:       NodeId,
    resources:  &Resources,
    health:     HealthTier,
    is_visited: impl Fn(NodeId) -> bool,
) -> Vec<MoveCandidate> {
    let multiplier = health.movement_multiplier();
    graph
        .open_edges(from)
        .filter(|o| !is_visited(o.neighbor))
        .filter(|o| affordable(resources, health, o.distance))
        .map(|o| MoveCandidate {
            edge:        o.edge,
            to:          o.neighbor,
            distance:    o.distance,
            energy_cost: o.distance * multiplier,
            life_cost:   o.distance,
        })
        .collect()
}

/// Moves to non-blocked, not-yet-visited neighbors that leave the life budget
/// positive.  Energy is not charged.
pub fn reachable(
    graph:      &TravelGraph,
    from:       NodeId,
    resources:  &Resources,
    is_visited: impl Fn(NodeId) -> bool,
) -> Vec<MoveCandidate> {
    graph
        .open_edges(from)
        .filter(|o| !is_visited(o.neighbor))
        .filter(|o| resources.life_budget - o.distance > 0.0)
        .map(|o| MoveCandidate {
            edge:        o.edge,
            to:          o.neighbor,
            distance:    o.distance,
            energy_cost: 0.0,
            life_cost:   o.distance,
        })
        .collect()
}

/// The affordable move with the smallest distance; the first one in neighbor
/// order wins ties.  `None` means "no viable neighbor".
pub fn nearest(
    graph:      &TravelGraph,
    from:       NodeId,
    resources:  &Resources,
    health:     HealthTier,
    is_visited: impl Fn(NodeId) -> bool,
) -> Option<MoveCandidate> {
    candidates(graph, from, resources, health, is_visited)
        .into_iter()
        .fold(None, |best: Option<MoveCandidate>, c| match best {
            Some(b) if b.distance <= c.distance => Some(b),
            _ => Some(c),
        })
}
