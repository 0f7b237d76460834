//! `vg-rules`: the two pure rule sets every strategy composes.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`stay`]     | `stay`: eat-then-research at a location                   |
//! | [`movement`] | `candidates`, `nearest`, `reachable`, `MoveCandidate`     |
//!
//! Neither module mutates anything: resources go in by value and come back
//! by value, and the graph is only read.

pub mod movement;
pub mod stay;

#[cfg(test)]
mod tests;

pub use movement::{MoveCandidate, affordable, candidates, nearest, reachable};
pub use stay::{StayOutcome, stay};
