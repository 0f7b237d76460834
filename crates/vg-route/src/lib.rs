//! `vg-route`: route strategies over a [`TravelGraph`][vg_graph::TravelGraph].
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`strategy`] | `RouteStrategy`: pluggable strategy trait                       |
//! | [`result`]   | `RouteResult`, `StopReason`, `Walk`                             |
//! | [`cycle`]    | `stay_then_move`: one stay + nearest-move cycle                 |
//! | [`greedy`]   | `MovementGreedy`, `StayGreedy`                                  |
//! | [`beam`]     | `BeamSearch`: bounded multi-path search with stays              |
//!
//! # Run state
//!
//! Every strategy starts *exploring* at the origin and finishes with exactly
//! one [`StopReason`]: the origin is missing, the traveler is already dead,
//! a stay killed it, no neighbor is viable, or the iteration cap
//! (`EngineConfig::max_steps`) was hit.  None of these is an error.
//!
//! # Determinism
//!
//! Neighbors are enumerated in ascending label order and the beam keeps its
//! candidates with a stable sort, so the same graph and traveler always yield
//! the same [`RouteResult`].

pub mod beam;
pub mod cycle;
pub mod greedy;
pub mod result;
pub mod strategy;


pub use beam::BeamSearch;
pub use cycle::{Cycle, CycleOutcome, stay_then_move};
pub use greedy::{MovementGreedy, StayGreedy};
pub use result::{RouteResult, StopReason, Walk};
pub use strategy::RouteStrategy;
