//! `vg-core`: foundational types for the voyage routing engine.
//!
//! This crate is a dependency of every other `vg-*` crate.  It has no `vg-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`ids`]        | `NodeId`, `EdgeId`                                       |
//! | [`geo`]        | `Point`, Euclidean distance                              |
//! | [`health`]     | `HealthTier` + eating / movement-cost tables             |
//! | [`location`]   | `LocationKind`, `ResearchParams`                         |
//! | [`resources`]  | `Resources`, `Traveler`                                  |
//! | [`config`]     | `EngineConfig`, `ScoreWeights`, `BoostFactors`           |
//! | [`error`]      | `VgError`, `VgResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod health;
pub mod ids;
pub mod location;
pub mod resources;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BoostFactors, EngineConfig, ScoreWeights};
pub use error::{VgError, VgResult};
pub use geo::Point;
pub use health::HealthTier;
pub use ids::{EdgeId, NodeId};
pub use location::{LocationKind, ResearchParams};
pub use resources::{Resources, Traveler};
