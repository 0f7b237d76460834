//! `vg-graph`: the travel graph, spatial picking, and loading.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `TravelGraph` (CSR + R-tree), `TravelGraphBuilder`, `Location` |
//! | [`loader`]  | `load_graph_json`, `load_graph_reader`                      |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `vg-core` types.        |

pub mod error;
pub mod loader;
pub mod network;


pub use error::{GraphError, GraphResult};
pub use loader::{load_graph_json, load_graph_reader};
pub use network::{Location, OpenEdge, TravelGraph, TravelGraphBuilder};
