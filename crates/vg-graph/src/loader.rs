//! JSON graph loader.
//!
//! # Document format
//!
//! ```json
//! {
//!   "locations": [
//!     { "id": "A", "x": 0.0, "y": 0.0 },
//!     { "id": "B", "x": 3.0, "y": 4.0, "kind": "boost",
//!       "research": { "time_cost_per_unit_mass": 2.0,
//!                     "energy_cost_per_time_unit": 4.0,
//!                     "life_delta": -1.0 } },
//!     { "id": "C" }
//!   ],
//!   "connections": [
//!     { "u": "A", "v": "B" },
//!     { "u": "B", "v": "C", "distance": 7.5, "blocked": true }
//!   ]
//! }
//! ```
//!
//! | Field        | Default                                            |
//! |--------------|----------------------------------------------------|
//! | `x`, `y`     | absent (both or neither)                           |
//! | `kind`       | `"normal"`; `"boost"` (alias `"hypergiant"`)       |
//! | `research.*` | `1.0`, `0.0`, `0.0`                                |
//! | `distance`   | derived from coordinates, else 0.0                 |
//! | `blocked`    | `false`                                            |
//!
//! Connections referencing unknown locations are rejected.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use vg_core::{LocationKind, ResearchParams};

use crate::{GraphError, GraphResult, Location, TravelGraph, TravelGraphBuilder};

// ── Document records ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct GraphDocument {
    locations: Vec<LocationRecord>,
    #[serde(default)]
    connections: Vec<ConnectionRecord>,
}

#[derive(Deserialize)]
struct LocationRecord {
    id: String,
    x: Option<f64>,
    y: Option<f64>,
    #[serde(default)]
    kind: KindRecord,
    #[serde(default)]
    research: ResearchRecord,
}

#[derive(Deserialize, Default, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum KindRecord {
    #[default]
    Normal,
    #[serde(alias = "hypergiant")]
    Boost,
}

#[derive(Deserialize)]
#[serde(default)]
struct ResearchRecord {
    time_cost_per_unit_mass:   f64,
    energy_cost_per_time_unit: f64,
    life_delta:                f64,
}

impl Default for ResearchRecord {
    fn default() -> Self {
        let d = ResearchParams::default();
        Self {
            time_cost_per_unit_mass:   d.time_cost_per_unit_mass,
            energy_cost_per_time_unit: d.energy_cost_per_time_unit,
            life_delta:                d.life_delta,
        }
    }
}

#[derive(Deserialize)]
struct ConnectionRecord {
    u: String,
    v: String,
    distance: Option<f64>,
    #[serde(default)]
    blocked: bool,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`TravelGraph`] from a JSON file.
pub fn load_graph_json(path: &Path) -> GraphResult<TravelGraph> {
    let file = std::fs::File::open(path)?;
    load_graph_reader(std::io::BufReader::new(file))
}

/// Like [`load_graph_json`] but accepts any `Read` source.
pub fn load_graph_reader<R: Read>(reader: R) -> GraphResult<TravelGraph> {
    let doc: GraphDocument = serde_json::from_reader(reader)?;

    let mut b = TravelGraphBuilder::new();
    for rec in doc.locations {
        b.add_location(to_location(rec)?)?;
    }
    for c in doc.connections {
        b.add_connection(&c.u, &c.v, c.distance, c.blocked)?;
    }
    Ok(b.build())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn to_location(rec: LocationRecord) -> GraphResult<Location> {
    let mut loc = Location::new(rec.id)
        .with_kind(match rec.kind {
            KindRecord::Normal => LocationKind::Normal,
            KindRecord::Boost  => LocationKind::Boost,
        })
        .with_research(ResearchParams::new(
            rec.research.time_cost_per_unit_mass,
            rec.research.energy_cost_per_time_unit,
            rec.research.life_delta,
        ));
    match (rec.x, rec.y) {
        (Some(x), Some(y)) => loc = loc.at(x, y),
        (None, None) => {}
        _ => {
            return Err(GraphError::InvalidLocation {
                label:  loc.label,
                reason: "coordinates must be given as both x and y or neither",
            });
        }
    }
    Ok(loc)
}
