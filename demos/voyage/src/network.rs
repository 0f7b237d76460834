//! Built-in demo graph.
//!
//! Eight star systems on a plane.  `Rigel` is a boost location and
//! `Deneb` has harsh research conditions; the `Sol`–`Vega` lane starts
//! blocked.

use vg_core::{LocationKind, ResearchParams};
use vg_graph::{GraphResult, Location, TravelGraph, TravelGraphBuilder};

pub fn build_graph() -> GraphResult<TravelGraph> {
    let mut b = TravelGraphBuilder::new();

    b.add_location(Location::new("Sol").at(0.0, 0.0))?;
    b.add_location(Location::new("Alpha").at(1.5, 1.0)
        .with_research(ResearchParams::new(1.0, 2.0, 0.0)))?;
    b.add_location(Location::new("Sirius").at(3.0, -1.0)
        .with_research(ResearchParams::new(0.5, 1.0, 0.5)))?;
    b.add_location(Location::new("Vega").at(4.0, 3.0)
        .with_research(ResearchParams::new(2.0, 3.0, -0.5)))?;
    b.add_location(Location::new("Rigel").at(6.0, 0.0)
        .with_kind(LocationKind::Boost)
        .with_research(ResearchParams::new(1.0, 1.0, 0.0)))?;
    b.add_location(Location::new("Deneb").at(7.5, 2.5)
        .with_research(ResearchParams::new(0.25, 8.0, -2.0)))?;
    b.add_location(Location::new("Altair").at(9.0, -0.5)
        .with_research(ResearchParams::new(1.0, 0.5, 1.0)))?;
    b.add_location(Location::new("Polaris").at(11.0, 1.5))?;

    // Distances derived from coordinates unless given.
    b.add_connection("Sol",    "Alpha",   None,      false)?;
    b.add_connection("Sol",    "Sirius",  None,      false)?;
    b.add_connection("Sol",    "Vega",    None,      true)?;
    b.add_connection("Alpha",  "Vega",    None,      false)?;
    b.add_connection("Sirius", "Rigel",   None,      false)?;
    b.add_connection("Vega",   "Deneb",   None,      false)?;
    b.add_connection("Rigel",  "Deneb",   Some(2.0), false)?;
    b.add_connection("Rigel",  "Altair",  None,      false)?;
    b.add_connection("Deneb",  "Polaris", None,      false)?;
    b.add_connection("Altair", "Polaris", Some(2.5), false)?;

    Ok(b.build())
}
