//! Plain data row types written by output backends.

use serde::Serialize;

use vg_core::NodeId;
use vg_graph::TravelGraph;
use vg_sim::{ExecutionStep, RunLog};

/// One execution step with locations resolved to their identifiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRow {
    pub step:           usize,
    pub from:           String,
    /// `None` for a stuck step.
    pub to:             Option<String>,
    pub distance:       f64,
    pub eaten:          f64,
    pub energy_before:  f64,
    pub reserve_before: f64,
    pub life_before:    f64,
    pub energy_after:   f64,
    pub reserve_after:  f64,
    pub life_after:     f64,
}

impl StepRow {
    pub fn new(step: &ExecutionStep, graph: &TravelGraph) -> Self {
        Self {
            step:           step.index,
            from:           label(graph, step.from),
            to:             step.to.map(|n| label(graph, n)),
            distance:       step.distance,
            eaten:          step.eaten,
            energy_before:  step.before.energy_pct,
            reserve_before: step.before.reserve_mass,
            life_before:    step.before.life_budget,
            energy_after:   step.after.energy_pct,
            reserve_after:  step.after.reserve_mass,
            life_after:     step.after.life_budget,
        }
    }
}

/// Whole-run totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// Origin identifier; empty if the origin was not found.
    pub origin:           String,
    pub visited_count:    usize,
    pub total_distance:   f64,
    pub initial_energy:   f64,
    pub final_energy:     f64,
    pub reserve_consumed: f64,
    pub initial_life:     f64,
    pub final_life:       f64,
    pub stop_reason:      String,
    pub died:             bool,
}

impl SummaryRow {
    pub fn new(log: &RunLog, graph: &TravelGraph) -> Self {
        Self {
            origin:           log.visited_order.first().map(|&n| label(graph, n)).unwrap_or_default(),
            visited_count:    log.visited_order.len(),
            total_distance:   log.total_distance(),
            initial_energy:   log.initial.resources.energy_pct,
            final_energy:     log.final_state.energy_pct,
            reserve_consumed: log.reserve_consumed(),
            initial_life:     log.initial.resources.life_budget,
            final_life:       log.final_state.life_budget,
            stop_reason:      log.stop_reason.to_string(),
            died:             log.died,
        }
    }
}

fn label(graph: &TravelGraph, node: NodeId) -> String {
    graph.label(node).map_or_else(|| node.to_string(), str::to_owned)
}
