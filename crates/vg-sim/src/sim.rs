//! The `Simulator` and its stay/move loop.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use vg_core::{EngineConfig, NodeId, Resources, Traveler};
use vg_graph::TravelGraph;
use vg_route::{CycleOutcome, StopReason, stay_then_move};

use crate::{ExecutionStep, RunLog, SimObserver};

/// Where a simulation stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    Exploring,
    Finished(StopReason),
}

impl RunState {
    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, RunState::Finished(_))
    }
}

/// Replays greedy-with-stay one cycle at a time.
///
/// Each call to [`step`](Self::step) stays at the current location, then
/// either moves to the nearest affordable unvisited neighbor (logging an
/// [`ExecutionStep`] with `to` set), logs a stuck step (`to == None`) and
/// finishes, or finishes because the stay killed the traveler.  A death
/// during the stay is not logged as a step; it shows up only in the stop
/// reason and the final state.
///
/// The graph is borrowed read-only for the whole run.  Create directly with
/// [`Simulator::new`] or through [`SimBuilder`][crate::SimBuilder].
pub struct Simulator<'g> {
    graph:     &'g TravelGraph,
    max_steps: usize,
    initial:   Traveler,
    resources: Resources,
    position:  Option<NodeId>,
    visited:   Vec<NodeId>,
    seen:      FxHashSet<NodeId>,
    steps:     Vec<ExecutionStep>,
    cycles:    usize,
    state:     RunState,
}

impl<'g> Simulator<'g> {
    /// Start a simulation at the location labelled `origin` with the default
    /// iteration cap.
    pub fn new(graph: &'g TravelGraph, origin: &str, traveler: Traveler) -> Self {
        Self::with_max_steps(graph, origin, traveler, EngineConfig::DEFAULT_MAX_STEPS)
    }

    pub(crate) fn with_max_steps(
        graph:     &'g TravelGraph,
        origin:    &str,
        traveler:  Traveler,
        max_steps: usize,
    ) -> Self {
        let position = graph.node_id(origin);
        let mut sim = Self {
            graph,
            max_steps,
            initial: traveler,
            resources: traveler.resources,
            position,
            visited: Vec::new(),
            seen: FxHashSet::default(),
            steps: Vec::new(),
            cycles: 0,
            state: RunState::Exploring,
        };
        match position {
            None => {
                tracing::warn!(origin, "origin not found in graph");
                sim.state = RunState::Finished(StopReason::OriginNotFound);
            }
            Some(start) => {
                sim.visited.push(start);
                sim.seen.insert(start);
                if traveler.is_dead() {
                    sim.finish(StopReason::AlreadyDead);
                }
            }
        }
        sim
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Current location; `None` only if the origin was not found.
    pub fn position(&self) -> Option<NodeId> {
        self.position
    }

    /// Current (unclamped) resources.
    pub fn resources(&self) -> Resources {
        self.resources
    }

    pub fn steps(&self) -> &[ExecutionStep] {
        &self.steps
    }

    pub fn visited_order(&self) -> &[NodeId] {
        &self.visited
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Run one stay/move cycle and return the resulting state.  Does nothing
    /// once the run has finished.
    pub fn step(&mut self) -> RunState {
        let (RunState::Exploring, Some(at)) = (self.state, self.position) else {
            return self.state;
        };
        if self.cycles >= self.max_steps {
            self.finish(StopReason::StepLimitReached);
            return self.state;
        }

        let health = self.initial.health;
        let seen = &self.seen;
        let cycle = stay_then_move(self.graph, at, self.resources, health, |n| seen.contains(&n));
        let index = self.cycles;
        self.cycles += 1;
        self.resources = cycle.after();

        match cycle.outcome {
            CycleOutcome::Died => {
                debug!(step = index, at = self.graph.label(at).unwrap_or("?"), energy = cycle.stay.after.energy_pct,
                       life = cycle.stay.after.life_budget, "died during stay");
                self.finish(StopReason::DiedDuringStay);
            }
            CycleOutcome::Stuck => {
                self.steps.push(ExecutionStep {
                    index,
                    from:     at,
                    to:       None,
                    edge:     None,
                    distance: 0.0,
                    eaten:    cycle.stay.eaten,
                    before:   cycle.before,
                    after:    self.resources.clamped(),
                });
                debug!(step = index, at = self.graph.label(at).unwrap_or("?"), "stuck");
                self.finish(StopReason::NoViableNeighbor);
            }
            CycleOutcome::Moved(m) => {
                self.steps.push(ExecutionStep {
                    index,
                    from:     at,
                    to:       Some(m.to),
                    edge:     Some(m.edge),
                    distance: m.distance,
                    eaten:    cycle.stay.eaten,
                    before:   cycle.before,
                    after:    self.resources.clamped(),
                });
                debug!(step = index, from = self.graph.label(at).unwrap_or("?"),
                       to = self.graph.label(m.to).unwrap_or("?"), distance = m.distance,
                       energy = self.resources.energy_pct, life = self.resources.life_budget, "move");
                self.position = Some(m.to);
                self.visited.push(m.to);
                self.seen.insert(m.to);
            }
        }
        self.state
    }

    /// Run to completion, reporting to `observer`, and return the log.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> RunLog {
        observer.on_run_start(self.position, &self.initial);
        while !self.state.is_finished() {
            let logged = self.steps.len();
            self.step();
            if let Some(s) = self.steps.get(logged) {
                observer.on_step(s);
            }
        }
        let log = self.into_log();
        observer.on_run_end(&log);
        log
    }

    /// Close the run into a [`RunLog`].  An unfinished run is reported as
    /// having hit the step limit.
    pub fn into_log(self) -> RunLog {
        let stop_reason = match self.state {
            RunState::Finished(r) => r,
            RunState::Exploring => StopReason::StepLimitReached,
        };
        RunLog {
            steps:         self.steps,
            visited_order: self.visited,
            stop_reason,
            initial:       self.initial,
            final_state:   self.resources.clamped(),
            died:          stop_reason.is_death(),
        }
    }

    fn finish(&mut self, reason: StopReason) {
        self.state = RunState::Finished(reason);
        info!(visited = self.visited.len(), steps = self.steps.len(),
              energy = self.resources.energy_pct, life = self.resources.life_budget,
              %reason, "simulation finished");
    }
}
