//! Simulation observer trait for progress reporting and data collection.

use vg_core::{NodeId, Traveler};

use crate::{ExecutionStep, RunLog};

/// Callbacks invoked by [`Simulator::run`][crate::Simulator::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: step printer
///
/// ```rust,ignore
/// struct StepPrinter;
///
/// impl SimObserver for StepPrinter {
///     fn on_step(&mut self, step: &ExecutionStep) {
///         println!("{} -> {:?} ({})", step.from, step.to, step.distance);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first cycle.  `origin` is `None` when the
    /// origin label was not found.
    fn on_run_start(&mut self, _origin: Option<NodeId>, _traveler: &Traveler) {}

    /// Called after every logged execution step.
    fn on_step(&mut self, _step: &ExecutionStep) {}

    /// Called once with the finished log.
    fn on_run_end(&mut self, _log: &RunLog) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
