//! `RunLogObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use vg_graph::TravelGraph;
use vg_sim::{ExecutionStep, RunLog, SimObserver};

use crate::row::{StepRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams execution steps to any [`OutputWriter`]
/// and writes the summary when the run ends.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct RunLogObserver<'g, W: OutputWriter> {
    graph:      &'g TravelGraph,
    writer:     W,
    last_error: Option<OutputError>,
}

impl<'g, W: OutputWriter> RunLogObserver<'g, W> {
    /// Create an observer backed by `writer`; `graph` resolves node labels.
    pub fn new(writer: W, graph: &'g TravelGraph) -> Self {
        Self { graph, writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for RunLogObserver<'_, W> {
    fn on_step(&mut self, step: &ExecutionStep) {
        let row = StepRow::new(step, self.graph);
        let result = self.writer.write_steps(std::slice::from_ref(&row));
        self.store_err(result);
    }

    fn on_run_end(&mut self, log: &RunLog) {
        let result = self.writer.write_summary(&SummaryRow::new(log, self.graph));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}

/// Write an already finished run in one go.
pub fn write_run_log<W: OutputWriter>(log: &RunLog, graph: &TravelGraph, writer: &mut W) -> OutputResult<()> {
    let rows: Vec<StepRow> = log.steps.iter().map(|s| StepRow::new(s, graph)).collect();
    writer.write_steps(&rows)?;
    writer.write_summary(&SummaryRow::new(log, graph))?;
    writer.finish()
}
