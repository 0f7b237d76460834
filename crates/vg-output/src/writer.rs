//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, StepRow, SummaryRow};

/// Trait implemented by the CSV and JSON writers.
///
/// When driven by [`RunLogObserver`][crate::RunLogObserver], errors are
/// stored and retrieved with [`take_error`][crate::RunLogObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of execution steps.
    fn write_steps(&mut self, rows: &[StepRow]) -> OutputResult<()>;

    /// Write the run summary.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
