//! `vg-output`: run-log report writers for the voyage routing engine.
//!
//! | Backend | Files created                 |
//! |---------|-------------------------------|
//! | CSV     | `steps.csv`, `summary.csv`    |
//! | JSON    | `run.json`                    |
//!
//! Both backends implement [`OutputWriter`] and are driven either live by
//! [`RunLogObserver`], which implements `vg_sim::SimObserver`, or after the
//! fact by [`write_run_log`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use vg_output::{CsvWriter, RunLogObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = RunLogObserver::new(writer, &graph);
//! let log = Simulator::new(&graph, "A", traveler).run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use observer::{RunLogObserver, write_run_log};
pub use row::{StepRow, SummaryRow};
pub use writer::OutputWriter;
