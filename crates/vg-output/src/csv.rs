//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `steps.csv`
//! - `summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, StepRow, SummaryRow};
use crate::writer::OutputWriter;

/// Writes a run report to two CSV files.
pub struct CsvWriter {
    steps:    Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut steps = Writer::from_path(dir.join("steps.csv"))?;
        steps.write_record([
            "step", "from", "to", "distance", "eaten",
            "energy_before", "reserve_before", "life_before",
            "energy_after", "reserve_after", "life_after",
        ])?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record([
            "origin", "visited_count", "total_distance",
            "initial_energy", "final_energy", "reserve_consumed",
            "initial_life", "final_life", "stop_reason", "died",
        ])?;

        Ok(Self { steps, summary, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_steps(&mut self, rows: &[StepRow]) -> OutputResult<()> {
        for row in rows {
            self.steps.write_record(&[
                row.step.to_string(),
                row.from.clone(),
                row.to.clone().unwrap_or_default(),
                row.distance.to_string(),
                row.eaten.to_string(),
                row.energy_before.to_string(),
                row.reserve_before.to_string(),
                row.life_before.to_string(),
                row.energy_after.to_string(),
                row.reserve_after.to_string(),
                row.life_after.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.origin.clone(),
            row.visited_count.to_string(),
            row.total_distance.to_string(),
            row.initial_energy.to_string(),
            row.final_energy.to_string(),
            row.reserve_consumed.to_string(),
            row.initial_life.to_string(),
            row.final_life.to_string(),
            row.stop_reason.clone(),
            (row.died as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.steps.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
