//! JSON output backend.
//!
//! Buffers the run in memory and writes a single `run.json` on
//! [`finish`](OutputWriter::finish):
//!
//! ```json
//! { "steps": [ { "step": 0, "from": "A", "to": "B", ... } ],
//!   "summary": { "origin": "A", "visited_count": 2, ... } }
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{OutputResult, StepRow, SummaryRow};
use crate::writer::OutputWriter;

#[derive(Serialize)]
struct RunDocument<'a> {
    steps:   &'a [StepRow],
    summary: Option<&'a SummaryRow>,
}

pub struct JsonWriter {
    path:     PathBuf,
    steps:    Vec<StepRow>,
    summary:  Option<SummaryRow>,
    finished: bool,
}

impl JsonWriter {
    /// Create `dir` if needed; `run.json` is written there on `finish`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            path:     dir.join("run.json"),
            steps:    Vec::new(),
            summary:  None,
            finished: false,
        })
    }
}

impl OutputWriter for JsonWriter {
    fn write_steps(&mut self, rows: &[StepRow]) -> OutputResult<()> {
        self.steps.extend_from_slice(rows);
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary = Some(row.clone());
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        let doc = RunDocument { steps: &self.steps, summary: self.summary.as_ref() };
        let out = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(out, &doc)?;
        Ok(())
    }
}
