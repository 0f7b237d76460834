//! Integration tests for vg-output.

#[cfg(test)]
mod helpers {
    use vg_core::{HealthTier, ResearchParams, Traveler};
    use vg_graph::{Location, TravelGraph, TravelGraphBuilder};
    use vg_sim::{NoopObserver, RunLog, Simulator};

    use crate::{StepRow, SummaryRow};

    pub fn tmp() -> tempfile::TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    /// `A –5– B –5– C`; eating is possible everywhere.
    pub fn line() -> TravelGraph {
        let mut b = TravelGraphBuilder::new();
        for id in ["A", "B", "C"] {
            b.add_location(Location::new(id).with_research(ResearchParams::new(1.0, 0.0, 0.0))).unwrap();
        }
        b.connect("A", "B", 5.0).unwrap();
        b.connect("B", "C", 5.0).unwrap();
        b.build()
    }

    pub fn traveler() -> Traveler {
        Traveler::new(HealthTier::Best, 40.0, 4.0, 12.0)
    }

    pub fn run(graph: &TravelGraph) -> RunLog {
        Simulator::new(graph, "A", traveler()).run(&mut NoopObserver)
    }

    pub fn step_row(step: usize, to: Option<&str>) -> StepRow {
        StepRow {
            step,
            from:           "A".into(),
            to:             to.map(str::to_owned),
            distance:       if to.is_some() { 5.0 } else { 0.0 },
            eaten:          0.5,
            energy_before:  40.0,
            reserve_before: 4.0,
            life_before:    12.0,
            energy_after:   37.5,
            reserve_after:  3.5,
            life_after:     7.0,
        }
    }

    pub fn summary_row() -> SummaryRow {
        SummaryRow {
            origin:           "A".into(),
            visited_count:    3,
            total_distance:   10.0,
            initial_energy:   40.0,
            final_energy:     37.5,
            reserve_consumed: 1.5,
            initial_life:     12.0,
            final_life:       2.0,
            stop_reason:      "no viable neighbor".into(),
            died:             false,
        }
    }
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use crate::{StepRow, SummaryRow};

    use super::helpers::{line, run};

    #[test]
    fn step_rows_resolve_labels() {
        let g = line();
        let log = run(&g);
        let rows: Vec<StepRow> = log.steps.iter().map(|s| StepRow::new(s, &g)).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!((rows[0].from.as_str(), rows[0].to.as_deref()), ("A", Some("B")));
        assert_eq!((rows[2].from.as_str(), rows[2].to.as_deref()), ("C", None));
        assert_eq!(rows[0].eaten, 0.5);
        assert_eq!(rows[0].energy_before, 40.0);
        // 40 + 2.5 eaten − 5 moved
        assert!((rows[0].energy_after - 37.5).abs() < 1e-9);
    }

    #[test]
    fn summary_row_totals() {
        let g = line();
        let log = run(&g);
        let s = SummaryRow::new(&log, &g);
        assert_eq!(s.origin, "A");
        assert_eq!(s.visited_count, 3);
        assert_eq!(s.total_distance, 10.0);
        assert!((s.reserve_consumed - 1.5).abs() < 1e-9);
        assert_eq!(s.initial_life, 12.0);
        assert!((s.final_life - 2.0).abs() < 1e-9);
        assert_eq!(s.stop_reason, "no viable neighbor");
        assert!(!s.died);
    }

    #[test]
    fn summary_for_missing_origin() {
        let g = line();
        let log = vg_sim::Simulator::new(&g, "Z", super::helpers::traveler()).run(&mut vg_sim::NoopObserver);
        let s = SummaryRow::new(&log, &g);
        assert_eq!(s.origin, "");
        assert_eq!(s.visited_count, 0);
        assert_eq!(s.stop_reason, "origin not found in graph");
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    use super::helpers::{step_row, summary_row, tmp};

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("steps.csv").exists());
        assert!(dir.path().join("summary.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("reports").join("run1");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("steps.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("steps.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, [
            "step", "from", "to", "distance", "eaten",
            "energy_before", "reserve_before", "life_before",
            "energy_after", "reserve_after", "life_after",
        ]);

        let mut rdr = csv::Reader::from_path(dir.path().join("summary.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers[0], "origin");
        assert_eq!(headers[8], "stop_reason");
        assert_eq!(headers.len(), 10);
    }

    #[test]
    fn csv_stuck_step_has_empty_destination() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_steps(&[step_row(0, Some("B")), step_row(1, None)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("steps.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "B");
        assert_eq!(&rows[1][2], "");
        assert_eq!(&rows[1][3], "0");
    }

    #[test]
    fn csv_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&summary_row()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("summary.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "3");
        assert_eq!(&rows[0][8], "no viable neighbor");
        assert_eq!(&rows[0][9], "0");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

// ── JSON ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod json_tests {
    use crate::json::JsonWriter;
    use crate::writer::OutputWriter;

    use super::helpers::{step_row, summary_row, tmp};

    fn read(dir: &std::path::Path) -> serde_json::Value {
        let text = std::fs::read_to_string(dir.join("run.json")).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn nothing_written_before_finish() {
        let dir = tmp();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        w.write_steps(&[step_row(0, Some("B"))]).unwrap();
        assert!(!dir.path().join("run.json").exists());
    }

    #[test]
    fn document_layout() {
        let dir = tmp();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        w.write_steps(&[step_row(0, Some("B")), step_row(1, None)]).unwrap();
        w.write_summary(&summary_row()).unwrap();
        w.finish().unwrap();

        let doc = read(dir.path());
        let steps = doc["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0]["to"], "B");
        assert!(steps[1]["to"].is_null());
        assert_eq!(doc["summary"]["visited_count"], 3);
        assert_eq!(doc["summary"]["died"], false);
    }

    #[test]
    fn summary_is_null_when_missing() {
        let dir = tmp();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert!(read(dir.path())["summary"].is_null());
    }
}

// ── Observer integration ──────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use vg_sim::Simulator;

    use crate::{CsvWriter, JsonWriter, OutputError, OutputResult, OutputWriter, RunLogObserver, StepRow,
                SummaryRow, write_run_log};

    use super::helpers::{line, tmp, traveler};

    #[test]
    fn integration_csv() {
        let g = line();
        let dir = tmp();
        let mut obs = RunLogObserver::new(CsvWriter::new(dir.path()).unwrap(), &g);
        let log = Simulator::new(&g, "A", traveler()).run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("steps.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), log.steps.len());
        let from: Vec<_> = rows.iter().map(|r| r[1].to_owned()).collect();
        assert_eq!(from, ["A", "B", "C"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("summary.csv")).unwrap();
        assert_eq!(rdr.records().count(), 1);
    }

    #[test]
    fn after_the_fact_matches_live() {
        let g = line();
        let live = tmp();
        let mut obs = RunLogObserver::new(JsonWriter::new(live.path()).unwrap(), &g);
        let log = Simulator::new(&g, "A", traveler()).run(&mut obs);
        assert!(obs.take_error().is_none());

        let later = tmp();
        let mut w = JsonWriter::new(later.path()).unwrap();
        write_run_log(&log, &g, &mut w).unwrap();

        let a = std::fs::read_to_string(live.path().join("run.json")).unwrap();
        let b = std::fs::read_to_string(later.path().join("run.json")).unwrap();
        assert_eq!(a, b);
    }

    /// Fails every summary write.
    struct Failing {
        steps: usize,
    }

    impl OutputWriter for Failing {
        fn write_steps(&mut self, rows: &[StepRow]) -> OutputResult<()> {
            self.steps += rows.len();
            Ok(())
        }
        fn write_summary(&mut self, _row: &SummaryRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn finish(&mut self) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("second failure")))
        }
    }

    #[test]
    fn first_error_is_kept() {
        let g = line();
        let mut obs = RunLogObserver::new(Failing { steps: 0 }, &g);
        let log = Simulator::new(&g, "A", traveler()).run(&mut obs);
        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().steps, log.steps.len());
    }
}
