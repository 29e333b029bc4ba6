//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `run_metrics.csv` — one row per Monte-Carlo run
//! - `run_summary.csv` — one row per metric (mean, std)

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::row::{RunRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes batch output to two CSV files.
pub struct CsvWriter {
    runs:      Writer<File>,
    summary:   Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut runs = Writer::from_path(dir.join("run_metrics.csv"))?;
        runs.write_record([
            "run",
            "spot_level",
            "n_surfers",
            "wave_counts",
            "avg_success_count",
            "avg_collision_count",
            "avg_waiting_time",
            "fairness",
        ])?;

        let mut summary = Writer::from_path(dir.join("run_summary.csv"))?;
        summary.write_record(["metric", "mean", "std"])?;

        Ok(Self {
            runs,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_runs(&mut self, rows: &[RunRow]) -> OutputResult<()> {
        for row in rows {
            self.runs.write_record(&[
                row.run.to_string(),
                row.spot_level.clone(),
                row.n_surfers.to_string(),
                row.wave_counts.to_string(),
                row.avg_success_count.to_string(),
                row.avg_collision_count.to_string(),
                row.avg_waiting_time.to_string(),
                row.fairness.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.summary.write_record(&[
                row.metric.to_string(),
                row.mean.to_string(),
                row.std.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.runs.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
