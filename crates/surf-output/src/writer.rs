//! The `OutputWriter` trait implemented by all backend writers.

use crate::row::{RunRow, SummaryRow};
use crate::OutputResult;

/// Trait implemented by batch-output backends.
pub trait OutputWriter {
    /// Write a batch of per-run metric rows.
    fn write_runs(&mut self, rows: &[RunRow]) -> OutputResult<()>;

    /// Write the aggregated summary rows.
    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
