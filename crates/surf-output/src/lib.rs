//! `surf-output` — batch-result writers for the surf-break simulator.
//!
//! One backend is currently provided:
//!
//! | Backend | Files created                         |
//! |---------|---------------------------------------|
//! | CSV     | `run_metrics.csv`, `run_summary.csv`  |
//!
//! All backends implement [`OutputWriter`] over the plain row types in
//! [`row`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use surf_output::{CsvWriter, OutputWriter, RunRow, SummaryRow};
//!
//! let outcome = surf_mc::run_many(&req, &params, 100, 42)?;
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_runs(&RunRow::from_outcome(&outcome))?;
//! writer.write_summary(&SummaryRow::from_outcome(&outcome))?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{RunRow, SummaryRow};
pub use writer::OutputWriter;
