//! `surf-mc` — Monte-Carlo repetition wrapper around the session engine.
//!
//! Executes [`surf_session::run_session`] N times, each run with its own
//! deterministically derived RNG stream, and reduces the numeric columns of
//! the collected [`SessionStatistics`][surf_session::SessionStatistics] to
//! per-metric mean and sample standard deviation.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs the batch on Rayon's thread pool.  Results are identical to the sequential path (per-run seeding). |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use surf_core::{RuleType, SimParams, SpotLevel};
//! use surf_mc::run_many;
//! use surf_session::SessionRequest;
//!
//! let req = SessionRequest::new(SpotLevel::Beginner, RuleType::FreeForAll);
//! let outcome = run_many(&req, &SimParams::default(), 100, 42)?;
//! println!("{:.2} ± {:.2} rides/surfer",
//!          outcome.mean.avg_success_count, outcome.std.avg_success_count);
//! ```

pub mod aggregate;
pub mod error;
pub mod runner;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use aggregate::MetricSummary;
pub use error::{McError, McResult};
pub use runner::{run_many, McOutcome};
