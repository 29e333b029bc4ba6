//! Session-level error type.

use surf_core::CoreError;
use thiserror::Error;

/// Errors surfaced by session construction and execution.
///
/// The mode/ratio variants are validation failures the caller must see —
/// they are never silently corrected.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("beginner_ratio is not supported in realistic mode")]
    RatioNotAllowed,

    #[error("experiment mode requires a beginner_ratio")]
    RatioRequired,

    #[error("beginner_ratio must lie in [0, 1], got {0}")]
    RatioOutOfRange(f64),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Shorthand result type for this crate.
pub type SessionResult<T> = Result<T, SessionError>;
