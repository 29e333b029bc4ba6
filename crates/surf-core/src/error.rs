//! Base error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `#[from]` or keep it as one wrapped variant.

use thiserror::Error;

/// The top-level error type for `surf-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid distribution parameters: {0}")]
    Distribution(String),
}

/// Shorthand result type for all `surf-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
