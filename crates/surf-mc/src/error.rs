//! Error type for the Monte-Carlo wrapper.

use surf_session::SessionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum McError {
    #[error("monte-carlo batch requires at least one run")]
    NoRuns,

    #[error(transparent)]
    Session(#[from] SessionError),
}

pub type McResult<T> = Result<T, McError>;
