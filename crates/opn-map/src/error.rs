//! Map-subsystem error type.

use thiserror::Error;

/// Errors produced by map collaborators (location sources in particular).
#[derive(Debug, Error)]
pub enum MapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type MapResult<T> = Result<T, MapError>;
