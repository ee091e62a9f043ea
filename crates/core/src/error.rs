//! Error types for TransGis

use thiserror::Error;

/// Main error type for TransGis operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Degenerate geometry: {reason}")]
    DegenerateGeometry { reason: String },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Algorithm error: {0}")]
    Algorithm(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for a degenerate-geometry error
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Error::DegenerateGeometry { reason: reason.into() }
    }
}

/// Result type alias for TransGis operations
pub type Result<T> = std::result::Result<T, Error>;
