//! Error types for the widget model and its adapters

use thiserror::Error;

use crate::config::validator::ValidationError;
use crate::lookup::LookupError;

/// Errors that can occur while driving the widget
#[derive(Debug, Error)]
pub enum Error {
    /// Remote lookup failed
    #[error("Lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// Backing key-value store rejected an operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON encode/decode error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings loaded but failed validation
    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// Selection index out of range
    #[error("No suggestion at index {index} ({len} available)")]
    InvalidIndex { index: usize, len: usize },

    /// Download requested without a selected logo
    #[error("No logo selected")]
    NoSelection,

    /// Filesystem error
    #[cfg(feature = "native")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "native")]
impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
