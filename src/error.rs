//! Error types for textclean
//!
//! This module defines the error types used throughout the crate.

use thiserror::Error;

/// Main error type for textclean operations
#[derive(Error, Debug)]
pub enum CleanError {
    /// Invalid input: wrong cell representation, missing column, malformed dataset
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid argument: out-of-enum values, bad caller-supplied patterns
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal consistency check failed
    #[error("Consistency check failed: {0}")]
    Consistency(String),

    /// Rule-table errors: missing table, malformed line, wrong table shape
    #[error("Resource error: {0}")]
    Resource(String),

    /// Network errors from the resource fetch
    #[error("Network error: {0}")]
    Network(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for CleanError {
    fn from(err: anyhow::Error) -> Self {
        CleanError::Other(err.to_string())
    }
}

impl From<reqwest::Error> for CleanError {
    fn from(err: reqwest::Error) -> Self {
        CleanError::Network(err.to_string())
    }
}

/// Result type alias for textclean operations
pub type Result<T> = std::result::Result<T, CleanError>;
