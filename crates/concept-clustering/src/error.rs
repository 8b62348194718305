//! Clustering error types.

use thiserror::Error;

/// Errors that can occur during concept clustering.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// Caller contract violation (count mismatch, empty required field)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unsupported method or violated method precondition
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
