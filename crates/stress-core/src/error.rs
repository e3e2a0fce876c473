//! Error types for stress forecasting
//!
//! Provides a unified error type for all stress-forecast crates.

use thiserror::Error;

/// Core error type for stress forecasting operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Non-positive forecast horizon
    #[error("Invalid horizon: {horizon} (must be at least 1)")]
    InvalidHorizon { horizon: i64 },

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Input data could not be coerced to a numeric series
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The remote prediction collaborator could not be used
    ///
    /// Always recoverable: callers fall back to the local pipeline.
    #[error("Remote unavailable: {0}")]
    RemoteUnavailable(String),

    /// IO error (for model artifact and file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a non-positive horizon
    pub fn invalid_horizon(horizon: i64) -> Self {
        Self::InvalidHorizon { horizon }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::MalformedInput(format!("{context} contains NaN or infinite values"))
    }

    /// True when the error is recoverable by falling back to the
    /// local pipeline rather than surfacing to the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::RemoteUnavailable(_))
    }
}
