//! Unified error types for Collatz.
//!
//! This module presents the public error type and converts from the
//! internal core errors.

use thiserror::Error;

/// All Collatz errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Starting value is not a positive integer
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configured step limit reached before the sequence hit 1
    #[error("step limit exceeded: {value} did not reach 1 within {limit} steps")]
    StepLimitExceeded {
        /// Starting value
        value: i64,
        /// Configured limit
        limit: u64,
    },

    /// Intermediate value left the working integer range
    #[error("overflow: {0}")]
    Overflow(String),
}

/// Result type for Collatz operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is retryable.
    ///
    /// Always false: the computation is pure, so the same input fails the
    /// same way every time.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Check if this is an invalid-argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Check if this is a step-limit error.
    pub fn is_step_limit_exceeded(&self) -> bool {
        matches!(self, Error::StepLimitExceeded { .. })
    }
}

// Convert from internal core errors
impl From<collatz_core::Error> for Error {
    fn from(e: collatz_core::Error) -> Self {
        use collatz_core::Error as CoreError;
        match e {
            CoreError::InvalidArgument(msg) => Error::InvalidArgument(msg),
            CoreError::StepLimitExceeded { value, limit } => {
                Error::StepLimitExceeded { value, limit }
            }
            CoreError::Overflow(msg) => Error::Overflow(msg),
        }
    }
}
