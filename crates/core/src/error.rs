//! Error types for step counting
//!
//! Every failure is raised before or during a single computation and is
//! never transient: retrying with the same input fails the same way.

use thiserror::Error;

/// Errors produced by the step counter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Starting value violates the `value >= 1` precondition
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The configured step limit was reached before the sequence hit 1
    #[error("step limit exceeded: {value} did not reach 1 within {limit} steps")]
    StepLimitExceeded {
        /// Starting value of the sequence
        value: i64,
        /// Configured maximum number of transitions
        limit: u64,
    },

    /// A `3n+1` transition left the working integer range
    #[error("overflow: {0}")]
    Overflow(String),
}

/// Result type for step counting
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Invalid argument for a non-positive starting value
    pub(crate) fn non_positive(value: i64) -> Self {
        Error::InvalidArgument(format!("input must be greater than 0, got {}", value))
    }

    /// Check if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Check if this is a step-limit error
    pub fn is_step_limit_exceeded(&self) -> bool {
        matches!(self, Error::StepLimitExceeded { .. })
    }
}
