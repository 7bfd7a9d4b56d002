//! # Collatz
//!
//! Step counting for Collatz sequences.
//!
//! Starting from a positive integer, the Collatz rule halves even values and
//! maps odd values to `3n+1`. [`count_steps`] reports how many transitions
//! it takes for the sequence to produce 1.
//!
//! ## Quick Start
//!
//! ```
//! use collatz::prelude::*;
//!
//! assert_eq!(count_steps(6)?, 8);
//!
//! // 1 -> 4 -> 2 -> 1: starting at 1 still counts the round trip
//! assert_eq!(count_steps(1)?, 3);
//!
//! // Cap the work for untrusted input
//! let counter = StepCounter::new(CounterOptions::bounded(100));
//! assert!(counter.count(27).is_err());
//! # Ok::<(), collatz::Error>(())
//! ```
//!
//! ## Errors
//!
//! - [`Error::InvalidArgument`] - starting value is not positive
//! - [`Error::StepLimitExceeded`] - configured step limit reached
//! - [`Error::Overflow`] - an intermediate value left the working range

#![warn(missing_docs)]

mod counter;
mod error;

pub mod prelude;

pub use counter::{sequence, StepCounter};
pub use error::{Error, Result};

pub use collatz_core::{CollatzSequence, CounterOptions};

/// Number of transitions for `value` to reach 1
///
/// Counts every transition up to and including the one that produces 1.
/// The starting value never counts as reached, so `count_steps(1) == 3`.
///
/// Fails with [`Error::InvalidArgument`] if `value <= 0`.
pub fn count_steps(value: i64) -> Result<u64> {
    Ok(collatz_core::count_steps(value)?)
}
