//! Collatz step counting
//!
//! ## Counting rule
//!
//! The count is the number of transitions applied until a transition
//! produces 1. The starting value is never treated as already "reached",
//! so a sequence starting at 1 goes round the trivial cycle:
//!
//! | Start | Sequence | Steps |
//! |-------|----------|-------|
//! | 1 | 1 → 4 → 2 → 1 | 3 |
//! | 2 | 2 → 1 | 1 |
//! | 3 | 3 → 10 → 5 → 16 → 8 → 4 → 2 → 1 | 7 |
//!
//! Inputs are `i64`. The working value is widened to `i128` and every
//! `3n+1` is checked, so intermediate values never wrap.

use crate::error::{Error, Result};
use crate::options::CounterOptions;
use tracing::{debug, warn};

/// Apply one Collatz transition
///
/// Halves even values and maps odd values to `3n+1`. Fails with
/// [`Error::Overflow`] if `3n+1` does not fit in an `i128`.
pub fn next_value(current: i128) -> Result<i128> {
    if current % 2 == 0 {
        return Ok(current / 2);
    }
    current
        .checked_mul(3)
        .and_then(|tripled| tripled.checked_add(1))
        .ok_or_else(|| Error::Overflow(format!("3n+1 overflows for n = {}", current)))
}

/// Counts Collatz transitions under a set of [`CounterOptions`]
///
/// The counter holds no state between calls; it only carries its options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCounter {
    options: CounterOptions,
}

impl StepCounter {
    /// Create a counter with the given options
    pub fn new(options: CounterOptions) -> Self {
        StepCounter { options }
    }

    /// Options this counter was built with
    pub fn options(&self) -> &CounterOptions {
        &self.options
    }

    /// Number of transitions for `value` to reach 1
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `value <= 0`, before any iteration
    /// - [`Error::StepLimitExceeded`] if a step limit is configured and
    ///   the sequence has not reached 1 within it
    /// - [`Error::Overflow`] if an intermediate value leaves the `i128` range
    pub fn count(&self, value: i64) -> Result<u64> {
        if value <= 0 {
            return Err(Error::non_positive(value));
        }

        let mut current = i128::from(value);
        let mut steps: u64 = 0;
        loop {
            if let Some(limit) = self.options.max_steps.filter(|&limit| steps >= limit) {
                warn!(value, limit, "step limit reached before sequence hit 1");
                return Err(Error::StepLimitExceeded { value, limit });
            }
            current = next_value(current).map_err(|e| {
                warn!(value, steps, "collatz sequence overflowed");
                e
            })?;
            steps += 1;
            if current == 1 {
                break;
            }
        }

        debug!(value, steps, "collatz step count computed");
        Ok(steps)
    }
}

/// Number of transitions for `value` to reach 1, with no step limit
///
/// ```
/// use collatz_core::count_steps;
///
/// assert_eq!(count_steps(1), Ok(3));
/// assert_eq!(count_steps(2), Ok(1));
/// assert!(count_steps(0).is_err());
/// ```
///
/// Does not return for a starting value whose sequence never reaches 1.
/// Use [`StepCounter`] with [`CounterOptions::bounded`] to cap the work.
pub fn count_steps(value: i64) -> Result<u64> {
    StepCounter::default().count(value)
}
