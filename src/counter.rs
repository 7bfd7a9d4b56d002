//! Facade over the core step counter.
//!
//! Same semantics as `collatz_core`, with errors converted to the public
//! [`Error`](crate::Error) type.

use crate::error::Result;
use collatz_core::{CollatzSequence, CounterOptions};

/// Counts Collatz transitions, optionally capped by a step limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCounter {
    inner: collatz_core::StepCounter,
}

impl StepCounter {
    /// Create a counter with the given options.
    pub fn new(options: CounterOptions) -> Self {
        StepCounter {
            inner: collatz_core::StepCounter::new(options),
        }
    }

    /// Options this counter was built with.
    pub fn options(&self) -> &CounterOptions {
        self.inner.options()
    }

    /// Number of transitions for `value` to reach 1.
    pub fn count(&self, value: i64) -> Result<u64> {
        Ok(self.inner.count(value)?)
    }
}

/// Lazily iterate the values produced from `value` up to and including 1.
pub fn sequence(value: i64) -> Result<CollatzSequence> {
    Ok(CollatzSequence::new(value)?)
}
