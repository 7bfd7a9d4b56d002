//! Lazy iteration over a Collatz sequence
//!
//! [`CollatzSequence`] yields the value produced by each transition and
//! stops after the transition that produces 1. The starting value is not
//! yielded, so the number of items equals the step count.

use crate::error::{Error, Result};
use crate::steps::next_value;
use std::iter::FusedIterator;
use tracing::warn;

/// Iterator over the values of a Collatz sequence
#[derive(Debug, Clone)]
pub struct CollatzSequence {
    start: i64,
    current: i128,
    done: bool,
    overflowed: bool,
}

impl CollatzSequence {
    /// Start a sequence at `value`
    ///
    /// Fails with [`Error::InvalidArgument`] if `value <= 0`.
    pub fn new(value: i64) -> Result<Self> {
        if value <= 0 {
            return Err(Error::non_positive(value));
        }
        Ok(CollatzSequence {
            start: value,
            current: i128::from(value),
            done: false,
            overflowed: false,
        })
    }

    /// Starting value of the sequence
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Whether iteration stopped because a transition overflowed
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }
}

impl Iterator for CollatzSequence {
    type Item = i128;

    fn next(&mut self) -> Option<i128> {
        if self.done {
            return None;
        }
        match next_value(self.current) {
            Ok(next) => {
                self.current = next;
                self.done = next == 1;
                Some(next)
            }
            Err(_) => {
                warn!(start = self.start, "collatz sequence overflowed");
                self.done = true;
                self.overflowed = true;
                None
            }
        }
    }
}

impl FusedIterator for CollatzSequence {}
