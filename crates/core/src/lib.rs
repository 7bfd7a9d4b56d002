//! Core step counting for Collatz sequences
//!
//! This crate defines the algorithm behind the `collatz` facade:
//! - `steps`: the transition rule and the step counter
//! - `sequence`: lazy iteration over the values of a sequence
//! - `options`: step counter configuration
//! - `error`: error types

#![warn(missing_docs)]

pub mod error;
pub mod options;
pub mod sequence;
pub mod steps;

pub use error::{Error, Result};
pub use options::CounterOptions;
pub use sequence::CollatzSequence;
pub use steps::{count_steps, next_value, StepCounter};
