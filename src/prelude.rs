//! Convenient imports for Collatz.
//!
//! ```
//! use collatz::prelude::*;
//!
//! assert_eq!(count_steps(7)?, 16);
//! # Ok::<(), collatz::Error>(())
//! ```

// Entry points
pub use crate::{count_steps, sequence};
pub use crate::{CollatzSequence, StepCounter};

// Configuration
pub use crate::CounterOptions;

// Error handling
pub use crate::error::{Error, Result};
