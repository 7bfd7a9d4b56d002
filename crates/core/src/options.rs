//! Step counter configuration
//!
//! The only knob is an optional cap on the number of transitions. Without a
//! cap, a counterexample to the conjecture would make the counter run
//! forever; with one, exceeding it is reported as
//! [`Error::StepLimitExceeded`](crate::Error::StepLimitExceeded).

use serde::{Deserialize, Serialize};

/// Options for [`StepCounter`](crate::StepCounter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterOptions {
    /// Maximum number of transitions before giving up (`None` = unbounded)
    #[serde(default)]
    pub max_steps: Option<u64>,
}

impl CounterOptions {
    /// No step limit
    pub fn unbounded() -> Self {
        CounterOptions { max_steps: None }
    }

    /// Fail once more than `max_steps` transitions have been applied
    pub fn bounded(max_steps: u64) -> Self {
        CounterOptions {
            max_steps: Some(max_steps),
        }
    }
}
