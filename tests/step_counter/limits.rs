//! Step limit behavior through the public API.

use super::init_tracing;
use collatz::prelude::*;

#[test]
fn test_default_counter_matches_count_steps() {
    let counter = StepCounter::default();
    assert_eq!(counter.options().max_steps, None);
    for value in 1..=100 {
        assert_eq!(counter.count(value), count_steps(value));
    }
}

#[test]
fn test_limit_exceeded_reports_value_and_limit() {
    init_tracing();
    let counter = StepCounter::new(CounterOptions::bounded(100));
    assert_eq!(
        counter.count(27),
        Err(Error::StepLimitExceeded { value: 27, limit: 100 })
    );
    assert_eq!(counter.count(9), Ok(19));
}

#[test]
fn test_limit_is_inclusive() {
    let counter = StepCounter::new(CounterOptions::bounded(1132));
    assert_eq!(counter.count(9_780_657_631), Ok(1132));

    let counter = StepCounter::new(CounterOptions::bounded(1131));
    assert!(counter.count(9_780_657_631).unwrap_err().is_step_limit_exceeded());
}

#[test]
fn test_invalid_argument_wins_over_limit() {
    let counter = StepCounter::new(CounterOptions::bounded(0));
    assert!(counter.count(-5).unwrap_err().is_invalid_argument());
}

#[test]
fn test_options_from_config() {
    let opts: CounterOptions = serde_json::from_str(r#"{"max_steps": 3}"#).unwrap();
    let counter = StepCounter::new(opts);
    assert_eq!(counter.count(1), Ok(3));
    assert!(counter.count(3).is_err());
}

mod properties {
    use collatz::prelude::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_limit_at_exact_count_succeeds(value in 1i64..10_000_000) {
            let steps = count_steps(value).unwrap();
            prop_assert!(steps >= 1);
            let exact = StepCounter::new(CounterOptions::bounded(steps));
            prop_assert_eq!(exact.count(value), Ok(steps));
            let short = StepCounter::new(CounterOptions::bounded(steps - 1));
            prop_assert_eq!(
                short.count(value),
                Err(Error::StepLimitExceeded { value, limit: steps - 1 })
            );
        }
    }
}
