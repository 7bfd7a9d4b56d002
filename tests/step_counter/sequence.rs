//! Sequence iteration through the public API.

use collatz::prelude::*;

#[test]
fn test_sequence_values() {
    let values: Vec<i128> = sequence(7).unwrap().collect();
    assert_eq!(
        values,
        vec![22, 11, 34, 17, 52, 26, 13, 40, 20, 10, 5, 16, 8, 4, 2, 1]
    );
}

#[test]
fn test_sequence_length_is_step_count() {
    for value in 1..=1000 {
        let len = sequence(value).unwrap().count() as u64;
        assert_eq!(len, count_steps(value).unwrap(), "{}", value);
    }
}

#[test]
fn test_sequence_ends_at_one() {
    let mut seq = sequence(9_780_657_631).unwrap();
    assert_eq!(seq.by_ref().last(), Some(1));
    assert!(!seq.overflowed());
}

#[test]
fn test_sequence_rejects_non_positive() {
    assert!(matches!(sequence(0), Err(Error::InvalidArgument(_))));
}
