//! Unit tests for option coalescing.
//!
//! Covers the first-wins contract, the both-absent error, move semantics
//! for non-`Copy` values, and a generated check against a reference model.

use proptest::{
    prelude::any,
    prop_assert_eq,
    test_runner::{Config as ProptestConfig, RngAlgorithm, TestRng, TestRunner},
};
use rstest::rstest;

use super::*;

#[rstest]
#[case::first_present(Some(7), None, Ok(7))]
#[case::second_present(None, Some(9), Ok(9))]
#[case::both_present_first_wins(Some(7), Some(9), Ok(7))]
#[case::both_absent(None, None, Err(CoalesceError))]
fn coalesce_returns_the_first_present_value(
    #[case] first: Option<i32>,
    #[case] second: Option<i32>,
    #[case] expected: Result<i32, CoalesceError>,
) {
    assert_eq!(coalesce(first, second), expected);
}

#[test]
fn coalesce_moves_non_copy_values() {
    let fallback = String::from("fallback");
    let value = coalesce(None, Some(fallback)).expect("second candidate should be returned");
    assert_eq!(value, "fallback");
}

#[test]
fn error_message_names_the_condition() {
    assert_eq!(
        CoalesceError.to_string(),
        "no value to coalesce: both candidates were None"
    );
}

fn deterministic_runner(cases: u32) -> TestRunner {
    let config = ProptestConfig {
        cases,
        ..ProptestConfig::default()
    };
    let rng = TestRng::deterministic_rng(RngAlgorithm::ChaCha);
    TestRunner::new_with_rng(config, rng)
}

#[test]
fn generated_candidates_follow_the_first_wins_contract() {
    let mut runner = deterministic_runner(256);
    runner
        .run(
            &(any::<Option<i32>>(), any::<Option<i32>>()),
            |(first, second)| {
                let expected = match (first, second) {
                    (Some(value), _) | (None, Some(value)) => Ok(value),
                    (None, None) => Err(CoalesceError),
                };
                prop_assert_eq!(coalesce(first, second), expected);
                Ok(())
            },
        )
        .expect("generated candidates should follow the first-wins contract");
}
