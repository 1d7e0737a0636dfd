//! Property-based tests for valuation summation.
//!
//! These tests verify that the sum is exact for arbitrary record sets,
//! including magnitudes well past fixed-width integer limits, and that
//! malformed values are never silently skipped.

use blocksquare_tvl::{sum_valuations, ErrorKind, PropertyRecord};
use num_bigint::BigUint;
use num_traits::Zero;
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

fn to_records(valuations: &[String]) -> Vec<PropertyRecord> {
    valuations
        .iter()
        .enumerate()
        .map(|(i, v)| PropertyRecord::new(format!("1-0x{:040x}", i), v.clone()))
        .collect()
}

/// Generates a list of valuations that fit in u64.
fn arb_u64_valuations() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(any::<u64>(), 0..64)
}

/// Generates valuations in wei: a u128 scaled by 10^18, far beyond 2^128.
fn arb_wei_valuations() -> impl Strategy<Value = Vec<(u128, String)>> {
    prop::collection::vec(
        any::<u128>().prop_map(|v| (v, format!("{}{}", v, "0".repeat(18)))),
        0..32,
    )
}

/// Generates a digit string with one non-digit character spliced in.
fn arb_malformed_valuation() -> impl Strategy<Value = String> {
    (
        "[0-9]{0,30}",
        prop::sample::select(vec!['-', '+', ' ', '.', '_', 'e', 'x', 'a']),
        "[0-9]{0,30}",
    )
        .prop_map(|(head, bad, tail)| format!("{}{}{}", head, bad, tail))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn sum_matches_u128_sum_of_u64_values(values in arb_u64_valuations()) {
        let expected: u128 = values.iter().map(|v| *v as u128).sum();
        let strings: Vec<String> = values.iter().map(u64::to_string).collect();

        let total = sum_valuations(&to_records(&strings)).unwrap();
        prop_assert_eq!(total.to_string(), expected.to_string());
    }

    #[test]
    fn sum_is_exact_beyond_u128(values in arb_wei_valuations()) {
        let scale = BigUint::from(10u32).pow(18);
        let expected = values
            .iter()
            .fold(BigUint::zero(), |acc, (v, _)| acc + BigUint::from(*v) * &scale);
        let strings: Vec<String> = values.into_iter().map(|(_, s)| s).collect();

        let total = sum_valuations(&to_records(&strings)).unwrap();
        prop_assert_eq!(total, expected);
    }

    #[test]
    fn sum_splits_over_concatenation(
        left in arb_u64_valuations(),
        right in arb_u64_valuations(),
    ) {
        let left: Vec<String> = left.iter().map(u64::to_string).collect();
        let right: Vec<String> = right.iter().map(u64::to_string).collect();
        let both: Vec<String> = left.iter().chain(right.iter()).cloned().collect();

        let whole = sum_valuations(&to_records(&both)).unwrap();
        let parts = sum_valuations(&to_records(&left)).unwrap()
            + sum_valuations(&to_records(&right)).unwrap();
        prop_assert_eq!(whole, parts);
    }

    #[test]
    fn one_malformed_value_fails_the_sum(
        mut values in arb_u64_valuations(),
        bad in arb_malformed_valuation(),
        position in any::<prop::sample::Index>(),
    ) {
        let mut strings: Vec<String> = values.drain(..).map(|v| v.to_string()).collect();
        let at = position.index(strings.len() + 1);
        strings.insert(at, bad);

        let err = sum_valuations(&to_records(&strings)).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::ValueParse);
    }
}

#[test]
fn empty_sum_is_zero_string() {
    let total = sum_valuations(&[]).unwrap();
    assert_eq!(total.to_string(), "0");
}
