//! Property-based tests for currency conversion.
//!
//! - Same-currency conversion is the rounded identity
//! - Cross rates are the quotient of table entries
//! - Reciprocal rates multiply to approximately one

#![allow(clippy::float_arithmetic, clippy::float_cmp)]

use forex_shared::Currency;
use proptest::prelude::*;

use super::conversion::{ConversionRequest, convert, round_to_cents};
use super::rates::RateTable;

/// Strategy to pick any supported currency.
fn any_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// Strategy to pick two distinct currencies.
fn distinct_pair() -> impl Strategy<Value = (Currency, Currency)> {
    (any_currency(), any_currency()).prop_filter("currencies must differ", |(a, b)| a != b)
}

/// Strategy to generate amounts of either sign, including zero.
fn any_amount() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), -1_000_000_000.0..1_000_000_000.0f64]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converting a currency to itself keeps the amount and a rate of 1.
    #[test]
    fn prop_same_currency_is_identity(
        amount in any_amount(),
        currency in any_currency(),
    ) {
        let result = convert(
            &RateTable::standard(),
            &ConversionRequest::new(amount, currency, currency),
        );
        prop_assert_eq!(result.rate, 1.0);
        prop_assert_eq!(result.result, round_to_cents(amount));
        prop_assert_eq!(result.amount, amount);
    }

    /// The effective rate is exactly `rate_to_base(to) / rate_to_base(from)`.
    #[test]
    fn prop_rate_is_quotient_of_table_entries(
        amount in any_amount(),
        (from, to) in distinct_pair(),
    ) {
        let table = RateTable::standard();
        let result = convert(&table, &ConversionRequest::new(amount, from, to));
        prop_assert_eq!(result.rate, table.rate_to_base(to) / table.rate_to_base(from));
    }

    /// The result never drifts more than half a cent from the exact product.
    #[test]
    fn prop_result_within_half_cent(
        amount in any_amount(),
        from in any_currency(),
        to in any_currency(),
    ) {
        let result = convert(&RateTable::standard(), &ConversionRequest::new(amount, from, to));
        let exact = amount * result.rate;
        let tolerance = 0.005 + exact.abs() * 1e-12;
        prop_assert!(
            (result.result - exact).abs() <= tolerance,
            "{} should be within half a cent of {}",
            result.result,
            exact
        );
    }

    /// Reciprocal rates are approximately, not exactly, inverse.
    #[test]
    fn prop_round_trip_rate_near_one((a, b) in distinct_pair()) {
        let table = RateTable::standard();
        let forward = convert(&table, &ConversionRequest::new(1.0, a, b)).rate;
        let backward = convert(&table, &ConversionRequest::new(1.0, b, a)).rate;
        prop_assert!((forward * backward - 1.0).abs() < 1e-4);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Specific example: every currency converts to itself at rate 1.
    #[test]
    fn test_identity_for_every_currency() {
        let table = RateTable::standard();
        for currency in Currency::ALL {
            for amount in [-100.0, 0.0, 0.004, 123.456] {
                let result = convert(&table, &ConversionRequest::new(amount, currency, currency));
                assert_eq!(result.rate, 1.0);
                assert_eq!(result.result, round_to_cents(amount));
            }
        }
    }
}
