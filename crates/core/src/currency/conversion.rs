//! Currency conversion logic.
//!
//! Rounding strategy:
//! - The converted amount is rounded to 2 decimal places, half up
//! - The rate is returned exactly as derived from the table

#![allow(clippy::float_arithmetic)]

use forex_shared::Currency;
use serde::{Deserialize, Serialize};

use super::rates::RateTable;

/// A typed conversion request. Any amount is accepted, including zero and
/// negative values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Amount to convert, in units of `from`.
    pub amount: f64,
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
}

impl ConversionRequest {
    /// Creates a new conversion request.
    #[must_use]
    pub const fn new(amount: f64, from: Currency, to: Currency) -> Self {
        Self { amount, from, to }
    }
}

/// Outcome of a conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Original amount, echoed back.
    pub amount: f64,
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// Converted amount rounded to 2 decimal places.
    pub result: f64,
    /// Effective exchange rate (1 `from` = `rate` `to`).
    pub rate: f64,
}

/// Derives the cross rate between two currencies.
///
/// Same-currency pairs return exactly `1.0` without dividing.
#[must_use]
pub fn cross_rate(rates: &RateTable, from: Currency, to: Currency) -> f64 {
    if from == to {
        return 1.0;
    }
    rates.rate_to_base(to) / rates.rate_to_base(from)
}

/// Rounds to 2 decimal places, midpoints towards positive infinity.
///
/// Values too large to scale by 100 have no cent fraction and are returned
/// as is. Negative zero comes back as `0.0`.
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded / 100.0 + 0.0
}

/// Converts `request.amount` from `request.from` to `request.to`.
#[must_use]
pub fn convert(rates: &RateTable, request: &ConversionRequest) -> ConversionResult {
    let rate = cross_rate(rates, request.from, request.to);
    ConversionResult {
        amount: request.amount,
        from: request.from.code().to_string(),
        to: request.to.code().to_string(),
        result: round_to_cents(request.amount * rate),
        rate,
    }
}
