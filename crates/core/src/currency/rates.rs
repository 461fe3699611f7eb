//! Fixed exchange rate table.
//!
//! Every entry is "units of this currency per 1 unit of the base currency
//! (USD)". The table is built once and never mutated.

use forex_shared::Currency;

/// Units of each currency per 1 USD, indexed by [`Currency::ordinal`].
const RATES_TO_USD: [f64; Currency::COUNT] = [
    1.0,    // USD
    0.92,   // EUR
    0.79,   // GBP
    149.50, // JPY
    1.35,   // CAD
    1.53,   // AUD
    0.88,   // CHF
    7.24,   // CNY
    83.12,  // INR
    17.15,  // MXN
];

/// Immutable mapping from currency to its value in base-currency units.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: [f64; Currency::COUNT],
}

impl RateTable {
    /// The process-wide standard table.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            rates: RATES_TO_USD,
        }
    }

    /// Units of `currency` per 1 unit of the base currency.
    #[must_use]
    pub const fn rate_to_base(&self, currency: Currency) -> f64 {
        self.rates[currency.ordinal()]
    }

    /// Iterates `(currency, rate_to_base)` pairs in ordinal order.
    pub fn entries(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        Currency::ALL
            .into_iter()
            .map(|currency| (currency, self.rate_to_base(currency)))
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}
