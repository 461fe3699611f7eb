//! Exchange rate service for conversion operations.
//!
//! This module provides the service interface the HTTP layer holds in its
//! state. It owns the rate table and exposes the conversion function over
//! it.

use forex_shared::Currency;

use super::conversion::{self, ConversionRequest, ConversionResult};
use super::rates::RateTable;

/// Converts amounts against a fixed rate table.
///
/// The service holds no mutable state, so a single instance can be shared
/// across any number of request handlers.
#[derive(Debug, Clone, Default)]
pub struct ExchangeRateService {
    rates: RateTable,
}

impl ExchangeRateService {
    /// Creates a service over the given rate table.
    #[must_use]
    pub const fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// The underlying rate table.
    #[must_use]
    pub const fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Effective rate for converting `from` into `to`.
    #[must_use]
    pub fn rate(&self, from: Currency, to: Currency) -> f64 {
        conversion::cross_rate(&self.rates, from, to)
    }

    /// Convert an amount between currencies.
    ///
    /// # Example
    ///
    /// ```
    /// use forex_core::currency::{ConversionRequest, ExchangeRateService};
    /// use forex_shared::Currency;
    ///
    /// let service = ExchangeRateService::default();
    /// let result = service.convert(&ConversionRequest::new(100.0, Currency::Usd, Currency::Eur));
    /// assert_eq!(result.to, "EUR");
    /// assert!((result.result - 92.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn convert(&self, request: &ConversionRequest) -> ConversionResult {
        conversion::convert(&self.rates, request)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_standard_table() {
        let service = ExchangeRateService::default();
        assert_eq!(service.rates(), &RateTable::standard());
    }

    #[test]
    fn test_rate_matches_conversion() {
        let service = ExchangeRateService::new(RateTable::standard());
        let request = ConversionRequest::new(10.0, Currency::Cad, Currency::Aud);
        assert_eq!(service.convert(&request).rate, service.rate(Currency::Cad, Currency::Aud));
    }

    #[test]
    fn test_service_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ExchangeRateService>();
    }
}
