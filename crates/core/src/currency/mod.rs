//! Fixed-table currency conversion.

pub mod conversion;
pub mod rates;
pub mod service;

#[cfg(test)]
mod props;

pub use conversion::{ConversionRequest, ConversionResult, convert, cross_rate, round_to_cents};
pub use rates::RateTable;
pub use service::ExchangeRateService;
