//! Currency listing routes.

use axum::{Json, Router, extract::State, routing::get};
use forex_shared::Currency;
use serde::Serialize;

use crate::AppState;

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/currencies", get(list_currencies))
}

/// Response for a currency.
#[derive(Debug, Serialize)]
pub struct CurrencyResponse {
    /// Currency code (ISO 4217).
    pub code: &'static str,
    /// Currency name.
    pub name: &'static str,
    /// Units of this currency per 1 unit of the base currency.
    pub rate_to_base: f64,
}

/// Response for the currency listing.
#[derive(Debug, Serialize)]
pub struct CurrencyListResponse {
    /// Base currency code.
    pub base: &'static str,
    /// Supported currencies in table order.
    pub currencies: Vec<CurrencyResponse>,
}

/// GET `/currencies` - List all supported currencies with their base rates.
async fn list_currencies(State(state): State<AppState>) -> Json<CurrencyListResponse> {
    let currencies = state
        .exchange
        .rates()
        .entries()
        .map(|(currency, rate_to_base)| CurrencyResponse {
            code: currency.code(),
            name: currency.name(),
            rate_to_base,
        })
        .collect();

    Json(CurrencyListResponse {
        base: Currency::BASE.code(),
        currencies,
    })
}
