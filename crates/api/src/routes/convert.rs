//! Currency conversion routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use forex_core::currency::{ConversionRequest, ConversionResult};
use forex_shared::{AppResult, Currency};
use serde::Deserialize;
use tracing::debug;

use crate::{AppState, error::ApiError};

/// Creates the conversion routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/convert", post(convert))
}

/// Request body for a conversion.
///
/// Currency codes arrive as plain strings so that an unsupported code is
/// reported as such rather than as a generic body error.
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    /// Amount to convert.
    pub amount: f64,
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
}

impl ConvertRequest {
    /// Parses both codes into a typed request.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if either code is unsupported.
    pub fn parse(&self) -> AppResult<ConversionRequest> {
        let from: Currency = self.from.parse()?;
        let to: Currency = self.to.parse()?;
        Ok(ConversionRequest::new(self.amount, from, to))
    }
}

/// POST `/convert` - Convert an amount between two currencies.
async fn convert(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Json<ConversionResult>, ApiError> {
    let Json(payload) = payload?;
    let request = payload.parse()?;

    let result = state.exchange.convert(&request);
    debug!(
        amount = result.amount,
        from = %result.from,
        to = %result.to,
        result = result.result,
        rate = result.rate,
        "Converted amount"
    );

    Ok(Json(result))
}
