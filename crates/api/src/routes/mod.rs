//! API route definitions.

use axum::{Router, http::Uri};
use forex_shared::AppError;

use crate::{AppState, error::ApiError};

pub mod convert;
pub mod currencies;
pub mod health;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(convert::routes())
        .merge(currencies::routes())
}

/// Fallback handler for unknown paths.
pub async fn not_found(uri: Uri) -> ApiError {
    AppError::NotFound(format!("No route for {}", uri.path())).into()
}
