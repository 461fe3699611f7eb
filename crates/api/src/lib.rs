//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes
//! - Error-to-response mapping
//! - Request tracing and CORS middleware

pub mod error;
pub mod routes;

use axum::Router;
use forex_core::currency::ExchangeRateService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Read-only conversion service over the fixed rate table.
    pub exchange: Arc<ExchangeRateService>,
}

impl AppState {
    /// Creates state around the given service.
    #[must_use]
    pub fn new(exchange: ExchangeRateService) -> Self {
        Self {
            exchange: Arc::new(exchange),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
