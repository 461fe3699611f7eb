//! Shared types, errors, and configuration for Forex.
//!
//! This crate provides common types used across all other crates:
//! - The closed set of supported currencies
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LogConfig, ServerConfig};
pub use error::{AppError, AppResult};
pub use types::{Currency, ParseCurrencyError};
