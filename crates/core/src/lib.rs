//! Core conversion logic for Forex.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! The rate table and the conversion function live here; the HTTP layer
//! parses requests into typed values and calls in.
//!
//! # Modules
//!
//! - `currency` - Rate table, cross rates, and conversion rounding

pub mod currency;
