//! Core data types for Esscher option valuation
//!
//! Defines fundamental types:
//! - OptionType: Call/Put with payoff helpers
//! - OptionContract: Strike, expiry, type
//! - EsscherError: library error type

pub mod error;
pub mod option;

pub use error::*;
pub use option::*;
