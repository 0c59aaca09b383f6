//! Error types for Esscher option valuation
//!
//! The pricing core itself signals invalid domains with NaN (see
//! `pricing::black`); these typed errors are for the surrounding layers,
//! such as the implied-tilt solver.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EsscherError {
    #[error("Pricing error: {0}")]
    Pricing(String),

    #[error("Numerical error: {0}")]
    Numerical(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type EsscherResult<T> = Result<T, EsscherError>;

impl EsscherError {
    pub fn pricing(msg: impl Into<String>) -> Self {
        Self::Pricing(msg.into())
    }

    pub fn numerical(msg: impl Into<String>) -> Self {
        Self::Numerical(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
