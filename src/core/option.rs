//! Option contract definitions
//!
//! Represents vanilla European options quoted against a forward. The tilt
//! parameter consumed by the pricing formulas is total volatility over the
//! option horizon; `OptionContract::tilt` maps an annualized vol to it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given forward
    pub fn intrinsic(&self, forward: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (forward - strike).max(0.0),
            OptionType::Put => (strike - forward).max(0.0),
        }
    }
}

/// European option contract specification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionContract {
    /// Underlying symbol (e.g., "NQ", "CL")
    pub underlying: String,
    /// Strike price
    pub strike: f64,
    /// Expiration date
    pub expiry: NaiveDate,
    /// Option type (Call/Put)
    pub option_type: OptionType,
}

impl OptionContract {
    /// Create a new European option
    pub fn european(
        underlying: impl Into<String>,
        strike: f64,
        expiry: NaiveDate,
        option_type: OptionType,
    ) -> Self {
        Self {
            underlying: underlying.into(),
            strike,
            expiry,
            option_type,
        }
    }

    /// Time to expiry in years from given date
    pub fn time_to_expiry(&self, from: NaiveDate) -> f64 {
        let days = (self.expiry - from).num_days();
        days as f64 / 365.25
    }

    /// Esscher tilt for an annualized volatility: s = vol * sqrt(T)
    pub fn tilt(&self, vol: f64, from: NaiveDate) -> f64 {
        vol * self.time_to_expiry(from).sqrt()
    }
}
