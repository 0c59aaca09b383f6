//! # Esscher Options - Generalized Option Valuation
//!
//! An options pricing library built on the Esscher-tilting representation of
//! a forward price:
//!
//! ```text
//! F = f exp(s X - kappa(s)),    kappa(s) = log E[exp(s X)]
//! ```
//!
//! where `X` is a mean-zero, unit-variance driver, `f` is the forward, and
//! `s` is the tilt parameter (conventionally total volatility over the
//! option horizon). With `E[X] = 0` and `Var(X) = 1` this gives `E[F] = f`
//! and `Var(log F) = s^2`.
//!
//! ## Overview
//!
//! The valuation formulas never look inside the distribution of `X`. They
//! only use two operations:
//!
//! - **CGF**: `kappa(s) = log E[exp(s X)]`
//! - **Tilted CDF**: `P_s(X < x) = E[1(X < x) exp(s X - kappa(s))]`
//!
//! Any distribution supplying those two operations (the [`TiltModel`]
//! capability) plugs into the same moneyness/put/call formulas. The
//! standard normal driver recovers the Black forward formulas exactly.
//!
//! ## Key Components
//!
//! - **TiltModel**: the two-operation capability trait for pricing drivers
//! - **Normal model**: standard-normal tilting (Black-Scholes baseline)
//! - **Two-point model**: a minimal discrete driver, generic over precision
//! - **Black pricing**: moneyness, put, call, and an implied-tilt solver
//!
//! ## Usage
//!
//! ```rust
//! use esscher_options::prelude::*;
//!
//! let model = NormalModel::new();
//!
//! // ATM forward put, 20% total volatility
//! let put = black_put(100.0, 0.2, 100.0, &model);
//! assert!((put - 7.9656).abs() < 1e-3);
//!
//! // Calls come from put-call parity: call = put + f - k
//! let call = black_call(100.0, 0.2, 100.0, &model);
//! assert!((call - put).abs() < 1e-10);
//! ```
//!
//! ## Error Signaling
//!
//! The pricing functions are total: out-of-domain inputs (`f <= 0`,
//! `s <= 0`, `k <= 0`) return NaN rather than raising, so batch evaluation
//! over a pricing grid never branches on an error path. Typed errors
//! ([`EsscherError`]) appear only at the edges, e.g. the implied-tilt
//! solver.
//!
//! ## What This Library Does NOT Do
//!
//! - Build yield or forward curves
//! - Compute Greeks or calibrate to market surfaces
//! - Price American or path-dependent payoffs
//!
//! [`TiltModel`]: crate::models::TiltModel
//! [`EsscherError`]: crate::core::EsscherError

pub mod core;
pub mod models;
pub mod pricing;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{EsscherError, EsscherResult, OptionContract, OptionType};

    // Models
    pub use crate::models::{NormalModel, TiltModel, TwoPointModel};

    // Black pricing
    pub use crate::pricing::black::{
        call as black_call, implied_tilt, moneyness, price as black_price, put as black_put,
    };
}
