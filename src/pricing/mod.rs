//! Valuation formulas
//!
//! Black-style forward valuation written against the `TiltModel` capability
//! only, so any driver distribution can be substituted.

pub mod black;

pub use black::*;
