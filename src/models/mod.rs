//! Pricing driver models
//!
//! Implements:
//! - TiltModel: the cgf/cdf capability every driver supplies
//! - Normal: standard-normal tilting (Black-Scholes baseline)
//! - Two-point: minimal discrete driver, generic over precision

pub mod normal;
pub mod tilt;
pub mod two_point;

pub use normal::*;
pub use tilt::*;
pub use two_point::*;
