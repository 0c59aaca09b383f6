//! Standard-normal tilting model
//!
//! For `X ~ N(0, 1)` the Esscher machinery is fully closed-form:
//!
//! - `kappa(s) = s^2 / 2`, finite for all real s
//! - tilting by s shifts the mean: `P_s(X < x) = Phi(x - s)`
//!
//! Substituted into `pricing::black` this reproduces the classical Black
//! forward put/call formulas, with the moneyness coinciding with `-d2`.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::models::TiltModel;

/// Standard-normal pricing driver.
#[derive(Debug, Clone, Copy)]
pub struct NormalModel {
    normal: Normal,
}

impl NormalModel {
    pub fn new() -> Self {
        Self {
            // Unit normal parameters are always valid
            normal: Normal::new(0.0, 1.0).unwrap(),
        }
    }
}

impl Default for NormalModel {
    fn default() -> Self {
        Self::new()
    }
}

impl TiltModel for NormalModel {
    fn cgf(&self, s: f64) -> f64 {
        0.5 * s * s
    }

    fn cdf(&self, x: f64, s: f64) -> f64 {
        self.normal.cdf(x - s)
    }
}
