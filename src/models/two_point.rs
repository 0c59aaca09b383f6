//! Symmetric two-point model
//!
//! The smallest driver satisfying the mean-zero, unit-variance convention:
//! `X = +1` or `X = -1` with equal probability. Everything is closed-form:
//!
//! - `kappa(s) = log cosh(s)`
//! - tilting reweights the two atoms: `P_s(X = -1) = e^-s / (e^s + e^-s)`
//!
//! Useful as a second, structurally different model for exercising the
//! polymorphic pricing formulas, and as the fully generic one: it prices at
//! any `Float` precision.

use num_traits::Float;

use crate::models::TiltModel;

/// Two-atom pricing driver on {-1, +1}.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPointModel;

impl<T: Float> TiltModel<T> for TwoPointModel {
    fn cgf(&self, s: T) -> T {
        s.cosh().ln()
    }

    fn cdf(&self, x: T, s: T) -> T {
        // Comparisons on NaN would silently pick the middle branch
        if x.is_nan() || s.is_nan() {
            return T::nan();
        }

        let one = T::one();
        if x <= -one {
            T::zero()
        } else if x <= one {
            // P_s(X < x) = P_s(X = -1) for -1 < x <= +1 (strict inequality)
            (-s).exp() / (s.exp() + (-s).exp())
        } else {
            one
        }
    }
}
