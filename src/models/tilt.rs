//! The tilted-distribution capability
//!
//! Every pricing driver is a mean-zero, unit-variance random variable `X`
//! exposed to the valuation formulas through exactly two operations: its
//! cumulant generating function and its Esscher-tilted CDF. The formulas in
//! `pricing::black` are written against this trait only, so swapping the
//! distribution never touches them.

use num_traits::Float;

/// Capability supplied by a concrete pricing driver.
///
/// The scalar `T` is the working precision; `f64` is the default and the
/// only one the `statrs`-backed normal model supports, while fully generic
/// models (e.g. [`TwoPointModel`](crate::models::TwoPointModel)) price at
/// any `Float`.
///
/// # Contract
///
/// Both operations must be pure, deterministic, and total over every float
/// input: out-of-domain or NaN arguments propagate NaN, they never panic.
/// Implementations hold only immutable distributional parameters, so a
/// single instance may be shared across threads freely.
///
/// The semantic invariants are not runtime-checkable by the caller:
///
/// - `cdf(x, 0)` is the plain probability `P(X < x)`
/// - `cdf(x, s)` is the tilted probability
///   `P_s(X < x) = E[1(X < x) exp(s X - kappa(s))]`
///
/// A model violating these produces silently wrong valuations, not a
/// detectable fault.
pub trait TiltModel<T: Float = f64> {
    /// Cumulant generating function: `kappa(s) = log E[exp(s X)]`.
    ///
    /// Must be finite on the tilt domain the distribution supports
    /// (implementations may document a restricted domain).
    fn cgf(&self, s: T) -> T;

    /// Esscher-tilted cumulative distribution function `P_s(X < x)`.
    ///
    /// Reduces to the ordinary CDF at `s = 0`.
    fn cdf(&self, x: T, s: T) -> T;
}
