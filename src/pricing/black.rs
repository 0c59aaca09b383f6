//! Generalized Black forward valuation
//!
//! With the forward represented as `F = f exp(s X - kappa(s))`, a European
//! put prices off two cumulative probabilities:
//!
//! ```text
//! E[(k - F)^+] = E[(k - F) 1(F < k)]
//!              = k P(F < k) - E[F 1(F < k)]
//!              = k P(F < k) - f P_s(F < k)
//! ```
//!
//! where `dP_s/dP = exp(s X - kappa(s))` is the Esscher change of measure.
//! Both probabilities are evaluations of the model's tilted CDF at the
//! moneyness, and calls follow from put-call parity. Nothing here depends
//! on which distribution drives `X`.
//!
//! All functions are total: invalid domains yield NaN, never a panic, so
//! grid evaluation runs branch-free.

use num_traits::Float;

use crate::core::{EsscherError, EsscherResult, OptionType};
use crate::models::TiltModel;

/// Moneyness: the level of the driver `X` at which the forward crosses the
/// strike.
///
/// Since the exponential map is strictly increasing in `X`,
/// `F < k  iff  X < (log(k/f) + kappa(s)) / s`, and that threshold is the
/// generalization of the Black-Scholes `-d2` to an arbitrary tilting
/// distribution. Feeding it back through the model's CDF gives
/// `P(F < k) = cdf(x, 0)` and `P_s(F < k) = cdf(x, s)`.
///
/// Returns NaN when `f <= 0`, `s <= 0`, or `k <= 0`: negative prices are
/// meaningless and zero or negative tilt degenerates the representation.
pub fn moneyness<T, M>(f: T, s: T, k: T, model: &M) -> T
where
    T: Float,
    M: TiltModel<T> + ?Sized,
{
    if f <= T::zero() || s <= T::zero() || k <= T::zero() {
        return T::nan();
    }

    ((k / f).ln() + model.cgf(s)) / s
}

/// Forward value of a European put, `E[(k - F)^+]`.
///
/// Computed as `k cdf(x, 0) - f cdf(x, s)` with `x` the [`moneyness`].
/// An invalid domain surfaces as NaN through the moneyness and the model's
/// CDF; as `s -> 0+` the value converges to the intrinsic `max(k - f, 0)`.
pub fn put<T, M>(f: T, s: T, k: T, model: &M) -> T
where
    T: Float,
    M: TiltModel<T> + ?Sized,
{
    let x = moneyness(f, s, k, model);

    k * model.cdf(x, T::zero()) - f * model.cdf(x, s)
}

/// Forward value of a European call, `E[(F - k)^+]`.
///
/// Via put-call parity: `(F - k)^+ - (k - F)^+ = F - k` and `E[F] = f`, so
/// `call = put + f - k`. No distributional assumption beyond what [`put`]
/// already uses; invalid domains propagate NaN identically.
pub fn call<T, M>(f: T, s: T, k: T, model: &M) -> T
where
    T: Float,
    M: TiltModel<T> + ?Sized,
{
    put(f, s, k, model) + f - k
}

/// Forward value of a European option, dispatching on [`OptionType`].
pub fn price<T, M>(f: T, s: T, k: T, option_type: OptionType, model: &M) -> T
where
    T: Float,
    M: TiltModel<T> + ?Sized,
{
    match option_type {
        OptionType::Call => call(f, s, k, model),
        OptionType::Put => put(f, s, k, model),
    }
}

/// Upper limit of the bracket search in [`implied_tilt`].
const MAX_TILT: f64 = 1.0e3;

/// Invert [`put`] for the tilt parameter s.
///
/// The put value is strictly increasing in s for fixed `f` and `k`
/// (tilting spreads the terminal distribution), so a bracketed bisection
/// suffices; the capability exposes no derivative, so a Newton step is not
/// available for a generic model.
///
/// Errors on `f <= 0` or `k <= 0`, on prices outside the static
/// no-arbitrage bounds `(max(k - f, 0), k)`, and when no bracket exists
/// below [`MAX_TILT`].
pub fn implied_tilt<M>(target: f64, f: f64, k: f64, model: &M) -> EsscherResult<f64>
where
    M: TiltModel<f64> + ?Sized,
{
    if !(f > 0.0) || !(k > 0.0) {
        return Err(EsscherError::invalid_input(format!(
            "forward {} and strike {} must be positive",
            f, k
        )));
    }
    let intrinsic = (k - f).max(0.0);
    if !target.is_finite() || target <= intrinsic || target >= k {
        return Err(EsscherError::invalid_input(format!(
            "put price {} outside no-arbitrage bounds ({}, {})",
            target, intrinsic, k
        )));
    }

    // Expand the upper bracket geometrically
    let mut lo = 0.0;
    let mut hi = 0.1;
    while put(f, hi, k, model) < target {
        hi *= 2.0;
        if hi > MAX_TILT {
            tracing::debug!(target_price = target, f, k, "implied tilt bracket exhausted");
            return Err(EsscherError::numerical(format!(
                "no tilt below {} reproduces put price {}",
                MAX_TILT, target
            )));
        }
    }

    // Bisect; the bracket midpoint is always strictly positive
    while hi - lo > 1e-12 {
        let mid = 0.5 * (lo + hi);
        if put(f, mid, k, model) < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Ok(0.5 * (lo + hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NormalModel, TwoPointModel};

    #[test]
    fn test_domain_validation() {
        let normal = NormalModel::new();
        let two_point = TwoPointModel;

        for &(f, s, k) in &[
            (0.0, 0.2, 100.0),
            (-1.0, 0.2, 100.0),
            (100.0, 0.0, 100.0),
            (100.0, -0.2, 100.0),
            (100.0, 0.2, 0.0),
            (100.0, 0.2, -5.0),
        ] {
            assert!(moneyness(f, s, k, &normal).is_nan());
            assert!(put(f, s, k, &normal).is_nan());
            assert!(call(f, s, k, &normal).is_nan());

            assert!(moneyness(f, s, k, &two_point).is_nan());
            assert!(put(f, s, k, &two_point).is_nan());
            assert!(call(f, s, k, &two_point).is_nan());
        }
    }

    #[test]
    fn test_moneyness_normal_identity() {
        let m = NormalModel::new();

        // kappa(s) = s^2/2, so x = (log(k/f) + s^2/2) / s
        for &f in &[80.0, 100.0, 120.0] {
            for &s in &[0.05, 0.2, 0.6] {
                for &k in &[70.0, 100.0, 130.0] {
                    let expected = ((k / f).ln() + 0.5 * s * s) / s;
                    assert!((moneyness(f, s, k, &m) - expected).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_atm_normal_scenario() {
        let m = NormalModel::new();

        // f = k = 100, s = 0.2: x = (log 1 + 0.02) / 0.2 = 0.1
        let x = moneyness(100.0, 0.2, 100.0, &m);
        assert!((x - 0.1).abs() < 1e-12);

        // put = 100 (Phi(0.1) - Phi(-0.1)) ~ 7.9656
        let p = put(100.0, 0.2, 100.0, &m);
        assert!((p - 7.9656).abs() < 1e-3);

        let direct = 100.0 * (m.cdf(0.1, 0.0) - m.cdf(-0.1, 0.0));
        assert!((p - direct).abs() < 1e-10);
    }

    #[test]
    fn test_put_call_parity() {
        let normal = NormalModel::new();
        let two_point = TwoPointModel;

        for &f in &[80.0, 100.0, 125.0] {
            for &s in &[0.01, 0.2, 1.0] {
                for &k in &[60.0, 100.0, 140.0] {
                    let parity = call(f, s, k, &normal) - put(f, s, k, &normal) - (f - k);
                    assert!(parity.abs() < 1e-10, "normal parity off by {}", parity);

                    let parity = call(f, s, k, &two_point) - put(f, s, k, &two_point) - (f - k);
                    assert!(parity.abs() < 1e-10, "two-point parity off by {}", parity);
                }
            }
        }
    }

    #[test]
    fn test_zero_vol_limit() {
        let m = NormalModel::new();
        let s = 1e-6;

        // OTM put decays to zero, ITM put to intrinsic
        assert!(put(110.0, s, 100.0, &m).abs() < 1e-6);
        assert!((put(100.0, s, 110.0, &m) - 10.0).abs() < 1e-6);
        assert!(put(100.0, s, 100.0, &m).abs() < 1e-3);
    }

    #[test]
    fn test_put_monotonicity() {
        let m = NormalModel::new();
        let s = 0.25;

        // Non-decreasing in strike
        let mut prev = put(100.0, s, 60.0, &m);
        for k in (65..=140).step_by(5) {
            let p = put(100.0, s, k as f64, &m);
            assert!(p >= prev, "put not monotone in k at {}", k);
            prev = p;
        }

        // Non-increasing in forward
        let mut prev = put(60.0, s, 100.0, &m);
        for f in (65..=140).step_by(5) {
            let p = put(f as f64, s, 100.0, &m);
            assert!(p <= prev, "put not monotone in f at {}", f);
            prev = p;
        }
    }

    #[test]
    fn test_two_point_closed_form() {
        let m = TwoPointModel;
        let s = 0.2_f64;

        // ATM: x = log cosh(s) / s lies in (0, 1), so
        // put = k (1/2 - e^-s / (e^s + e^-s))
        let x: f64 = moneyness(100.0, s, 100.0, &m);
        assert!(x > 0.0 && x < 1.0);

        let p_down = (-s).exp() / (s.exp() + (-s).exp());
        let expected = 100.0 * (0.5 - p_down);
        assert!((put(100.0, s, 100.0, &m) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_dyn_dispatch() {
        // Runtime-selected models price through the same functions
        let models: Vec<Box<dyn TiltModel<f64>>> =
            vec![Box::new(NormalModel::new()), Box::new(TwoPointModel)];

        for m in &models {
            let p = put(100.0, 0.2, 100.0, m.as_ref());
            let c = call(100.0, 0.2, 100.0, m.as_ref());
            assert!(p > 0.0);
            assert!((c - p).abs() < 1e-10);
        }
    }

    #[test]
    fn test_option_type_dispatch() {
        let m = NormalModel::new();

        let p = price(100.0, 0.2, 105.0, OptionType::Put, &m);
        let c = price(100.0, 0.2, 105.0, OptionType::Call, &m);
        assert_eq!(p, put(100.0, 0.2, 105.0, &m));
        assert!((c - p - (100.0 - 105.0)).abs() < 1e-10);
    }

    #[test]
    fn test_f32_precision() {
        let m = TwoPointModel;

        let p: f32 = put(100.0_f32, 0.25_f32, 110.0_f32, &m);
        assert!(p.is_finite() && p > 0.0);

        let parity = call(100.0_f32, 0.25_f32, 110.0_f32, &m) - p - (100.0_f32 - 110.0_f32);
        assert!(parity.abs() < 1e-3);
    }

    #[test]
    fn test_implied_tilt_round_trip() {
        let m = NormalModel::new();

        for &s in &[0.05, 0.2, 0.8] {
            for &k in &[90.0, 100.0, 115.0] {
                let target = put(100.0, s, k, &m);
                let solved = implied_tilt(target, 100.0, k, &m).unwrap();
                assert!((solved - s).abs() < 1e-8, "recovered {} for {}", solved, s);
            }
        }
    }

    #[test]
    fn test_implied_tilt_rejects_bad_inputs() {
        let m = NormalModel::new();

        // Below intrinsic, above strike, non-finite, bad forward
        assert!(matches!(
            implied_tilt(0.0, 100.0, 100.0, &m),
            Err(EsscherError::InvalidInput(_))
        ));
        assert!(matches!(
            implied_tilt(100.0, 100.0, 100.0, &m),
            Err(EsscherError::InvalidInput(_))
        ));
        assert!(matches!(
            implied_tilt(f64::NAN, 100.0, 100.0, &m),
            Err(EsscherError::InvalidInput(_))
        ));
        assert!(matches!(
            implied_tilt(5.0, -1.0, 100.0, &m),
            Err(EsscherError::InvalidInput(_))
        ));
    }
}
