//! Numeric guards and warm-start state shared by the HOS forms.
//!
//! # Variance guard
//!
//! The HOS denominator is the running variance raised to `n/2`. A variance of
//! exactly zero is replaced with [`VARIANCE_EPSILON`], and values at or below
//! the floor `var_min` are replaced with the floor. The two forms apply the
//! rule in a different order, and the order is part of the established
//! output contract:
//!
//! ```text
//! direct:  var > var_min ? (var != 0 ? var : ε) : var_min
//! fast:    v = (var == 0 ? ε : var);  v < var_min ? var_min : v
//! ```
//!
//! They only disagree when `0 <= var_min < ε` and the variance is exactly
//! zero. The guard always runs before the power is taken.
//!
//! # Warm start
//!
//! Before the main pass both HOS forms run `floor(1/C)` steps of the mean and
//! variance recurrences over the head of the signal, starting from a mean of
//! 0 and a variance of 1. The resulting state stands in for `μ[-1]` and
//! `σ²[-1]`, so the first samples of the output do not carry the transient
//! of a zero start.

use num_traits::NumCast;
use tracing::debug;

use crate::error::Result;
use crate::traits::SeriesElement;

/// Substitute for an exactly-zero variance in the HOS denominator.
pub const VARIANCE_EPSILON: f64 = 1e-9;

/// Default variance floor: effectively disabled, since variance is non-negative.
pub const DEFAULT_VAR_MIN: f64 = -1.0;

/// Returns [`VARIANCE_EPSILON`] in the series element type.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if the epsilon is not representable.
#[inline]
pub fn variance_epsilon<T: SeriesElement>() -> Result<T> {
    T::from_f64(VARIANCE_EPSILON)
}

/// Guards a variance sample the way the direct HOS form does.
///
/// # Example
///
/// ```
/// use rhos::statistics::guard::guard_variance_naive;
///
/// assert_eq!(guard_variance_naive(0.5_f64, -1.0, 1e-9), 0.5);
/// assert_eq!(guard_variance_naive(0.0_f64, -1.0, 1e-9), 1e-9);
/// assert_eq!(guard_variance_naive(0.5_f64, 0.5, 1e-9), 0.5);
/// assert_eq!(guard_variance_naive(0.1_f64, 0.5, 1e-9), 0.5);
/// ```
#[inline]
#[must_use]
pub fn guard_variance_naive<T: SeriesElement>(var: T, var_min: T, epsilon: T) -> T {
    if var > var_min {
        if var == T::zero() {
            epsilon
        } else {
            var
        }
    } else {
        var_min
    }
}

/// Guards a variance sample the way the fast HOS form does.
///
/// The zero substitution happens first, then the floor with a strict `<`.
#[inline]
#[must_use]
pub fn guard_variance_filtered<T: SeriesElement>(var: T, var_min: T, epsilon: T) -> T {
    let var = if var == T::zero() { epsilon } else { var };
    if var < var_min {
        var_min
    } else {
        var
    }
}

/// Length of the warm-start window: `floor(1/C)`, capped at the signal length.
///
/// `C = 0` has an infinite memory and uses the whole signal.
///
/// # Example
///
/// ```
/// use rhos::statistics::guard::burn_in_len;
///
/// assert_eq!(burn_in_len(0.5_f64, 20), 2);
/// assert_eq!(burn_in_len(0.3_f64, 20), 3);
/// assert_eq!(burn_in_len(0.01_f64, 20), 20);
/// assert_eq!(burn_in_len(0.0_f64, 20), 20);
/// ```
#[must_use]
pub fn burn_in_len<T: SeriesElement>(c: T, signal_len: usize) -> usize {
    let window = (1.0 / c.widen()).floor();
    <usize as NumCast>::from(window).map_or(signal_len, |w| w.min(signal_len))
}

/// Runs the warm-start recurrences and returns `(mean0, var0)`.
///
/// The variance step centres on the freshly updated mean regardless of the
/// definition used by the main pass.
#[must_use]
pub fn warm_start<T: SeriesElement>(signal: &[T], c: T) -> (T, T) {
    let window = burn_in_len(c, signal.len());
    let one_minus_c = T::one() - c;

    let mut mean0 = T::zero();
    let mut var0 = T::one();
    for &x in &signal[..window] {
        mean0 = c * x + one_minus_c * mean0;
        let deviation = x - mean0;
        var0 = c * (deviation * deviation) + one_minus_c * var0;
    }

    debug!(
        window,
        mean0 = mean0.widen(),
        var0 = var0.widen(),
        "warm start complete"
    );
    (mean0, var0)
}
