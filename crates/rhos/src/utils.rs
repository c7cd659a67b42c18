//! Utility functions for rhos.
//!
//! Tolerance-based comparison helpers. The direct and filter-based forms of
//! each statistic perform the same arithmetic in a different order, so their
//! outputs are compared with [`all_close`] rather than with `==`.
//!
//! # Example
//!
//! ```
//! use rhos::utils::{all_close, EQUIVALENCE_TOLERANCE};
//!
//! let a = [1.0_f64, 0.5, 0.25];
//! let b = [1.0_f64, 0.5 + 1e-12, 0.25];
//! assert!(all_close(&a, &b, EQUIVALENCE_TOLERANCE, EQUIVALENCE_TOLERANCE));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Tolerance within which the direct and filter-based forms must agree.
pub const EQUIVALENCE_TOLERANCE: f64 = 1e-7;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other,
/// or if both are NaN.
///
/// # Example
///
/// ```
/// use rhos::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Relative approximate equality check for floating-point values.
///
/// Returns `true` if the relative difference between `a` and `b` is less than
/// `rel_tolerance`, or if both are NaN.
///
/// # Example
///
/// ```
/// use rhos::utils::approx_eq_relative;
///
/// assert!(approx_eq_relative(1e10, 1e10 + 1.0, 1e-9));
/// assert!(approx_eq_relative(1e-10, 1.000000001e-10, 1e-8));
/// ```
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, rel_tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }

    let diff = (a - b).abs();
    let max_abs = a.abs().max(b.abs());

    if max_abs == T::zero() {
        return diff == T::zero();
    }

    diff / max_abs < rel_tolerance
}

/// Element-wise closeness of two series.
///
/// Each pair must satisfy `|actual - expected| <= atol + rtol * |expected|`.
/// Series of different lengths are never close. NaNs compare equal to NaNs.
#[must_use]
pub fn all_close(actual: &[f64], expected: &[f64], rtol: f64, atol: f64) -> bool {
    actual.len() == expected.len()
        && actual.iter().zip(expected).all(|(&a, &e)| {
            if a.is_nan() || e.is_nan() {
                return a.is_nan() && e.is_nan();
            }
            (a - e).abs() <= rtol.mul_add(e.abs(), atol)
        })
}

/// Returns the index and values of the first pair that fails [`all_close`].
///
/// Used to produce readable assertion messages.
#[must_use]
pub fn first_mismatch(
    actual: &[f64],
    expected: &[f64],
    rtol: f64,
    atol: f64,
) -> Option<(usize, f64, f64)> {
    actual
        .iter()
        .zip(expected)
        .enumerate()
        .find(|&(_, (a, e))| !all_close(&[*a], &[*e], rtol, atol))
        .map(|(i, (&a, &e))| (i, a, e))
}
