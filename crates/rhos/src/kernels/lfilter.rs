//! Linear recursive (IIR) filter primitive.
//!
//! Every fast-form statistic in this crate is an application of the same
//! first-order filter, so the filter is the one kernel the statistics share.
//!
//! # Algorithm
//!
//! The filter evaluates the difference equation
//!
//! ```text
//! a[0]·y[i] = b[0]·x[i] + b[1]·x[i-1] + ... + b[M]·x[i-M]
//!                       - a[1]·y[i-1] - ... - a[N]·y[i-N]
//! ```
//!
//! in transposed direct form II. Coefficients are normalised by `a[0]` and
//! the shorter coefficient vector is zero-padded, so the filter carries a
//! state vector `z` of length `max(len(a), len(b)) - 1`:
//!
//! ```text
//! y[i]   = b[0]·x[i] + z[0]
//! z[k-1] = b[k]·x[i] + z[k] - a[k]·y[i]     for k = 1..K-1
//! z[K-2] = b[K-1]·x[i] - a[K-1]·y[i]
//! ```
//!
//! An explicit initial state lets callers start the filter from a non-zero
//! history. For a first-order filter with `a = [1, a1]` the state that makes
//! the filter behave as if the previous output were `y_prev` is `-a1·y_prev`.
//!
//! # Example
//!
//! ```
//! use rhos::kernels::lfilter::{lfilter, LinearFilter};
//!
//! // y[i] = 0.5·x[i] + 0.5·y[i-1]
//! let filter = LinearFilter::first_order(0.5_f64).unwrap();
//! let (y, zf) = filter.apply(&[1.0, 0.0, 0.0], None).unwrap();
//! assert_eq!(y, vec![0.5, 0.25, 0.125]);
//! assert_eq!(zf, vec![0.0625]);
//!
//! // The same filter through the free function.
//! let (y2, _) = lfilter(&[0.5], &[1.0, -0.5], &[1.0, 0.0, 0.0], None).unwrap();
//! assert_eq!(y, y2);
//! ```

use tracing::trace;

use crate::error::{Error, Result};
use crate::traits::{validate_decay, SeriesElement, ValidatedInput};

/// A linear recursive filter with normalised coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFilter<T> {
    b: Vec<T>,
    a: Vec<T>,
}

impl<T: SeriesElement> LinearFilter<T> {
    /// Creates a filter from numerator `b` and denominator `a` coefficients.
    ///
    /// Both vectors are zero-padded to the same length and divided by `a[0]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFilter` if either vector is empty or `a[0]` is zero.
    pub fn new(b: &[T], a: &[T]) -> Result<Self> {
        if b.is_empty() {
            return Err(Error::InvalidFilter {
                reason: "numerator coefficients must not be empty",
            });
        }
        let Some(&a0) = a.first() else {
            return Err(Error::InvalidFilter {
                reason: "denominator coefficients must not be empty",
            });
        };
        if a0 == T::zero() || a0.is_nan() {
            return Err(Error::InvalidFilter {
                reason: "a[0] must be non-zero",
            });
        }

        let len = a.len().max(b.len());
        let normalise = |coeffs: &[T]| -> Vec<T> {
            let mut padded: Vec<T> = coeffs.iter().map(|&v| v / a0).collect();
            padded.resize(len, T::zero());
            padded
        };

        Ok(Self {
            b: normalise(b),
            a: normalise(a),
        })
    }

    /// Creates the first-order exponential filter `y[i] = C·x[i] + (1-C)·y[i-1]`.
    ///
    /// This is `b = [C]`, `a = [1, -(1-C)]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDecay` if `c` is outside `[0, 1]`.
    pub fn first_order(c: T) -> Result<Self> {
        validate_decay(c)?;
        Self::new(&[c], &[T::one(), -(T::one() - c)])
    }

    /// Returns the filter order, i.e. the length of the state vector.
    #[inline]
    #[must_use]
    pub fn order(&self) -> usize {
        self.a.len() - 1
    }

    /// Normalised numerator coefficients.
    #[must_use]
    pub fn numerator(&self) -> &[T] {
        &self.b
    }

    /// Normalised denominator coefficients (`a[0] == 1`).
    #[must_use]
    pub fn denominator(&self) -> &[T] {
        &self.a
    }

    /// Filters `x`, returning the output and the final filter state.
    ///
    /// `zi` is the initial state; `None` means a zero (at rest) state.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFilter` if `zi` does not have [`order`](Self::order) elements.
    pub fn apply(&self, x: &[T], zi: Option<&[T]>) -> Result<(Vec<T>, Vec<T>)> {
        let mut output = vec![T::zero(); x.len()];
        let zf = self.apply_into(x, zi, &mut output)?;
        Ok((output, zf))
    }

    /// Filters `x` into a pre-allocated buffer, returning the final state.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFilter` for a badly sized `zi` and
    /// `Error::BufferTooSmall` if `output` is shorter than `x`.
    pub fn apply_into(&self, x: &[T], zi: Option<&[T]>, output: &mut [T]) -> Result<Vec<T>> {
        x.validate_output_len(output.len())?;

        let order = self.order();
        let mut z = match zi {
            Some(state) if state.len() != order => {
                return Err(Error::InvalidFilter {
                    reason: "initial state length must equal the filter order",
                });
            }
            Some(state) => state.to_vec(),
            None => vec![T::zero(); order],
        };

        trace!(order, samples = x.len(), seeded = zi.is_some(), "applying linear filter");

        let b0 = self.b[0];
        for (out, &xi) in output.iter_mut().zip(x) {
            if order == 0 {
                *out = b0 * xi;
                continue;
            }
            let yi = b0 * xi + z[0];
            for k in 1..order {
                z[k - 1] = self.b[k] * xi + z[k] - self.a[k] * yi;
            }
            z[order - 1] = self.b[order] * xi - self.a[order] * yi;
            *out = yi;
        }

        Ok(z)
    }
}

/// Filters `x` with numerator `b` and denominator `a`.
///
/// Convenience wrapper around [`LinearFilter::new`] and [`LinearFilter::apply`].
///
/// # Errors
///
/// Returns `Error::InvalidFilter` for unusable coefficients or a badly sized
/// initial state.
pub fn lfilter<T: SeriesElement>(
    b: &[T],
    a: &[T],
    x: &[T],
    zi: Option<&[T]>,
) -> Result<(Vec<T>, Vec<T>)> {
    LinearFilter::new(b, a)?.apply(x, zi)
}

/// Filters `x` into a pre-allocated buffer, returning the final state.
///
/// # Errors
///
/// Returns `Error::InvalidFilter` for unusable coefficients or a badly sized
/// initial state, and `Error::BufferTooSmall` if `output` is shorter than `x`.
pub fn lfilter_into<T: SeriesElement>(
    b: &[T],
    a: &[T],
    x: &[T],
    zi: Option<&[T]>,
    output: &mut [T],
) -> Result<Vec<T>> {
    LinearFilter::new(b, a)?.apply_into(x, zi, output)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_slice(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < EPSILON)
    }

    #[test]
    fn test_first_order_impulse_response() {
        let filter = LinearFilter::first_order(0.5_f64).unwrap();
        let (y, zf) = filter.apply(&[1.0, 0.0, 0.0, 0.0], None).unwrap();
        assert_eq!(y, vec![0.5, 0.25, 0.125, 0.0625]);
        assert_eq!(zf, vec![0.03125]);
    }

    #[test]
    fn test_first_order_coefficients() {
        let filter = LinearFilter::first_order(0.25_f64).unwrap();
        assert_eq!(filter.numerator(), &[0.25, 0.0]);
        assert_eq!(filter.denominator(), &[1.0, -0.75]);
        assert_eq!(filter.order(), 1);
    }

    #[test]
    fn test_first_order_rejects_bad_decay() {
        assert!(matches!(
            LinearFilter::first_order(1.5_f64),
            Err(Error::InvalidDecay { .. })
        ));
    }

    #[test]
    fn test_initial_state_acts_as_previous_output() {
        // zi = (1-C)·y_prev continues a filter whose last output was y_prev.
        let c = 0.2_f64;
        let filter = LinearFilter::first_order(c).unwrap();
        let y_prev = 3.0;
        let (y, _) = filter.apply(&[1.0, 2.0], Some(&[(1.0 - c) * y_prev])).unwrap();

        let y0 = c * 1.0 + (1.0 - c) * y_prev;
        let y1 = c * 2.0 + (1.0 - c) * y0;
        assert!(approx_slice(&y, &[y0, y1]));
    }

    #[test]
    fn test_final_state_resumes_filtering() {
        let filter = LinearFilter::first_order(0.3_f64).unwrap();
        let x = [1.0, -2.0, 0.5, 4.0, 3.0, -1.0];

        let (whole, _) = filter.apply(&x, None).unwrap();
        let (head, zf) = filter.apply(&x[..3], None).unwrap();
        let (tail, _) = filter.apply(&x[3..], Some(&zf)).unwrap();

        let joined: Vec<f64> = head.into_iter().chain(tail).collect();
        assert_eq!(whole, joined);
    }

    #[test]
    fn test_normalises_by_a0() {
        // 2·y[i] = x[i] + y[i-1]  ==  y[i] = 0.5·x[i] + 0.5·y[i-1]
        let (y, _) = lfilter(&[1.0_f64], &[2.0, -1.0], &[1.0, 0.0, 0.0], None).unwrap();
        assert!(approx_slice(&y, &[0.5, 0.25, 0.125]));
    }

    #[test]
    fn test_fir_moving_sum() {
        let (y, zf) = lfilter(&[1.0_f64, 1.0], &[1.0], &[1.0, 2.0, 3.0], None).unwrap();
        assert!(approx_slice(&y, &[1.0, 3.0, 5.0]));
        assert!(approx_slice(&zf, &[3.0]));
    }

    #[test]
    fn test_second_order_matches_difference_equation() {
        let b = [0.2_f64, 0.1, 0.05];
        let a = [1.0_f64, -0.5, 0.25];
        let x = [1.0, 0.5, -0.25, 2.0, 0.0, -1.0, 0.75];

        let (y, _) = lfilter(&b, &a, &x, None).unwrap();

        let mut expected = vec![0.0; x.len()];
        for i in 0..x.len() {
            let mut acc = 0.0;
            for k in 0..3 {
                if i >= k {
                    acc += b[k] * x[i - k];
                }
            }
            for k in 1..3 {
                if i >= k {
                    acc -= a[k] * expected[i - k];
                }
            }
            expected[i] = acc;
        }
        assert!(approx_slice(&y, &expected));
    }

    #[test]
    fn test_pure_gain() {
        let (y, zf) = lfilter(&[3.0_f64], &[1.5], &[1.0, 2.0], None).unwrap();
        assert!(approx_slice(&y, &[2.0, 4.0]));
        assert!(zf.is_empty());
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        let filter = LinearFilter::first_order(0.5_f64).unwrap();
        let (y, zf) = filter.apply(&[], Some(&[1.0])).unwrap();
        assert!(y.is_empty());
        assert_eq!(zf, vec![1.0]);
    }

    #[test]
    fn test_invalid_coefficients() {
        let x = [1.0_f64];
        assert!(matches!(
            lfilter(&[], &[1.0], &x, None),
            Err(Error::InvalidFilter { .. })
        ));
        assert!(matches!(
            lfilter(&[1.0], &[], &x, None),
            Err(Error::InvalidFilter { .. })
        ));
        assert!(matches!(
            lfilter(&[1.0], &[0.0, 1.0], &x, None),
            Err(Error::InvalidFilter { .. })
        ));
    }

    #[test]
    fn test_wrong_state_length() {
        let result = lfilter(&[0.5_f64], &[1.0, -0.5], &[1.0], Some(&[0.0, 0.0]));
        assert!(matches!(result, Err(Error::InvalidFilter { .. })));
    }

    #[test]
    fn test_lfilter_into_buffer_too_small() {
        let mut out = [0.0_f64; 2];
        let result = lfilter_into(&[0.5], &[1.0, -0.5], &[1.0, 2.0, 3.0], None, &mut out);
        assert_eq!(
            result,
            Err(Error::BufferTooSmall {
                required: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_lfilter_into_larger_buffer() {
        let mut out = [9.0_f64; 4];
        lfilter_into(&[0.5], &[1.0, -0.5], &[1.0, 1.0], None, &mut out).unwrap();
        assert_eq!(out, [0.5, 0.75, 9.0, 9.0]);
    }

    #[test]
    fn test_f32_filter() {
        let filter = LinearFilter::first_order(0.5_f32).unwrap();
        let (y, _) = filter.apply(&[2.0, 0.0], None).unwrap();
        assert_eq!(y, vec![1.0_f32, 0.5]);
    }
}
