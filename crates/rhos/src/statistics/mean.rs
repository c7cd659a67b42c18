//! Recursive mean.
//!
//! The recursive mean is an exponentially weighted moving average with decay
//! constant `C` and a zero initial state:
//!
//! ```text
//! μ[i] = C·x[i] + (1-C)·μ[i-1],    μ[-1] = 0
//! ```
//!
//! Unlike a period-seeded EMA there is no lookback: every output sample is
//! defined, and the zero start decays out over roughly `1/C` samples.
//!
//! Two realisations are provided. [`recursive_mean_naive`] is the explicit
//! per-sample loop. [`recursive_mean`] applies the first-order filter
//! `b = [C]`, `a = [1, -(1-C)]` from [`kernels::lfilter`](crate::kernels::lfilter)
//! over the whole signal. Both produce the same output.
//!
//! # Example
//!
//! ```
//! use rhos::statistics::mean::{recursive_mean, recursive_mean_naive};
//!
//! let signal = [0.0_f64, 0.0, 1.0, 0.0];
//! let fast = recursive_mean(&signal, 0.5).unwrap();
//! let naive = recursive_mean_naive(&signal, 0.5).unwrap();
//!
//! assert_eq!(fast, vec![0.0, 0.0, 0.5, 0.25]);
//! assert_eq!(fast, naive);
//! ```

use crate::error::Result;
use crate::kernels::lfilter::LinearFilter;
use crate::traits::{validate_decay, validate_signal, SeriesElement, ValidatedInput};

/// Computes the recursive mean with the linear filter.
///
/// # Errors
///
/// Returns an error if:
/// - `c` is outside `[0, 1]` (`Error::InvalidDecay`)
/// - The signal is empty (`Error::EmptyInput`)
///
/// # Performance
///
/// - Time complexity: O(n)
/// - Space complexity: O(n) for the output vector
#[must_use = "this returns a Result with the running mean, which should be used"]
pub fn recursive_mean<T: SeriesElement>(signal: &[T], c: T) -> Result<Vec<T>> {
    validate_decay(c)?;
    validate_signal(signal)?;

    let (mean, _) = LinearFilter::first_order(c)?.apply(signal, None)?;
    Ok(mean)
}

/// Computes the recursive mean into a pre-allocated output buffer.
///
/// Returns the number of values written (the signal length).
///
/// # Errors
///
/// Returns an error if:
/// - `c` is outside `[0, 1]` (`Error::InvalidDecay`)
/// - The signal is empty (`Error::EmptyInput`)
/// - The output buffer is shorter than the signal (`Error::BufferTooSmall`)
///
/// # Example
///
/// ```
/// use rhos::statistics::mean::recursive_mean_into;
///
/// let mut output = [0.0_f64; 3];
/// let written = recursive_mean_into(&[2.0, 2.0, 2.0], 0.5, &mut output).unwrap();
/// assert_eq!(written, 3);
/// assert_eq!(output, [1.0, 1.5, 1.75]);
/// ```
#[must_use = "this returns a Result with the count of values written"]
pub fn recursive_mean_into<T: SeriesElement>(signal: &[T], c: T, output: &mut [T]) -> Result<usize> {
    validate_decay(c)?;
    validate_signal(signal)?;
    signal.validate_output_len(output.len())?;

    LinearFilter::first_order(c)?.apply_into(signal, None, output)?;
    Ok(signal.len())
}

/// Computes the recursive mean with an explicit sample loop.
///
/// Reference implementation for [`recursive_mean`].
///
/// # Errors
///
/// Returns an error if:
/// - `c` is outside `[0, 1]` (`Error::InvalidDecay`)
/// - The signal is empty (`Error::EmptyInput`)
#[must_use = "this returns a Result with the running mean, which should be used"]
pub fn recursive_mean_naive<T: SeriesElement>(signal: &[T], c: T) -> Result<Vec<T>> {
    validate_decay(c)?;
    validate_signal(signal)?;

    let one_minus_c = T::one() - c;
    let mut mean = Vec::with_capacity(signal.len());
    let mut previous = T::zero();
    for &x in signal {
        previous = c * x + one_minus_c * previous;
        mean.push(previous);
    }
    Ok(mean)
}
