//! Recursive variance.
//!
//! # Formula
//!
//! ```text
//! μ[i]  = C·x[i] + (1-C)·μ[i-1]                       μ[-1]  = 0
//! σ²[i] = C·(x[i] - m[i])² + (1-C)·σ²[i-1]            σ²[-1] = 0
//!
//! m[i] = μ[i-1]   (Definition::PriorMean)
//! m[i] = μ[i]     (Definition::CurrentMean)
//! ```
//!
//! # Algorithm
//!
//! [`recursive_variance_naive`] carries mean and variance through a single
//! loop. [`recursive_variance`] filters the signal to get the whole mean
//! sequence, builds the squared deviations from it, and filters those with
//! the same first-order filter. For `PriorMean` the deviation at index 0 is
//! centred on `μ[-1] = 0`, i.e. it is `x[0]²`.
//!
//! # Example
//!
//! ```
//! use rhos::statistics::variance::{recursive_variance, recursive_variance_naive};
//! use rhos::Definition;
//!
//! let signal = [0.0_f64, 0.0, 1.0, 0.0];
//! let prior = recursive_variance(&signal, 0.5, Definition::PriorMean).unwrap();
//! let current = recursive_variance(&signal, 0.5, Definition::CurrentMean).unwrap();
//!
//! assert_eq!(prior, vec![0.0, 0.0, 0.5, 0.375]);
//! assert_eq!(current, vec![0.0, 0.0, 0.125, 0.09375]);
//! assert_eq!(current, recursive_variance_naive(&signal, 0.5, Definition::CurrentMean).unwrap());
//! ```

use crate::error::Result;
use crate::kernels::lfilter::LinearFilter;
use crate::statistics::definition::Definition;
use crate::traits::{validate_decay, validate_signal, SeriesElement};

/// Computes the recursive variance with the linear filter.
///
/// # Errors
///
/// Returns an error if:
/// - `c` is outside `[0, 1]` (`Error::InvalidDecay`)
/// - The signal is empty (`Error::EmptyInput`)
///
/// Integer definition codes are validated when converting them with
/// [`Definition::from_code`].
#[must_use = "this returns a Result with the running variance, which should be used"]
pub fn recursive_variance<T: SeriesElement>(
    signal: &[T],
    c: T,
    definition: Definition,
) -> Result<Vec<T>> {
    validate_decay(c)?;
    validate_signal(signal)?;

    let filter = LinearFilter::first_order(c)?;
    let (mean, _) = filter.apply(signal, None)?;
    let squared = centred_powers(signal, &mean, T::zero(), definition, |d| d * d);
    let (var, _) = filter.apply(&squared, None)?;
    Ok(var)
}

/// Computes the recursive variance with an explicit sample loop.
///
/// Reference implementation for [`recursive_variance`].
///
/// # Errors
///
/// Returns an error if:
/// - `c` is outside `[0, 1]` (`Error::InvalidDecay`)
/// - The signal is empty (`Error::EmptyInput`)
#[must_use = "this returns a Result with the running variance, which should be used"]
pub fn recursive_variance_naive<T: SeriesElement>(
    signal: &[T],
    c: T,
    definition: Definition,
) -> Result<Vec<T>> {
    validate_decay(c)?;
    validate_signal(signal)?;

    let one_minus_c = T::one() - c;
    let mut var = Vec::with_capacity(signal.len());
    let mut mean_prev = T::zero();
    let mut var_prev = T::zero();

    for &x in signal {
        let mean = c * x + one_minus_c * mean_prev;
        let deviation = x - centre(definition, mean_prev, mean);
        var_prev = c * (deviation * deviation) + one_minus_c * var_prev;
        mean_prev = mean;
        var.push(var_prev);
    }
    Ok(var)
}

/// Picks the mean a sample is centred on.
#[inline]
pub(crate) fn centre<T: SeriesElement>(definition: Definition, prior: T, current: T) -> T {
    match definition {
        Definition::PriorMean => prior,
        Definition::CurrentMean => current,
    }
}

/// Maps each centred sample `x[i] - m[i]` through `power`.
///
/// `mean` is the filtered mean sequence and `initial_mean` stands in for
/// `μ[-1]` when the definition centres on the prior mean.
pub(crate) fn centred_powers<T, F>(
    signal: &[T],
    mean: &[T],
    initial_mean: T,
    definition: Definition,
    power: F,
) -> Vec<T>
where
    T: SeriesElement,
    F: Fn(T) -> T,
{
    let priors = std::iter::once(initial_mean).chain(mean.iter().copied());
    signal
        .iter()
        .zip(mean)
        .zip(priors)
        .map(|((&x, &current), prior)| power(x - centre(definition, prior, current)))
        .collect()
}
