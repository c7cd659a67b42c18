//! Core traits and argument validation for rhos.
//!
//! The primary trait is [`SeriesElement`], which abstracts over `f32` and
//! `f64` samples. The module also provides [`ValidatedInput`] and the
//! standalone validators every statistic runs at call entry.
//!
//! # Example
//!
//! ```
//! use rhos::traits::{validate_decay, validate_signal, SeriesElement};
//!
//! fn weighted_last<T: SeriesElement>(signal: &[T], c: T) -> rhos::Result<T> {
//!     validate_decay(c)?;
//!     validate_signal(signal)?;
//!     Ok(c * signal[signal.len() - 1])
//! }
//!
//! assert!((weighted_last(&[1.0_f64, 4.0], 0.5).unwrap() - 2.0).abs() < 1e-12);
//! assert!(weighted_last(&[1.0_f64], 1.5).is_err());
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as samples of a signal.
///
/// Extends `num_traits::Float` with the fallible conversions the statistics
/// need when turning integer parameters (order, window length) and `f64`
/// constants into the sample type.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Widens the element to `f64`, mapping unrepresentable values to NaN.
    #[inline]
    #[must_use]
    fn widen(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Trait for validating a signal before computation begins.
pub trait ValidatedInput {
    /// The element type of the series.
    type Element: SeriesElement;

    /// Returns the length of the series.
    fn len(&self) -> usize;

    /// Returns true if the series is empty.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates that the series is not empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if the series is empty.
    #[inline]
    fn validate_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::EmptyInput)
        } else {
            Ok(())
        }
    }

    /// Validates that a caller buffer can hold one output per sample.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `output_len` is shorter than the series.
    #[inline]
    fn validate_output_len(&self, output_len: usize) -> Result<()> {
        if output_len < self.len() {
            Err(Error::BufferTooSmall {
                required: self.len(),
                actual: output_len,
            })
        } else {
            Ok(())
        }
    }
}

impl<T: SeriesElement> ValidatedInput for [T] {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: SeriesElement> ValidatedInput for Vec<T> {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

/// Validates that a decay constant lies in the closed interval `[0, 1]`.
///
/// NaN is rejected as well.
///
/// # Errors
///
/// Returns `Error::InvalidDecay` if `c` is outside `[0, 1]`.
#[inline]
pub fn validate_decay<T: SeriesElement>(c: T) -> Result<()> {
    if c >= T::zero() && c <= T::one() {
        Ok(())
    } else {
        Err(Error::InvalidDecay { value: c.widen() })
    }
}

/// Largest accepted HOS order; the centred sample is raised with `powi`.
pub const MAX_ORDER: u32 = i32::MAX.unsigned_abs();

/// Validates that a HOS order lies in `1..=MAX_ORDER`.
///
/// # Errors
///
/// Returns `Error::InvalidOrder` if `order` is zero or above [`MAX_ORDER`].
#[inline]
pub const fn validate_order(order: u32) -> Result<()> {
    if order == 0 || order > MAX_ORDER {
        Err(Error::InvalidOrder { order })
    } else {
        Ok(())
    }
}

/// Validates that a signal can be processed.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if the signal has no samples.
#[inline]
pub fn validate_signal<T: SeriesElement>(signal: &[T]) -> Result<()> {
    signal.validate_not_empty()
}
