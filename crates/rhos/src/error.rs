//! Error types for rhos.
//!
//! This module defines the error type returned by every statistic and by the
//! filter primitive. All validation happens at call entry, before any output
//! buffer is allocated, so an error never comes with partial results.

use thiserror::Error;

/// The main error type for rhos operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The decay constant is outside the closed interval `[0, 1]` (or NaN).
    #[error("invalid decay constant {value}: C must be in the [0, 1] interval")]
    InvalidDecay {
        /// The rejected decay constant, widened to `f64`.
        value: f64,
    },

    /// The variance definition is neither 0 (prior mean) nor 1 (current mean).
    #[error("invalid definition {value}: definition must be either 0 or 1")]
    InvalidDefinition {
        /// The rejected definition code.
        value: i64,
    },

    /// The HOS order is zero or too large to use as an `i32` exponent.
    #[error("invalid order {order}: order must be an integer in [1, 2147483647]")]
    InvalidOrder {
        /// The rejected order.
        order: u32,
    },

    /// The input signal is empty.
    #[error("empty input: no samples provided")]
    EmptyInput,

    /// The filter coefficients or the initial state are unusable.
    #[error("invalid filter: {reason}")]
    InvalidFilter {
        /// Description of what is wrong with the filter.
        reason: &'static str,
    },

    /// A caller-provided output buffer is shorter than the input.
    #[error("output buffer too small: required {required} elements, got {actual}")]
    BufferTooSmall {
        /// The number of elements required.
        required: usize,
        /// The number of elements available.
        actual: usize,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This occurs when a constant such as the variance epsilon or the
    /// exponent `n / 2` cannot be represented in the series element type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the rhos Error type.
pub type Result<T> = std::result::Result<T, Error>;
