//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use rhos::prelude::*;
//!
//! let signal = vec![0.3_f64, -1.2, 0.8, 4.0, -0.1, 0.0, 0.2];
//!
//! let mean = recursive_mean(&signal, 0.25).unwrap();
//! let var = recursive_variance(&signal, 0.25, Definition::PriorMean).unwrap();
//! let hos = recursive_hos(&signal, 0.25, 4, -1.0, Definition::PriorMean).unwrap();
//! ```
//!
//! # Contents
//!
//! ## Error Handling
//! - [`Error`]: The error type for invalid arguments
//! - [`Result`]: Type alias for `std::result::Result<T, Error>`
//!
//! ## Traits
//! - [`SeriesElement`]: Trait for numeric types usable as signal samples
//! - [`ValidatedInput`]: Extension trait for input validation
//!
//! ## Statistics
//! - `recursive_mean`, `recursive_variance`, `recursive_hos` and their
//!   `_naive` direct forms
//! - [`Definition`] and the [`RecursiveHos`] parameter object
//!
//! ## Filtering
//! - [`lfilter`] and [`LinearFilter`]

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{SeriesElement, ValidatedInput};

// Statistics (fast form)
pub use crate::statistics::{recursive_hos, recursive_mean, recursive_mean_into, recursive_variance};

// Statistics (direct form)
pub use crate::statistics::{recursive_hos_naive, recursive_mean_naive, recursive_variance_naive};

// Parameters
pub use crate::statistics::{Definition, RecursiveHos, DEFAULT_ORDER, DEFAULT_VAR_MIN};

// Filter kernel
pub use crate::kernels::{lfilter, lfilter_into, LinearFilter};
