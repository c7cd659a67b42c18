//! rhos: Recursive high-order statistics
//!
//! This crate computes running (recursive) mean, variance and high-order
//! statistics (HOS) over a sampled signal, with an exponential forgetting
//! factor. The HOS of order 4 is a recursive kurtosis, used as a
//! characteristic function for detecting impulsive arrivals in seismograms.
//!
//! # Features
//!
//! - **Two forms**: every statistic has a fast filter-based form and a
//!   direct per-sample `_naive` form with the same output
//! - **Generics**: Works with both `f32` and `f64` data types
//! - **Safety**: Arguments are validated up front and reported as typed errors
//! - **Observability**: `tracing` events for warm-start state and filter passes
//!
//! # Quick Start
//!
//! ```
//! use rhos::prelude::*;
//!
//! let mut signal = vec![0.0_f64; 20];
//! signal[2] = 1.0;
//!
//! let mean = recursive_mean(&signal, 0.5).unwrap();
//! assert_eq!(mean[2], 0.5);
//! assert_eq!(mean[3], 0.25);
//!
//! let hos = RecursiveHos::new()
//!     .definition(Definition::CurrentMean)
//!     .compute(&signal, 0.5)
//!     .unwrap();
//! assert!((hos[2] - 1.28).abs() < 1e-12);
//! ```
//!
//! # Available Statistics
//!
//! - [`statistics::recursive_mean()`]: Recursive mean
//! - [`statistics::recursive_variance()`]: Recursive variance, two definitions
//! - [`statistics::recursive_hos()`]: Recursive high-order statistics
//! - [`kernels::lfilter()`]: The linear recursive filter underneath them
//!
//! # Error Handling
//!
//! All functions return [`Result<T, Error>`]:
//!
//! ```
//! use rhos::prelude::*;
//!
//! // Decay constant outside [0, 1]
//! assert!(recursive_mean(&[1.0_f64, 2.0], 1.5).is_err());
//!
//! // Empty signal
//! let empty: Vec<f64> = vec![];
//! assert_eq!(recursive_mean(&empty, 0.5), Err(Error::EmptyInput));
//!
//! // Unknown variance definition code
//! assert!(Definition::from_code(2).is_err());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod kernels;
pub mod prelude;
pub mod statistics;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use statistics::{
    recursive_hos, recursive_hos_naive, recursive_mean, recursive_mean_naive, recursive_variance,
    recursive_variance_naive, Definition, RecursiveHos,
};
pub use traits::{SeriesElement, ValidatedInput};
pub use utils::{all_close, approx_eq, approx_eq_relative, EPSILON, EQUIVALENCE_TOLERANCE};
