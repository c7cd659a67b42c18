//! Recursive statistics.
//!
//! Running mean, variance and high-order statistics (HOS) with an exponential
//! forgetting factor `C`. The effective memory of every statistic is roughly
//! `1/C` samples.
//!
//! # Overview
//!
//! Each statistic comes in two forms with the same output:
//!
//! - A fast form that applies the first-order filter from
//!   [`kernels::lfilter`](crate::kernels::lfilter) to whole sequences
//! - A `_naive` direct form that walks the recurrence one sample at a time
//!
//! The direct forms are the reference the fast forms are tested against.
//!
//! | Statistic | Fast form | Direct form |
//! |---|---|---|
//! | Mean | [`recursive_mean`] | [`recursive_mean_naive`] |
//! | Variance | [`recursive_variance`] | [`recursive_variance_naive`] |
//! | HOS | [`recursive_hos`] | [`recursive_hos_naive`] |
//!
//! # Example
//!
//! ```
//! use rhos::statistics::{recursive_hos, recursive_mean, recursive_variance};
//! use rhos::Definition;
//!
//! let signal: Vec<f64> = (0..50).map(|i| if i == 25 { 10.0 } else { 0.1 }).collect();
//!
//! let mean = recursive_mean(&signal, 0.2).unwrap();
//! let var = recursive_variance(&signal, 0.2, Definition::CurrentMean).unwrap();
//! let hos = recursive_hos(&signal, 0.2, 4, -1.0, Definition::PriorMean).unwrap();
//!
//! assert_eq!(mean.len(), signal.len());
//! assert_eq!(var.len(), signal.len());
//! // The spike dominates the kurtosis-like statistic.
//! let peak = hos
//!     .iter()
//!     .enumerate()
//!     .max_by(|a, b| a.1.total_cmp(b.1))
//!     .map(|(i, _)| i);
//! assert_eq!(peak, Some(25));
//! ```

pub mod definition;
pub mod guard;
pub mod hos;
pub mod mean;
pub mod variance;

pub use definition::Definition;
pub use guard::{DEFAULT_VAR_MIN, VARIANCE_EPSILON};
pub use hos::{recursive_hos, recursive_hos_naive, RecursiveHos, DEFAULT_ORDER};
pub use mean::{recursive_mean, recursive_mean_into, recursive_mean_naive};
pub use variance::{recursive_variance, recursive_variance_naive};
