//! Numeric kernels shared by the statistics.
//!
//! # Kernels
//!
//! - [`lfilter`]: linear recursive (IIR) filter in transposed direct form II,
//!   with explicit coefficients and an explicit initial state
//!
//! The fast form of every statistic is a short pipeline of first-order
//! filter applications over the whole signal, so this is the only place
//! where the per-sample loop of the fast forms lives.

pub mod lfilter;

pub use lfilter::{lfilter, lfilter_into, LinearFilter};
