//! Recursive high-order statistics (HOS).
//!
//! The recursive HOS of order `n` is a running, variance-normalised `n`-th
//! moment. At order 4 it behaves like a recursive kurtosis and is used as a
//! characteristic function for detecting impulsive arrivals in seismograms.
//!
//! # Formula
//!
//! ```text
//! μ[i]   = C·x[i] + (1-C)·μ[i-1]
//! σ²[i]  = C·(x[i] - m[i])² + (1-C)·σ²[i-1]
//! hos[i] = C·(x[i] - m[i])ⁿ / g(σ²[i])^(n/2) + (1-C)·hos[i-1],   hos[-1] = 0
//! ```
//!
//! where `m[i]` is `μ[i-1]` or `μ[i]` depending on the [`Definition`], and `g`
//! is the variance guard from [`guard`](crate::statistics::guard).
//!
//! With `Definition::PriorMean` this is the HOS as computed by BackTrackBB,
//! which differs from equation 7 of Poiata et al. (2016); the output follows
//! BackTrackBB. `Definition::CurrentMean` follows Langet et al. (2014).
//!
//! # Initial state
//!
//! `μ[-1]` and `σ²[-1]` are not zero: both forms take them from
//! [`warm_start`], which runs `floor(1/C)` recurrence steps over the head of
//! the signal starting from a mean of 0 and a variance of 1.
//!
//! # Example
//!
//! ```
//! use rhos::statistics::hos::{recursive_hos, RecursiveHos};
//! use rhos::Definition;
//!
//! let mut signal = vec![0.0_f64; 20];
//! signal[2] = 1.0;
//!
//! let hos = recursive_hos(&signal, 0.5, 4, -1.0, Definition::CurrentMean).unwrap();
//! assert!((hos[2] - 1.28).abs() < 1e-12);
//!
//! // Same thing through the parameter object.
//! let config = RecursiveHos::new().definition(Definition::CurrentMean);
//! assert_eq!(config.compute(&signal, 0.5).unwrap(), hos);
//! ```

use tracing::debug;

use crate::error::{Error, Result};
use crate::kernels::lfilter::LinearFilter;
use crate::statistics::definition::Definition;
use crate::statistics::guard::{
    guard_variance_filtered, guard_variance_naive, variance_epsilon, warm_start, DEFAULT_VAR_MIN,
};
use crate::statistics::variance::{centre, centred_powers};
use crate::traits::{validate_decay, validate_order, validate_signal, SeriesElement};

/// Default HOS order (kurtosis-like).
pub const DEFAULT_ORDER: u32 = 4;

/// Exponents used by both forms: the integer power of the centred sample and
/// the real power `n/2` of the guarded variance.
fn exponents<T: SeriesElement>(order: u32) -> Result<(i32, T)> {
    let power = i32::try_from(order).map_err(|_| Error::NumericConversion {
        context: "HOS order to i32 exponent",
    })?;
    let half = T::from_f64(f64::from(order) / 2.0)?;
    Ok((power, half))
}

/// Computes the recursive HOS with the linear filter.
///
/// # Arguments
///
/// * `signal` - The input signal
/// * `c` - Decay constant in `[0, 1]`
/// * `order` - HOS order `n` (4 for a kurtosis-like statistic)
/// * `var_min` - Variance floor for the denominator; `-1` disables it
/// * `definition` - Which running mean samples are centred on
///
/// # Errors
///
/// Returns an error if:
/// - `c` is outside `[0, 1]` (`Error::InvalidDecay`)
/// - `order` is zero or above `i32::MAX` (`Error::InvalidOrder`)
/// - The signal is empty (`Error::EmptyInput`)
///
/// # Performance
///
/// - Time complexity: O(n), three filter passes
/// - Space complexity: O(n), a fixed number of intermediate buffers
#[must_use = "this returns a Result with the running HOS, which should be used"]
pub fn recursive_hos<T: SeriesElement>(
    signal: &[T],
    c: T,
    order: u32,
    var_min: T,
    definition: Definition,
) -> Result<Vec<T>> {
    validate_decay(c)?;
    validate_order(order)?;
    validate_signal(signal)?;

    let (power, half) = exponents::<T>(order)?;
    let epsilon = variance_epsilon::<T>()?;
    let (mean0, var0) = warm_start(signal, c);

    let filter = LinearFilter::first_order(c)?;
    let one_minus_c = T::one() - c;

    let (mean, _) = filter.apply(signal, Some(&[one_minus_c * mean0]))?;
    let squared = centred_powers(signal, &mean, mean0, definition, |d| d * d);
    let (var, _) = filter.apply(&squared, Some(&[one_minus_c * var0]))?;

    let normalised: Vec<T> = centred_powers(signal, &mean, mean0, definition, |d| d.powi(power))
        .into_iter()
        .zip(&var)
        .map(|(moment, &v)| moment / guard_variance_filtered(v, var_min, epsilon).powf(half))
        .collect();

    debug!(
        order,
        definition = %definition,
        samples = signal.len(),
        "computed recursive hos (filter form)"
    );

    let (hos, _) = filter.apply(&normalised, None)?;
    Ok(hos)
}

/// Computes the recursive HOS with an explicit sample loop.
///
/// Reference implementation for [`recursive_hos`]: mean, variance and HOS
/// are advanced together, one sample at a time.
///
/// # Errors
///
/// Returns an error if:
/// - `c` is outside `[0, 1]` (`Error::InvalidDecay`)
/// - `order` is zero or above `i32::MAX` (`Error::InvalidOrder`)
/// - The signal is empty (`Error::EmptyInput`)
#[must_use = "this returns a Result with the running HOS, which should be used"]
pub fn recursive_hos_naive<T: SeriesElement>(
    signal: &[T],
    c: T,
    order: u32,
    var_min: T,
    definition: Definition,
) -> Result<Vec<T>> {
    validate_decay(c)?;
    validate_order(order)?;
    validate_signal(signal)?;

    let (power, half) = exponents::<T>(order)?;
    let epsilon = variance_epsilon::<T>()?;
    let (mut mean_prev, mut var_prev) = warm_start(signal, c);
    let one_minus_c = T::one() - c;

    let mut hos = Vec::with_capacity(signal.len());
    let mut hos_prev = T::zero();
    for &x in signal {
        let mean = c * x + one_minus_c * mean_prev;
        let deviation = x - centre(definition, mean_prev, mean);
        let var = c * (deviation * deviation) + one_minus_c * var_prev;
        let denominator = guard_variance_naive(var, var_min, epsilon).powf(half);

        hos_prev = c * (deviation.powi(power) / denominator) + one_minus_c * hos_prev;
        hos.push(hos_prev);

        mean_prev = mean;
        var_prev = var;
    }

    debug!(
        order,
        definition = %definition,
        samples = signal.len(),
        "computed recursive hos (direct form)"
    );
    Ok(hos)
}

/// Recursive HOS parameters with defaults.
///
/// Default: order 4, variance floor -1 (disabled), `Definition::PriorMean`.
///
/// # Example
///
/// ```
/// use rhos::statistics::hos::RecursiveHos;
/// use rhos::Definition;
///
/// let config = RecursiveHos::new().order(6).var_min(1e-6);
/// assert_eq!(config.get_order(), 6);
/// assert_eq!(config.get_definition(), Definition::PriorMean);
///
/// let signal = [0.1_f64, -0.3, 2.0, -1.5, 0.2, 0.0];
/// let fast = config.compute(&signal, 0.5).unwrap();
/// let naive = config.compute_naive(&signal, 0.5).unwrap();
/// assert!(fast.iter().zip(&naive).all(|(a, b)| (a - b).abs() < 1e-9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecursiveHos {
    order: u32,
    var_min: f64,
    definition: Definition,
}

impl Default for RecursiveHos {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
            var_min: DEFAULT_VAR_MIN,
            definition: Definition::PriorMean,
        }
    }
}

impl RecursiveHos {
    /// Creates a configuration with the default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HOS order.
    ///
    /// Default: 4
    #[must_use]
    pub const fn order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// Sets the variance floor.
    ///
    /// Default: -1
    #[must_use]
    pub const fn var_min(mut self, var_min: f64) -> Self {
        self.var_min = var_min;
        self
    }

    /// Sets the variance definition.
    ///
    /// Default: `Definition::PriorMean`
    #[must_use]
    pub const fn definition(mut self, definition: Definition) -> Self {
        self.definition = definition;
        self
    }

    /// Computes the HOS with the filter form.
    ///
    /// # Errors
    ///
    /// Same as [`recursive_hos`], plus `Error::NumericConversion` if the
    /// variance floor is not representable in `T`.
    pub fn compute<T: SeriesElement>(&self, signal: &[T], c: T) -> Result<Vec<T>> {
        let var_min = T::from_f64(self.var_min)?;
        recursive_hos(signal, c, self.order, var_min, self.definition)
    }

    /// Computes the HOS with the direct form.
    ///
    /// # Errors
    ///
    /// Same as [`recursive_hos_naive`], plus `Error::NumericConversion` if
    /// the variance floor is not representable in `T`.
    pub fn compute_naive<T: SeriesElement>(&self, signal: &[T], c: T) -> Result<Vec<T>> {
        let var_min = T::from_f64(self.var_min)?;
        recursive_hos_naive(signal, c, self.order, var_min, self.definition)
    }

    /// Returns the order.
    #[must_use]
    pub const fn get_order(&self) -> u32 {
        self.order
    }

    /// Returns the variance floor.
    #[must_use]
    pub const fn get_var_min(&self) -> f64 {
        self.var_min
    }

    /// Returns the definition.
    #[must_use]
    pub const fn get_definition(&self) -> Definition {
        self.definition
    }
}
