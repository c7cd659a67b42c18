//! Shared test utilities for rhos tests.
//!
//! This module provides signal generators and comparison helpers used across
//! multiple test files.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Relative tolerance the direct and fast forms must agree to.
#[allow(dead_code)]
pub const EQUIVALENCE_RTOL: f64 = 1e-7;

/// Decay constants every equivalence check sweeps.
#[allow(dead_code)]
pub const DECAYS: [f64; 3] = [0.1, 0.5, 0.9];

/// A zero signal of `len` samples with a unit spike at `at`.
#[allow(dead_code)]
pub fn impulse(len: usize, at: usize) -> Vec<f64> {
    let mut signal = vec![0.0; len];
    signal[at] = 1.0;
    signal
}

/// A zero signal that switches to `level` at index `at`.
#[allow(dead_code)]
pub fn step(len: usize, at: usize, level: f64) -> Vec<f64> {
    (0..len).map(|i| if i < at { 0.0 } else { level }).collect()
}

/// Uniform noise in `[-1, 1)` from a fixed seed.
#[allow(dead_code)]
pub fn noise(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// Noise with a burst of larger amplitude, the shape HOS is meant to pick out.
#[allow(dead_code)]
pub fn noise_with_burst(len: usize, burst_at: usize, seed: u64) -> Vec<f64> {
    let mut signal = noise(len, seed);
    for (offset, sample) in signal.iter_mut().skip(burst_at).take(8).enumerate() {
        *sample *= 20.0 / (1.0 + offset as f64);
    }
    signal
}

/// Asserts that `actual` is element-wise close to `expected`:
/// `|a - e| <= atol + rtol * |e|`.
#[allow(dead_code)]
pub fn assert_all_close(actual: &[f64], expected: &[f64], rtol: f64, atol: f64, label: &str) {
    assert_eq!(actual.len(), expected.len(), "{label}: length mismatch");
    if let Some((i, a, e)) = rhos::utils::first_mismatch(actual, expected, rtol, atol) {
        panic!("{label}: mismatch at index {i}: actual {a:e}, expected {e:e}");
    }
}
