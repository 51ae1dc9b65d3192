//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use bayesquad::{IntegralBounds, ProductMatern32};
use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const EPSILON: f64 = 1e-10;

/// Route library logs to the test output, filtered by `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Point counts and dimensions covered by the shape tests
pub fn shape_cases() -> Vec<(usize, usize)> {
    vec![(1, 1), (5, 1), (1, 3), (5, 3)]
}

/// Kernel and bounds with distinct, non-trivial parameters per dimension
pub fn setup(input_dim: usize) -> (ProductMatern32, IntegralBounds) {
    let lengthscales = (0..input_dim).map(|d| 0.4 + 0.3 * d as f64).collect();
    let bounds = (0..input_dim)
        .map(|d| (-0.5 * d as f64, 1.0 + 0.25 * d as f64))
        .collect();
    (
        ProductMatern32::new(lengthscales, 1.3).unwrap(),
        IntegralBounds::new("x", bounds).unwrap(),
    )
}

/// `n` points drawn uniformly from the box, reproducible per `seed`
pub fn random_points(bounds: &IntegralBounds, n: usize, seed: u64) -> Array2<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Array2::from_shape_fn((n, bounds.dim()), |(_, d)| {
        let (lb, ub) = bounds.bounds()[d];
        rng.gen_range(lb..ub)
    })
}

/// Assert two arrays are equal bit for bit
pub fn assert_bitwise_equal(actual: &Array2<f64>, expected: &Array2<f64>, context: &str) {
    assert_eq!(actual.dim(), expected.dim(), "shape mismatch for {context}");
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_eq!(a.to_bits(), e.to_bits(), "{context}: {a} != {e}");
    }
}
