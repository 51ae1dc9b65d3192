//! One-dimensional closed-form integrals of the unscaled Matérn-3/2 kernel
//!
//! With `k(x, t) = (1 + √3|x - t|/ℓ) exp(-√3|x - t|/ℓ)` on the interval
//! `[a, b]`:
//!
//! - [`qk_1d`] is `∫_a^b k(x, t) dt`,
//! - [`qkq_1d`] is `∫_a^b ∫_a^b k(x, t) dt dx`,
//! - [`dqk_dx_1d`] is `d/dx qk_1d(x)`.
//!
//! [`qk_1d`] and [`dqk_dx_1d`] equal the kernel integral and its gradient
//! only for `a ≤ x ≤ b`. Points outside the interval are accepted, but the
//! result is the in-interval expression extended past its validity, not the
//! integral. Its exponentials grow with the distance to the interval and
//! eventually overflow.

use crate::kernel::SQRT_3;
use ndarray::{Array1, ArrayView1};

/// Below this value of `√3 (b - a) / ℓ` the closed form of [`qkq_1d`] loses
/// digits to cancellation and the Taylor series is summed instead.
const QKQ_SERIES_THRESHOLD: f64 = 0.5;
const QKQ_SERIES_TERMS: usize = 30;

/// Unscaled kernel mean of the 1-D Matérn-3/2 kernel, elementwise over `x`
pub fn qk_1d(x: ArrayView1<'_, f64>, domain: (f64, f64), ell: f64) -> Array1<f64> {
    let (a, b) = domain;
    let first_term = 4.0 * ell / SQRT_3;
    let offset = 2.0 * ell / SQRT_3;
    x.mapv(|xi| {
        let second_term = -(SQRT_3 * (xi - b) / ell).exp() * (b + offset - xi);
        let third_term = -(SQRT_3 * (a - xi) / ell).exp() * (xi + offset - a);
        first_term + second_term + third_term
    })
}

/// Unscaled kernel variance of the 1-D Matérn-3/2 kernel
///
/// Non-negative for every finite interval and positive lengthscale.
pub fn qkq_1d(domain: (f64, f64), ell: f64) -> f64 {
    let (a, b) = domain;
    let c = SQRT_3 * (b - a);
    let u = c / ell;
    if u < QKQ_SERIES_THRESHOLD {
        return 2.0 * ell * ell / 3.0 * qkq_series(u);
    }
    2.0 * ell / 3.0 * (2.0 * c - 3.0 * ell + (-c / ell).exp() * (c + 3.0 * ell))
}

/// `2u - 3 + (u + 3) e^{-u} = Σ_{n≥2} (-1)^n (3 - n) u^n / n!`
fn qkq_series(u: f64) -> f64 {
    let mut power = u * u / 2.0;
    let mut sum = 0.0;
    for n in 2..QKQ_SERIES_TERMS {
        let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
        sum += sign * (3.0 - n as f64) * power;
        power *= u / (n + 1) as f64;
    }
    sum
}

/// Unscaled gradient of the 1-D Matérn-3/2 kernel mean, elementwise over `x`
pub fn dqk_dx_1d(x: ArrayView1<'_, f64>, domain: (f64, f64), ell: f64) -> Array1<f64> {
    let (a, b) = domain;
    x.mapv(|xi| {
        let exp_term_b = (SQRT_3 * (xi - b) / ell).exp();
        let exp_term_a = (SQRT_3 * (a - xi) / ell).exp();
        let first_term = exp_term_b * (-1.0 + (SQRT_3 / ell) * (xi - b));
        let second_term = exp_term_a * (1.0 - (SQRT_3 / ell) * (a - xi));
        first_term + second_term
    })
}
