//! Closed-form integrals of the product Matérn-3/2 kernel
//!
//! This crate augments the separable Matérn-3/2 kernel
//!
//! ```text
//! k(x1, x2) = σ² Π_d (1 + √3 r_d / ℓ_d) exp(-√3 r_d / ℓ_d)
//! ```
//!
//! with its integrals over an axis-aligned box, as needed by Bayesian
//! quadrature:
//!
//! - **Kernel mean** `qk(x)`: `k` integrated over its first argument
//! - **Kernel variance** `qkq()`: `k` integrated over both arguments
//! - **Gradient** `dqk_dx(x)`: derivative of the kernel mean in `x`
//!
//! All of them are products of one-dimensional closed forms, exposed in
//! [`primitives`].
//!
//! # Kernels
//!
//! - [`QuadratureProductMatern32LebesgueMeasure`]: finite box, Lebesgue measure.
//! - [`QuadratureMatern32`]: general measure; only the raw kernel is
//!   available, the integrals return `Error::NotImplemented`.
//!
//! # Example
//!
//! ```rust
//! use bayesquad_core::{IntegralBounds, QuadratureKernel};
//! use bayesquad_matern::{ProductMatern32, QuadratureProductMatern32LebesgueMeasure};
//! use ndarray::array;
//!
//! let kern = ProductMatern32::new(vec![1.0], 1.0).unwrap();
//! let bounds = IntegralBounds::new("x", vec![(0.0, 1.0)]).unwrap();
//! let qkern = QuadratureProductMatern32LebesgueMeasure::new(&kern, &bounds)
//!     .unwrap()
//!     .with_variable_names("x");
//!
//! let x = array![[0.25], [0.5]];
//! let kernel_mean = qkern.qk(x.view()).unwrap();       // shape (1, 2)
//! let gradient = qkern.dqk_dx(x.view()).unwrap();      // shape (1, 2)
//! let kernel_variance = qkern.qkq().unwrap();
//!
//! assert_eq!(kernel_mean.dim(), (1, 2));
//! assert!(gradient[[0, 0]] > 0.0);
//! assert!(kernel_variance > 0.0);
//! ```

mod kernel;
mod lebesgue;
pub mod primitives;
mod quadrature;

// Re-exports
pub use kernel::ProductMatern32;
pub use lebesgue::QuadratureProductMatern32LebesgueMeasure;
pub use quadrature::QuadratureMatern32;

// Convenience constructors
pub fn lebesgue_quadrature<'a>(
    kern: &'a ProductMatern32,
    integral_bounds: &'a bayesquad_core::IntegralBounds,
) -> bayesquad_core::Result<QuadratureProductMatern32LebesgueMeasure<'a>> {
    QuadratureProductMatern32LebesgueMeasure::new(kern, integral_bounds)
}
