//! Core traits and types for integrable kernels
//!
//! This crate provides the pieces shared by every kernel that supports
//! Bayesian quadrature: the rectangular integration domain, the optional
//! integration measure, the [`QuadratureKernel`] capability trait, and the
//! error type.
//!
//! # Example
//!
//! ```rust
//! use bayesquad_core::IntegralBounds;
//! use ndarray::array;
//!
//! let bounds = IntegralBounds::new("x", vec![(0.0, 1.0), (-1.0, 1.0)]).unwrap();
//! assert_eq!(bounds.dim(), 2);
//!
//! let inside = bounds.check_in_domain(array![[0.5, 0.0], [2.0, 0.0]].view()).unwrap();
//! assert_eq!(inside, array![true, false]);
//! ```

pub mod bounds;
pub mod error;
pub mod measure;
pub mod traits;
pub mod validation;

// Re-export core types
pub use bounds::IntegralBounds;
pub use error::{Error, Result};
pub use measure::{IntegrationMeasure, UniformMeasure};
pub use traits::QuadratureKernel;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Error, IntegralBounds, IntegrationMeasure, QuadratureKernel, Result};
}
