//! Closed-form kernel integrals for Bayesian quadrature
//!
//! This crate re-exports the workspace crates:
//!
//! - [`bayesquad_core`]: integration domain, measures, the
//!   [`QuadratureKernel`] trait and the error type
//! - [`bayesquad_matern`]: the product Matérn-3/2 kernel and its integrals
//!
//! # Example
//!
//! ```rust
//! use bayesquad::prelude::*;
//! use ndarray::array;
//!
//! let kern = ProductMatern32::new(vec![0.5, 2.0], 1.0).unwrap();
//! let bounds = IntegralBounds::new("x", vec![(0.0, 1.0), (0.0, 1.0)]).unwrap();
//! let qkern = QuadratureProductMatern32LebesgueMeasure::new(&kern, &bounds).unwrap();
//!
//! let x = array![[0.2, 0.7]];
//! let kq = qkern.kq(x.view()).unwrap();
//! let qk = qkern.qk(x.view()).unwrap();
//! assert_eq!(kq, qk.t());
//! ```

pub use bayesquad_core;
pub use bayesquad_matern;

pub use bayesquad_core::{
    Error, IntegralBounds, IntegrationMeasure, QuadratureKernel, Result, UniformMeasure,
};
pub use bayesquad_matern::{
    ProductMatern32, QuadratureMatern32, QuadratureProductMatern32LebesgueMeasure,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use bayesquad_core::prelude::*;
    pub use bayesquad_matern::{
        ProductMatern32, QuadratureMatern32, QuadratureProductMatern32LebesgueMeasure,
    };
}
