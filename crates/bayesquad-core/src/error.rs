//! Error types for integrable kernels
//!
//! Provides a unified error type for all bayesquad crates.

use thiserror::Error;

/// Core error type for kernel integral operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Dimensionality of two inputs disagrees
    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Integral bounds are empty, unordered, or unsupported by the integral
    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Operation deliberately left unimplemented for this kernel/measure pair
    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a dimensionality disagreement
    pub fn dimension_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::DimensionMismatch {
            expected,
            actual,
            context: context.to_string(),
        }
    }

    /// Create an error for an operation the kernel does not provide
    pub fn not_implemented(operation: &str, kernel: &str) -> Self {
        Self::NotImplemented(format!("{operation} is not available for {kernel}"))
    }

    /// Whether this error marks a feature gap rather than misuse or failure
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented(_))
    }
}
