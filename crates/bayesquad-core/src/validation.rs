//! Shape and parameter checks shared by kernel implementations

use crate::{Error, Result};
use ndarray::ArrayView2;

/// Fail unless `x` has exactly `input_dim` columns
#[inline]
pub fn check_input_dim(x: ArrayView2<'_, f64>, input_dim: usize, context: &str) -> Result<()> {
    if x.ncols() != input_dim {
        return Err(Error::dimension_mismatch(input_dim, x.ncols(), context));
    }
    Ok(())
}

/// Fail unless `value` is finite and strictly positive
#[inline]
pub fn check_positive(value: f64, name: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "{name} must be finite and positive, got {value}"
        )));
    }
    Ok(())
}
