//! Integration measures
//!
//! A measure weights the integration domain. The closed-form kernel integrals
//! in this workspace are derived for the Lebesgue measure, which is represented
//! by the *absence* of a measure object; the types here exist for kernels that
//! carry an explicit weighting.

use crate::{Error, IntegralBounds, Result};
use ndarray::{Array1, ArrayView2};
use std::fmt::Debug;

/// A (probability) measure over the integration domain
pub trait IntegrationMeasure: Debug + Send + Sync {
    /// Name of this measure for debugging/logging
    fn name(&self) -> &str;

    /// Density of the measure at each row of `x`, shape (N,)
    fn compute_density(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>>;
}

/// Uniform probability measure on a finite box
#[derive(Debug, Clone, PartialEq)]
pub struct UniformMeasure {
    bounds: IntegralBounds,
    density: f64,
}

impl UniformMeasure {
    /// Requires finite bounds so the density `1 / volume` is well defined
    pub fn new(bounds: IntegralBounds) -> Result<Self> {
        if !bounds.is_finite() {
            return Err(Error::InvalidBounds(
                "uniform measure requires finite bounds".to_string(),
            ));
        }
        let density = 1.0 / bounds.volume();
        Ok(Self { bounds, density })
    }

    pub fn bounds(&self) -> &IntegralBounds {
        &self.bounds
    }

    /// Constant density inside the box
    pub fn density(&self) -> f64 {
        self.density
    }
}

impl IntegrationMeasure for UniformMeasure {
    fn name(&self) -> &str {
        "UniformMeasure"
    }

    fn compute_density(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        let inside = self.bounds.check_in_domain(x)?;
        Ok(inside.mapv(|is_inside| if is_inside { self.density } else { 0.0 }))
    }
}
