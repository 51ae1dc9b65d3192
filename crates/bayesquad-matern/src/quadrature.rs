//! Matérn-3/2 product kernel with integrability under a general measure
//!
//! No closed form is provided for arbitrary measures: the raw kernel
//! operations work, while the integral operations report
//! [`Error::NotImplemented`]. Use
//! [`QuadratureProductMatern32LebesgueMeasure`](crate::QuadratureProductMatern32LebesgueMeasure)
//! for the Lebesgue measure.

use crate::kernel::ProductMatern32;
use bayesquad_core::{Error, IntegralBounds, IntegrationMeasure, QuadratureKernel, Result};
use ndarray::{Array2, Array3, ArrayView2};
use std::sync::Arc;
use tracing::{debug, warn};

/// Fail unless the kernel has one lengthscale per bound pair
pub(crate) fn check_kernel_matches_bounds(
    kern: &ProductMatern32,
    integral_bounds: &IntegralBounds,
) -> Result<()> {
    if kern.input_dim() != integral_bounds.dim() {
        return Err(Error::dimension_mismatch(
            integral_bounds.dim(),
            kern.input_dim(),
            "kernel lengthscales vs integral bounds",
        ));
    }
    Ok(())
}

/// Augments a [`ProductMatern32`] kernel with an integration domain and measure
#[derive(Debug, Clone)]
pub struct QuadratureMatern32<'a> {
    kern: &'a ProductMatern32,
    integral_bounds: &'a IntegralBounds,
    measure: Option<Arc<dyn IntegrationMeasure>>,
    variable_names: String,
}

impl<'a> QuadratureMatern32<'a> {
    /// `measure = None` stands for the Lebesgue measure
    pub fn new(
        kern: &'a ProductMatern32,
        integral_bounds: &'a IntegralBounds,
        measure: Option<Arc<dyn IntegrationMeasure>>,
    ) -> Result<Self> {
        check_kernel_matches_bounds(kern, integral_bounds)?;
        let qkern = Self {
            kern,
            integral_bounds,
            measure,
            variable_names: String::new(),
        };
        debug!(
            kernel = qkern.name(),
            input_dim = integral_bounds.dim(),
            measure = qkern.measure().map(|m| m.name()).unwrap_or("lebesgue"),
            "created quadrature kernel"
        );
        Ok(qkern)
    }

    /// Set the name(s) of the integration variable
    pub fn with_variable_names(mut self, variable_names: impl Into<String>) -> Self {
        self.variable_names = variable_names.into();
        self
    }

    pub fn lengthscales(&self) -> &[f64] {
        self.kern.lengthscales()
    }

    pub fn variance(&self) -> f64 {
        self.kern.variance()
    }

    fn unsupported<T>(&self, operation: &str) -> Result<T> {
        warn!(%operation, kernel = self.name(), "integral has no closed form for this measure");
        Err(Error::not_implemented(operation, "QuadratureMatern32"))
    }
}

impl QuadratureKernel for QuadratureMatern32<'_> {
    fn integral_bounds(&self) -> &IntegralBounds {
        self.integral_bounds
    }

    fn measure(&self) -> Option<&dyn IntegrationMeasure> {
        self.measure.as_deref()
    }

    fn variable_names(&self) -> &str {
        &self.variable_names
    }

    fn k(&self, x1: ArrayView2<'_, f64>, x2: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        self.kern.k(x1, x2)
    }

    fn dk_dx1(&self, x1: ArrayView2<'_, f64>, x2: ArrayView2<'_, f64>) -> Result<Array3<f64>> {
        self.kern.dk_dx1(x1, x2)
    }

    fn dkdiag_dx(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        self.kern.dkdiag_dx(x)
    }

    fn qk(&self, _x2: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        self.unsupported("qK")
    }

    fn qkq(&self) -> Result<f64> {
        self.unsupported("qKq")
    }

    fn dqk_dx(&self, _x2: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        self.unsupported("dqK_dx")
    }
}
