//! Product Matérn-3/2 kernel integrated under the Lebesgue measure
//!
//! Every integral of the product kernel over a box factorises into a product
//! of one-dimensional integrals, each of which has a closed form (see
//! [`crate::primitives`]). This module composes them:
//!
//! - `qk(x) = σ² Π_d qk_1d(x_d)`
//! - `qkq   = σ² Π_d qkq_1d`
//! - `dqk_dx(x)[d] = dqk_dx_1d(x_d) · σ² Π_{e≠d} qk_1d(x_e)`

use crate::kernel::ProductMatern32;
use crate::primitives::{dqk_dx_1d, qk_1d, qkq_1d};
use crate::quadrature::check_kernel_matches_bounds;
use bayesquad_core::validation::check_input_dim;
use bayesquad_core::{Error, IntegralBounds, IntegrationMeasure, QuadratureKernel, Result};
use ndarray::{Array1, Array2, Array3, ArrayView2, Axis};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// A product Matérn-3/2 kernel with integrability over the Lebesgue measure
///
/// Only finite integral bounds are supported. The kernel parameters and the
/// bounds are borrowed for the lifetime of the quadrature kernel and never
/// modified, so a single instance can be shared across threads.
///
/// # Example
///
/// ```rust
/// use bayesquad_core::{IntegralBounds, QuadratureKernel};
/// use bayesquad_matern::{ProductMatern32, QuadratureProductMatern32LebesgueMeasure};
/// use ndarray::array;
///
/// let kern = ProductMatern32::new(vec![1.0, 0.5], 2.0).unwrap();
/// let bounds = IntegralBounds::new("x", vec![(0.0, 1.0), (-1.0, 1.0)]).unwrap();
/// let qkern = QuadratureProductMatern32LebesgueMeasure::new(&kern, &bounds).unwrap();
///
/// let x = array![[0.5, 0.0], [0.1, 0.9]];
/// let qk = qkern.qk(x.view()).unwrap();
/// assert_eq!(qk.dim(), (1, 2));
/// assert!(qkern.qkq().unwrap() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct QuadratureProductMatern32LebesgueMeasure<'a> {
    kern: &'a ProductMatern32,
    integral_bounds: &'a IntegralBounds,
    variable_names: String,
}

impl<'a> QuadratureProductMatern32LebesgueMeasure<'a> {
    /// Wrap `kern` with integrability over `integral_bounds`
    ///
    /// Fails if the kernel and the bounds disagree on dimensionality, or if
    /// any bound is infinite.
    pub fn new(kern: &'a ProductMatern32, integral_bounds: &'a IntegralBounds) -> Result<Self> {
        check_kernel_matches_bounds(kern, integral_bounds)?;
        if !integral_bounds.is_finite() {
            return Err(Error::InvalidBounds(
                "the Lebesgue measure integral requires finite bounds".to_string(),
            ));
        }
        let qkern = Self {
            kern,
            integral_bounds,
            variable_names: String::new(),
        };
        debug!(
            kernel = qkern.name(),
            input_dim = integral_bounds.dim(),
            bounds = integral_bounds.name(),
            "created quadrature kernel"
        );
        Ok(qkern)
    }

    /// Set the name(s) of the integration variable
    pub fn with_variable_names(mut self, variable_names: impl Into<String>) -> Self {
        self.variable_names = variable_names.into();
        self
    }

    /// The wrapped kernel
    pub fn kern(&self) -> &ProductMatern32 {
        self.kern
    }

    pub fn lengthscales(&self) -> &[f64] {
        self.kern.lengthscales()
    }

    pub fn variance(&self) -> f64 {
        self.kern.variance()
    }

    /// Kernel mean with the dimensions in `skip` left out of the product, shape (1, N)
    ///
    /// The result is still scaled by the variance. With an empty `skip` this
    /// is exactly [`QuadratureKernel::qk`].
    pub fn qk_skipping(
        &self,
        x2: ArrayView2<'_, f64>,
        skip: &BTreeSet<usize>,
    ) -> Result<Array2<f64>> {
        check_input_dim(x2, self.input_dim(), "kernel mean points")?;
        if let Some(&dim) = skip.iter().find(|&&dim| dim >= self.input_dim()) {
            return Err(Error::InvalidParameter(format!(
                "skipped dimension {dim} is out of range for input dimension {}",
                self.input_dim()
            )));
        }
        trace!(n_points = x2.nrows(), skipped = skip.len(), "qK");

        let mut qk = Array1::<f64>::ones(x2.nrows());
        for (dim, (&domain, &ell)) in self
            .integral_bounds
            .bounds()
            .iter()
            .zip(self.lengthscales())
            .enumerate()
        {
            if skip.contains(&dim) {
                continue;
            }
            qk *= &qk_1d(x2.column(dim), domain, ell);
        }
        Ok((qk * self.variance()).insert_axis(Axis(0)))
    }
}

impl QuadratureKernel for QuadratureProductMatern32LebesgueMeasure<'_> {
    fn integral_bounds(&self) -> &IntegralBounds {
        self.integral_bounds
    }

    fn measure(&self) -> Option<&dyn IntegrationMeasure> {
        None
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

    fn qk(&self, x2: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        self.qk_skipping(x2, &BTreeSet::new())
    }

    fn qkq(&self) -> Result<f64> {
        trace!(input_dim = self.input_dim(), "qKq");
        let qkq: f64 = self
            .integral_bounds
            .bounds()
            .iter()
            .zip(self.lengthscales())
            .fold(1.0, |acc, (&domain, &ell)| acc * qkq_1d(domain, ell));
        Ok(self.variance() * qkq)
    }

    fn dqk_dx(&self, x2: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        check_input_dim(x2, self.input_dim(), "kernel mean gradient points")?;
        trace!(n_points = x2.nrows(), input_dim = self.input_dim(), "dqK_dx");

        let mut dqk_dx = Array2::zeros((self.input_dim(), x2.nrows()));
        for (dim, mut row) in dqk_dx.axis_iter_mut(Axis(0)).enumerate() {
            let domain = self.integral_bounds.bounds()[dim];
            let grad_term = dqk_dx_1d(x2.column(dim), domain, self.lengthscales()[dim]);
            let other_factors = self.qk_skipping(x2, &BTreeSet::from([dim]))?;
            row.assign(&(grad_term * &other_factors.row(0)));
        }
        Ok(dqk_dx)
    }
}
