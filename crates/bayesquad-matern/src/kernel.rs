//! Product Matérn-3/2 covariance kernel
//!
//! The kernel is a product of one-dimensional Matérn-3/2 kernels with one
//! lengthscale per dimension and a single global variance:
//!
//! ```text
//! k(x1, x2) = σ² Π_d (1 + √3 r_d / ℓ_d) exp(-√3 r_d / ℓ_d),   r_d = |x1_d - x2_d|
//! ```

use bayesquad_core::validation::{check_input_dim, check_positive};
use bayesquad_core::{Error, Result};
use ndarray::{Array2, Array3, ArrayView2};
use serde::{Deserialize, Serialize};

pub(crate) const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Matérn-3/2 product kernel parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProductMatern32")]
pub struct ProductMatern32 {
    lengthscales: Vec<f64>,
    variance: f64,
}

#[derive(Deserialize)]
struct RawProductMatern32 {
    lengthscales: Vec<f64>,
    variance: f64,
}

impl TryFrom<RawProductMatern32> for ProductMatern32 {
    type Error = Error;

    fn try_from(raw: RawProductMatern32) -> Result<Self> {
        Self::new(raw.lengthscales, raw.variance)
    }
}

impl ProductMatern32 {
    /// Create a kernel with one lengthscale per input dimension
    pub fn new(lengthscales: Vec<f64>, variance: f64) -> Result<Self> {
        if lengthscales.is_empty() {
            return Err(Error::InvalidParameter(
                "at least one lengthscale is required".to_string(),
            ));
        }
        for &ell in &lengthscales {
            check_positive(ell, "lengthscale")?;
        }
        check_positive(variance, "variance")?;
        Ok(Self {
            lengthscales,
            variance,
        })
    }

    /// Create a kernel sharing one lengthscale across `input_dim` dimensions
    pub fn with_uniform_lengthscale(
        input_dim: usize,
        lengthscale: f64,
        variance: f64,
    ) -> Result<Self> {
        Self::new(vec![lengthscale; input_dim], variance)
    }

    pub fn lengthscales(&self) -> &[f64] {
        &self.lengthscales
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn input_dim(&self) -> usize {
        self.lengthscales.len()
    }

    /// Kernel matrix between the rows of `x1` (N, D) and `x2` (M, D), shape (N, M)
    pub fn k(&self, x1: ArrayView2<'_, f64>, x2: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        check_input_dim(x1, self.input_dim(), "kernel argument x1")?;
        check_input_dim(x2, self.input_dim(), "kernel argument x2")?;

        let mut k = Array2::from_elem((x1.nrows(), x2.nrows()), self.variance);
        for (dim, &ell) in self.lengthscales.iter().enumerate() {
            let col1 = x1.column(dim);
            let col2 = x2.column(dim);
            for ((i, j), kij) in k.indexed_iter_mut() {
                *kij *= matern32_factor(col1[i] - col2[j], ell);
            }
        }
        Ok(k)
    }

    /// Gradient of `k(x1, x2)` with respect to `x1`, shape (D, N, M)
    pub fn dk_dx1(&self, x1: ArrayView2<'_, f64>, x2: ArrayView2<'_, f64>) -> Result<Array3<f64>> {
        check_input_dim(x1, self.input_dim(), "kernel argument x1")?;
        check_input_dim(x2, self.input_dim(), "kernel argument x2")?;

        let input_dim = self.input_dim();
        let mut grad = Array3::zeros((input_dim, x1.nrows(), x2.nrows()));
        let mut factors = vec![0.0; input_dim];
        for (i, row1) in x1.rows().into_iter().enumerate() {
            for (j, row2) in x2.rows().into_iter().enumerate() {
                for (dim, factor) in factors.iter_mut().enumerate() {
                    *factor = matern32_factor(row1[dim] - row2[dim], self.lengthscales[dim]);
                }
                for dim in 0..input_dim {
                    // product rule: only factor `dim` depends on x1[dim]
                    let others: f64 = factors
                        .iter()
                        .enumerate()
                        .filter(|&(other, _)| other != dim)
                        .map(|(_, f)| f)
                        .product();
                    let diff = row1[dim] - row2[dim];
                    grad[[dim, i, j]] =
                        self.variance * matern32_factor_grad(diff, self.lengthscales[dim]) * others;
                }
            }
        }
        Ok(grad)
    }

    /// Gradient of the diagonal `k(x, x) = σ²`, which is identically zero, shape (D, N)
    pub fn dkdiag_dx(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        check_input_dim(x, self.input_dim(), "kernel diagonal points")?;
        Ok(Array2::zeros((self.input_dim(), x.nrows())))
    }
}

/// One-dimensional unscaled Matérn-3/2 kernel as a function of `diff = x1 - x2`
#[inline]
fn matern32_factor(diff: f64, ell: f64) -> f64 {
    let a = SQRT_3 * diff.abs() / ell;
    (1.0 + a) * (-a).exp()
}

/// Derivative of [`matern32_factor`] with respect to `x1`
#[inline]
fn matern32_factor_grad(diff: f64, ell: f64) -> f64 {
    let a = SQRT_3 * diff.abs() / ell;
    -3.0 * diff / (ell * ell) * (-a).exp()
}
