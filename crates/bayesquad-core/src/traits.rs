//! Core traits for integrable kernels
//!
//! A quadrature kernel augments a covariance kernel `k(x1, x2)` with integrals
//! of `k` over a rectangular domain, taken with respect to one argument (the
//! kernel mean) or both (the kernel variance).
//!
//! Shape conventions, for `N` points in `D` dimensions:
//!
//! | Operation   | Shape      |
//! |-------------|------------|
//! | `k`         | (N, M)     |
//! | `dk_dx1`    | (D, N, M)  |
//! | `dkdiag_dx` | (D, N)     |
//! | `qk`        | (1, N)     |
//! | `kq`        | (N, 1)     |
//! | `dqk_dx`    | (D, N)     |
//! | `dkq_dx`    | (N, D)     |

use crate::{IntegralBounds, IntegrationMeasure, Result};
use ndarray::{Array2, Array3, ArrayView2};

/// Base trait for kernels that can be integrated over [`IntegralBounds`]
///
/// Implementers provide the raw kernel pass-through and the once/twice
/// integrated forms. The transposed variants `kq`, `dkq_dx` and the second
/// argument gradient `dk_dx2` are derived from the others and should not
/// normally be overridden.
pub trait QuadratureKernel: Send + Sync {
    /// The integration domain
    fn integral_bounds(&self) -> &IntegralBounds;

    /// The integration measure; `None` means Lebesgue
    fn measure(&self) -> Option<&dyn IntegrationMeasure>;

    /// Name(s) of the integration variable
    fn variable_names(&self) -> &str;

    /// Dimensionality of the integral
    fn input_dim(&self) -> usize {
        self.integral_bounds().dim()
    }

    /// Name of this kernel for debugging/logging
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// The unintegrated kernel `k(x1, x2)`
    fn k(&self, x1: ArrayView2<'_, f64>, x2: ArrayView2<'_, f64>) -> Result<Array2<f64>>;

    /// Gradient of `k(x1, x2)` with respect to `x1`
    fn dk_dx1(&self, x1: ArrayView2<'_, f64>, x2: ArrayView2<'_, f64>) -> Result<Array3<f64>>;

    /// Gradient of `k(x1, x2)` with respect to `x2`
    fn dk_dx2(&self, x1: ArrayView2<'_, f64>, x2: ArrayView2<'_, f64>) -> Result<Array3<f64>> {
        Ok(self.dk_dx1(x2, x1)?.permuted_axes([0, 2, 1]))
    }

    /// Gradient of the kernel diagonal `k(x, x)`
    fn dkdiag_dx(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>>;

    /// Kernel with the first argument integrated out (kernel mean), shape (1, N)
    fn qk(&self, x2: ArrayView2<'_, f64>) -> Result<Array2<f64>>;

    /// Kernel with the second argument integrated out, shape (N, 1)
    ///
    /// Exactly the transpose of [`QuadratureKernel::qk`].
    fn kq(&self, x1: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        Ok(self.qk(x1)?.reversed_axes())
    }

    /// Kernel integrated over both arguments
    fn qkq(&self) -> Result<f64>;

    /// Gradient of the kernel mean `qk` evaluated at `x2`, shape (D, N)
    fn dqk_dx(&self, x2: ArrayView2<'_, f64>) -> Result<Array2<f64>>;

    /// Gradient of `kq` evaluated at `x1`, shape (N, D)
    ///
    /// Exactly the transpose of [`QuadratureKernel::dqk_dx`].
    fn dkq_dx(&self, x1: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        Ok(self.dqk_dx(x1)?.reversed_axes())
    }
}
