//! Axis-aligned rectangular integration domains

use crate::validation::check_input_dim;
use crate::{Error, Result};
use ndarray::{Array1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

/// Integral bounds of a hyper-rectangle `[lb_1, ub_1] x ... x [lb_D, ub_D]`
///
/// Infinite bounds can be stored here; whether an integral supports them is
/// decided by the kernel that consumes the container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawIntegralBounds")]
pub struct IntegralBounds {
    name: String,
    bounds: Vec<(f64, f64)>,
}

/// Unvalidated wire form, checked through [`IntegralBounds::new`]
#[derive(Deserialize)]
struct RawIntegralBounds {
    name: String,
    bounds: Vec<(f64, f64)>,
}

impl TryFrom<RawIntegralBounds> for IntegralBounds {
    type Error = Error;

    fn try_from(raw: RawIntegralBounds) -> Result<Self> {
        Self::new(raw.name, raw.bounds)
    }
}

impl IntegralBounds {
    /// Create bounds from one `(lower, upper)` pair per dimension
    ///
    /// Fails if no pair is given, or if any pair is not strictly ordered
    /// (which also rejects NaN).
    pub fn new(name: impl Into<String>, bounds: Vec<(f64, f64)>) -> Result<Self> {
        if bounds.is_empty() {
            return Err(Error::InvalidBounds(
                "at least one (lower, upper) pair is required".to_string(),
            ));
        }
        for (dim, &(lower, upper)) in bounds.iter().enumerate() {
            if !(lower < upper) {
                return Err(Error::InvalidBounds(format!(
                    "lower bound {lower} is not below upper bound {upper} in dimension {dim}"
                )));
            }
        }
        Ok(Self {
            name: name.into(),
            bounds,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `(lower, upper)` pairs, one per dimension
    pub fn bounds(&self) -> &[(f64, f64)] {
        &self.bounds
    }

    /// Number of dimensions of the domain
    pub fn dim(&self) -> usize {
        self.bounds.len()
    }

    /// Lower and upper bounds as two arrays of length D
    pub fn lower_and_upper_bounds(&self) -> (Array1<f64>, Array1<f64>) {
        let lower = self.bounds.iter().map(|&(lb, _)| lb).collect();
        let upper = self.bounds.iter().map(|&(_, ub)| ub).collect();
        (lower, upper)
    }

    /// True if every bound is finite
    pub fn is_finite(&self) -> bool {
        self.bounds
            .iter()
            .all(|&(lb, ub)| lb.is_finite() && ub.is_finite())
    }

    /// Lebesgue volume of the domain (infinite if any bound is)
    pub fn volume(&self) -> f64 {
        self.bounds.iter().map(|&(lb, ub)| ub - lb).product()
    }

    /// For each row of `x`, whether it lies in the closed box
    pub fn check_in_domain(&self, x: ArrayView2<'_, f64>) -> Result<Array1<bool>> {
        check_input_dim(x, self.dim(), "domain membership points")?;
        Ok(x
            .axis_iter(Axis(0))
            .map(|row| {
                row.iter()
                    .zip(&self.bounds)
                    .all(|(&xi, &(lb, ub))| lb <= xi && xi <= ub)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_valid_bounds() {
        let bounds = IntegralBounds::new("x", vec![(0.0, 1.0), (-2.0, 3.0)]).unwrap();
        assert_eq!(bounds.dim(), 2);
        assert_eq!(bounds.name(), "x");
        assert_eq!(bounds.bounds()[1], (-2.0, 3.0));
        assert!(bounds.is_finite());
        assert_relative_eq!(bounds.volume(), 5.0);

        let (lower, upper) = bounds.lower_and_upper_bounds();
        assert_eq!(lower, array![0.0, -2.0]);
        assert_eq!(upper, array![1.0, 3.0]);
    }

    #[test]
    fn test_rejects_bad_bounds() {
        assert!(matches!(
            IntegralBounds::new("x", vec![]),
            Err(Error::InvalidBounds(_))
        ));
        assert!(matches!(
            IntegralBounds::new("x", vec![(0.0, 1.0), (1.0, 1.0)]),
            Err(Error::InvalidBounds(_))
        ));
        assert!(matches!(
            IntegralBounds::new("x", vec![(2.0, 1.0)]),
            Err(Error::InvalidBounds(_))
        ));
        assert!(matches!(
            IntegralBounds::new("x", vec![(f64::NAN, 1.0)]),
            Err(Error::InvalidBounds(_))
        ));
    }

    #[test]
    fn test_infinite_bounds_are_representable() {
        let bounds = IntegralBounds::new("x", vec![(f64::NEG_INFINITY, 0.0)]).unwrap();
        assert!(!bounds.is_finite());
        assert!(bounds.volume().is_infinite());
    }

    #[test]
    fn test_check_in_domain() {
        let bounds = IntegralBounds::new("x", vec![(0.0, 1.0), (0.0, 2.0)]).unwrap();
        let x = array![[0.5, 1.0], [1.0, 2.0], [1.5, 1.0], [0.5, -0.1]];
        let inside = bounds.check_in_domain(x.view()).unwrap();
        assert_eq!(inside, array![true, true, false, false]);

        let wrong = array![[0.5, 1.0, 0.0]];
        assert!(matches!(
            bounds.check_in_domain(wrong.view()),
            Err(Error::DimensionMismatch { expected: 2, actual: 3, .. })
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let bounds = IntegralBounds::new("x", vec![(0.0, 1.0)]).unwrap();
        let json = serde_json::to_string(&bounds).unwrap();
        let back: IntegralBounds = serde_json::from_str(&json).unwrap();
        assert_eq!(bounds, back);

        let unordered = r#"{"name":"x","bounds":[[1.0,0.0]]}"#;
        assert!(serde_json::from_str::<IntegralBounds>(unordered).is_err());
    }
}
