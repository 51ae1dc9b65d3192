//! Equivalence tests comparing the closed-form integrals with naive
//! numerical integration of the raw kernel

use approx::assert_relative_eq;
use bayesquad_core::{IntegralBounds, QuadratureKernel};
use bayesquad_matern::primitives::qk_1d;
use bayesquad_matern::{ProductMatern32, QuadratureProductMatern32LebesgueMeasure};
use ndarray::{array, Array1, Array2};

/// Test parameters for equivalence testing
struct TestParams {
    /// Relative tolerance for comparing results
    rel_tolerance: f64,
    /// Midpoint-rule nodes per dimension
    nodes_per_dim: usize,
}

impl Default for TestParams {
    fn default() -> Self {
        Self {
            rel_tolerance: 1e-4,
            nodes_per_dim: 500,
        }
    }
}

/// Tensor-product midpoint nodes over a 2-D box, with the weight of each node
fn midpoint_grid(bounds: &IntegralBounds, n: usize) -> (Array2<f64>, f64) {
    let [(a0, b0), (a1, b1)] = [bounds.bounds()[0], bounds.bounds()[1]];
    let (h0, h1) = ((b0 - a0) / n as f64, (b1 - a1) / n as f64);
    let nodes = Array2::from_shape_fn((n * n, 2), |(idx, dim)| {
        let (i, j) = (idx / n, idx % n);
        match dim {
            0 => a0 + (i as f64 + 0.5) * h0,
            _ => a1 + (j as f64 + 0.5) * h1,
        }
    });
    (nodes, h0 * h1)
}

/// Parameter sets spanning short, comparable and long lengthscales
fn test_cases() -> Vec<(&'static str, ProductMatern32, IntegralBounds)> {
    vec![
        (
            "unit_box",
            ProductMatern32::new(vec![1.0, 1.0], 1.0).unwrap(),
            IntegralBounds::new("x", vec![(0.0, 1.0), (0.0, 1.0)]).unwrap(),
        ),
        (
            "anisotropic",
            ProductMatern32::new(vec![0.3, 2.0], 2.5).unwrap(),
            IntegralBounds::new("x", vec![(-1.0, 0.5), (0.0, 2.0)]).unwrap(),
        ),
        (
            "long_lengthscales",
            ProductMatern32::new(vec![5.0, 8.0], 0.4).unwrap(),
            IntegralBounds::new("x", vec![(2.0, 3.0), (-0.5, 0.5)]).unwrap(),
        ),
    ]
}

#[test]
fn test_qk_matches_numerical_integral() {
    let params = TestParams::default();
    for (name, kern, bounds) in test_cases() {
        let qkern = QuadratureProductMatern32LebesgueMeasure::new(&kern, &bounds).unwrap();
        let (nodes, weight) = midpoint_grid(&bounds, params.nodes_per_dim);

        let (a0, b0) = bounds.bounds()[0];
        let (a1, b1) = bounds.bounds()[1];
        let x = array![
            [a0, a1],
            [0.5 * (a0 + b0), 0.5 * (a1 + b1)],
            [b0, 0.3 * a1 + 0.7 * b1],
            [0.9 * a0 + 0.1 * b0, b1],
        ];
        let qk = qkern.qk(x.view()).unwrap();
        let numeric =
            kern.k(nodes.view(), x.view()).unwrap().sum_axis(ndarray::Axis(0)) * weight;

        for i in 0..x.nrows() {
            assert_relative_eq!(
                qk[[0, i]],
                numeric[i],
                max_relative = params.rel_tolerance
            );
        }
        println!("{name}: qk agrees with midpoint integration");
    }
}

#[test]
fn test_qk_outside_domain_is_product_of_closed_forms() {
    for (_, kern, bounds) in test_cases() {
        let qkern = QuadratureProductMatern32LebesgueMeasure::new(&kern, &bounds).unwrap();
        let (a0, b0) = bounds.bounds()[0];
        let (a1, _) = bounds.bounds()[1];
        let x = array![[b0 + 0.5, a1 - 0.25], [a0 - 0.1, a1]];
        let qk = qkern.qk(x.view()).unwrap();

        let mut expected = Array1::from_elem(x.nrows(), kern.variance());
        for (dim, (&domain, &ell)) in bounds.bounds().iter().zip(kern.lengthscales()).enumerate() {
            expected *= &qk_1d(x.column(dim), domain, ell);
        }
        for i in 0..x.nrows() {
            assert!(qk[[0, i]].is_finite());
            assert_relative_eq!(qk[[0, i]], expected[i], max_relative = 1e-12);
        }
    }
}

#[test]
fn test_qkq_matches_numerical_integral() {
    let params = TestParams::default();
    for (name, kern, bounds) in test_cases() {
        let qkern = QuadratureProductMatern32LebesgueMeasure::new(&kern, &bounds).unwrap();
        let (nodes, weight) = midpoint_grid(&bounds, params.nodes_per_dim);

        let numeric = qkern.qk(nodes.view()).unwrap().sum() * weight;
        assert_relative_eq!(
            qkern.qkq().unwrap(),
            numeric,
            max_relative = params.rel_tolerance
        );
        println!("{name}: qkq agrees with midpoint integration");
    }
}

#[test]
fn test_kernel_mean_gradient_matches_integrated_kernel_gradient() {
    // d/dx ∫ k(t, x) dt = ∫ dk/dx2 (t, x) dt
    let params = TestParams::default();
    for (_, kern, bounds) in test_cases() {
        let qkern = QuadratureProductMatern32LebesgueMeasure::new(&kern, &bounds).unwrap();
        let (nodes, weight) = midpoint_grid(&bounds, params.nodes_per_dim);

        let (a0, b0) = bounds.bounds()[0];
        let (a1, b1) = bounds.bounds()[1];
        let x = array![[0.8 * a0 + 0.2 * b0, 0.4 * a1 + 0.6 * b1]];
        let grad = qkern.dqk_dx(x.view()).unwrap();
        let dk_dx2 = qkern.dk_dx2(nodes.view(), x.view()).unwrap();

        for dim in 0..2 {
            let numeric = dk_dx2.index_axis(ndarray::Axis(0), dim).sum() * weight;
            assert_relative_eq!(
                grad[[dim, 0]],
                numeric,
                max_relative = 1e-4,
                epsilon = 1e-6
            );
        }
    }
}
