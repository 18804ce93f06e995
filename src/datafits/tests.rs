use ndarray::{array, Array1, Array2};

use super::*;
use crate::helpers::test_helpers::assert_array_all_close;

#[test]
fn test_initialization_quadratic() {
    let X = Array2::from_shape_vec((2, 3), vec![3.4, 2.1, 2.3, 3.4, -1.2, 0.2]).unwrap();
    let y = array![-3.4, 2.1];
    let mut df = Quadratic::new();
    df.initialize(X.view(), y.view());

    let true_lipschitz = array![11.56, 2.925, 2.665];
    assert_array_all_close(df.lipschitz(), true_lipschitz.view(), 1e-8);
}

#[test]
fn test_value_quadratic() {
    let y = array![-3.3, 0.1, 3.2];
    let Xw = array![1.3, -4.1, 1.2];
    let df = Quadratic::new();
    let val = df.value(y.view(), Xw.view());
    assert!((val - 42.8 / 6.).abs() < 1e-8);
}

#[test]
fn test_gradient_j_matches_full_gradient() {
    let X = array![[1.6, -1.3, 2.9], [10.8, -3.8, -0.1]];
    let y = array![1.4, -0.2];
    let w = array![0.2, -0.3, 1.5];
    let Xw = X.dot(&w);
    let mut df = Quadratic::new();
    df.initialize(X.view(), y.view());

    let full_grad = X.t().dot(&(&Xw - &y)) / 2.;
    let grad = Array1::from_iter((0..3).map(|j| df.gradient_j(X.view(), Xw.view(), j)));
    assert_array_all_close(grad.view(), full_grad.view(), 1e-10);
}

#[test]
fn test_multitask_gradient_j() {
    let X = array![[1., 2.], [3., 4.], [5., 6.]];
    let Y = array![[1., 0.], [0., 1.], [1., 1.]];
    let W = array![[0.1, 0.2], [0.3, -0.1]];
    let XW = X.dot(&W);
    let mut df = QuadraticMultiTask::new();
    df.initialize(X.view(), Y.view());

    let full_grad = X.t().dot(&(&XW - &Y)) / 3.;
    for j in 0..2 {
        let grad_j = df.gradient_j(X.view(), XW.view(), j);
        assert_array_all_close(grad_j.view(), full_grad.row(j), 1e-10);
    }
    assert_array_all_close(df.lipschitz(), array![35. / 3., 56. / 3.].view(), 1e-10);
}
