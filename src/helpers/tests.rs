use super::linalg::*;
use super::prox::*;
use super::test_helpers::{assert_array2d_all_close, assert_array_all_close};
use crate::error::EmulatorError;
use ndarray::{array, Array2};

#[test]
fn soft_thresholding_works() {
    assert_eq!(soft_thresholding(3., 1.), 2.);
    assert_eq!(soft_thresholding(-3., 1.), -2.);
    assert_eq!(soft_thresholding(0.5, 1.), 0.);
}

#[test]
fn block_soft_thresholding_works() {
    let x = array![3., 4.];
    let res = block_soft_thresholding(x.view(), 2.5);
    assert_array_all_close(res.view(), array![1.5, 2.].view(), 1e-12);
    let res = block_soft_thresholding(x.view(), 5.);
    assert_array_all_close(res.view(), array![0., 0.].view(), 1e-12);
}

#[test]
fn cholesky_works() {
    let mat = array![[4., 12., -16.], [12., 37., -43.], [-16., -43., 98.]];
    let res = cholesky_factorization(mat.view()).unwrap();
    let ans = array![[2., 0., 0.], [6., 1., 0.], [-8., 5., 3.]];
    assert_array2d_all_close(res.view(), ans.view(), 1e-12);
}

#[test]
fn cholesky_returns_error() {
    let mat = Array2::<f64>::zeros((3, 3));
    match cholesky_factorization(mat.view()) {
        Err(EmulatorError::SingularMatrix) => (),
        _ => panic!("Should return an error but didn't"),
    }
}

#[test]
fn forward_substitution_works() {
    let mat = array![[3., 0., 0.], [1., 2., 0.], [-3., 42., 12.]];
    let res = forward_substitution(mat.view(), array![1., 1., 1.].view()).unwrap();
    let ans = array![0.333333, 0.333333, -1.];
    assert_array_all_close(res.view(), ans.view(), 1e-5);
}

#[test]
fn backward_substitution_works() {
    let mat = array![[3., 2., 1.], [0., 1., 1.], [0., 0., 2.]];
    let res = backward_substitution(mat.view(), array![1., 2., 3.].view()).unwrap();
    let ans = array![-0.5, 0.5, 1.5];
    assert_array_all_close(res.view(), ans.view(), 1e-5);
}

#[test]
fn backward_substitution_returns_error() {
    let mat = array![[3., 0., 1.], [0., 0., 1.], [0., 0., 2.3]];
    assert!(backward_substitution(mat.view(), array![1., 1., 1.].view()).is_err());
}

#[test]
fn solve_spd_works() {
    let mat = array![[26., 8., 15.], [8., 14., 5.], [15., 5., 14.]];
    let rhs = array![[1.], [1.], [1.]];
    let res = solve_spd(mat.view(), rhs.view()).unwrap();
    let ans = array![[-0.0225], [0.0575], [0.075]];
    assert_array2d_all_close(res.view(), ans.view(), 1e-5);
}
