use ndarray::array;

use super::*;
use crate::helpers::test_helpers::assert_array_all_close;

#[test]
fn test_value_l1() {
    let a = array![3.4, 2.1, -2.3, -0.3, 4.5];
    let pen = L1::new(3.2);
    let val = pen.value(a.view());
    assert!((val - 40.32).abs() < 1e-8);
}

#[test]
fn test_prox_l1() {
    let pen = L1::new(2.);
    assert!((pen.prox(0.3, 0.5) - 0.).abs() < 1e-12);
    assert!((pen.prox(-12.4, 0.5) + 11.4).abs() < 1e-12);
}

#[test]
fn test_subdiff_dist_l1() {
    let w = array![-3.3, 0.1, 3.2];
    let grad = array![0.4, 3.2, -3.4];
    let pen = L1::new(1.);
    let (subdiff_dist, max_dist) = pen.subdiff_distance(w.view(), grad.view());
    let res = array![0.6, 4.2, 2.4];
    assert_array_all_close(subdiff_dist.view(), res.view(), 1e-8);
    assert!((max_dist - 4.2).abs() < 1e-8);
}

#[test]
fn test_subdiff_dist_l1_null_weight() {
    let w = array![0., 0.];
    let grad = array![0.4, -3.];
    let pen = L1::new(1.);
    let (subdiff_dist, max_dist) = pen.subdiff_distance(w.view(), grad.view());
    assert_array_all_close(subdiff_dist.view(), array![0., 2.].view(), 1e-12);
    assert_eq!(max_dist, 2.);
}

#[test]
fn test_value_l21() {
    let W = array![[3., 4.], [0., 0.], [-6., 8.]];
    let pen = L21::new(0.5);
    assert!((pen.value(W.view()) - 7.5).abs() < 1e-12);
}

#[test]
fn test_subdiff_dist_l21() {
    let W = array![[3., 4.], [0., 0.]];
    let grad = array![[-0.6, -0.8], [3., 4.]];
    let pen = L21::new(1.);
    let (subdiff_dist, max_dist) = pen.subdiff_distance(W.view(), grad.view());
    assert_array_all_close(subdiff_dist.view(), array![0., 4.].view(), 1e-12);
    assert_eq!(max_dist, 4.);
}
