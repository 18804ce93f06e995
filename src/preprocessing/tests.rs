use approx::assert_relative_eq;
use ndarray::{array, Axis};

use super::*;
use crate::helpers::test_helpers::assert_array2d_all_close;

#[test]
fn test_standard_scaler_zero_mean_unit_variance() {
    let x = array![[1., 10.], [2., 20.], [3., 30.], [4., 40.]];
    let mut scaler = Scaler::standard();
    let x_scaled = scaler.fit_transform(x.view()).unwrap();

    for column in x_scaled.axis_iter(Axis(1)) {
        assert_relative_eq!(column.mean().unwrap(), 0., epsilon = 1e-12);
        assert_relative_eq!(column.std(0.), 1., epsilon = 1e-12);
    }
}

#[test]
fn test_min_max_scaler_range() {
    let x = array![[-2., 5.], [0., 7.], [2., 9.]];
    let mut scaler = Scaler::new(ScalerType::MinMax);
    let x_scaled = scaler.fit_transform(x.view()).unwrap();
    assert_array2d_all_close(
        x_scaled.view(),
        array![[0., 0.], [0.5, 0.5], [1., 1.]].view(),
        1e-12,
    );
}

#[test]
fn test_max_abs_and_robust_scalers() {
    let x = array![[-4.], [1.], [2.]];
    let mut scaler = Scaler::new(ScalerType::MaxAbs);
    let x_scaled = scaler.fit_transform(x.view()).unwrap();
    assert_array2d_all_close(x_scaled.view(), array![[-1.], [0.25], [0.5]].view(), 1e-12);

    // median 3, quartiles 2 and 4
    let x = array![[1.], [2.], [3.], [4.], [5.]];
    let mut scaler = Scaler::new(ScalerType::Robust);
    let x_scaled = scaler.fit_transform(x.view()).unwrap();
    assert_array2d_all_close(
        x_scaled.view(),
        array![[-1.], [-0.5], [0.], [0.5], [1.]].view(),
        1e-12,
    );
}

#[test]
fn test_constant_column_is_only_centered() {
    let x = array![[3., 1.], [3., 2.], [3., 3.]];
    let mut scaler = Scaler::standard();
    let x_scaled = scaler.fit_transform(x.view()).unwrap();
    assert!(x_scaled.column(0).iter().all(|&v| v == 0.));
    assert!(x_scaled.iter().all(|v| v.is_finite()));
}

#[test]
fn test_none_scaler_is_identity() {
    let x = array![[3., -1.], [0.5, 2.]];
    let mut scaler = Scaler::new(ScalerType::None);
    let x_scaled = scaler.fit_transform(x.view()).unwrap();
    assert_array2d_all_close(x_scaled.view(), x.view(), 1e-15);
}

#[test]
fn test_inverse_transform_recovers_input() {
    let x = array![[1., -3.], [5., 0.], [2., 8.], [7., 1.]];
    for scaler_type in [
        ScalerType::Standard,
        ScalerType::MinMax,
        ScalerType::Robust,
        ScalerType::MaxAbs,
    ] {
        let mut scaler = Scaler::new(scaler_type);
        let x_scaled = scaler.fit_transform(x.view()).unwrap();
        let x_back = scaler.inverse_transform(x_scaled.view()).unwrap();
        assert_array2d_all_close(x_back.view(), x.view(), 1e-10);
    }
}

#[test]
fn test_transform_before_fit() {
    let scaler = Scaler::standard();
    let x = array![[1., 2.]];
    assert_eq!(
        scaler.transform(x.view()),
        Err(EmulatorError::NotFitted("Scaler".to_string()))
    );
}

#[test]
fn test_feature_mismatch() {
    let mut scaler = Scaler::standard();
    scaler.fit(array![[1., 2.], [3., 4.]].view()).unwrap();
    assert_eq!(
        scaler.transform(array![[1., 2., 3.]].view()),
        Err(EmulatorError::FeatureMismatch {
            expected: 2,
            found: 3
        })
    );
}

#[test]
fn test_clone_unfitted_keeps_type() {
    let mut scaler = Scaler::new(ScalerType::MinMax);
    scaler.fit(array![[1.], [2.]].view()).unwrap();
    let fresh = scaler.clone_unfitted();
    assert!(fresh.transform(array![[1.]].view()).is_err());
}
