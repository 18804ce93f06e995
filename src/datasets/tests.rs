use ndarray::{array, Array1, Array2};

use super::*;
use crate::error::EmulatorError;

#[test]
fn test_single_output_targets_get_one_column() {
    let y = array![1., 2., 3.];
    assert_eq!(y.n_samples(), 3);
    assert_eq!(y.n_tasks(), 1);
    assert!(!y.is_multi_output());
    assert_eq!(y.as_multi_tasks(), array![[1.], [2.], [3.]]);
}

#[test]
fn test_multi_output_targets() {
    let y = array![[1., 2.], [3., 4.]];
    assert!(y.is_multi_output());
    assert!((&y).is_multi_output());
    assert!(!array![[1.], [2.]].is_multi_output());
}

#[test]
fn test_dataset_from_tuple() {
    let x = array![[1., 2.], [3., 4.], [5., 6.]];
    let dataset = DatasetBase::from((x.view(), array![7., 8., 9.]));
    assert_eq!(dataset.n_samples(), 3);
    assert_eq!(dataset.n_features(), 2);
    assert_eq!(dataset.n_tasks(), 1);
    assert!(dataset.validate().is_ok());
}

#[test]
fn test_select_rows() {
    let dataset = DatasetBase::new(
        array![[1., 2.], [3., 4.], [5., 6.]],
        array![[10., 11.], [20., 21.], [30., 31.]],
    );
    let subset = dataset.select(&[2, 0]);
    assert_eq!(subset.design_matrix(), array![[5., 6.], [1., 2.]]);
    assert_eq!(subset.targets(), array![[30., 31.], [10., 11.]]);
}

#[test]
fn test_check_dataset_errors() {
    let x = Array2::<f64>::zeros((3, 2));
    assert_eq!(
        check_dataset(x.view(), &Array1::<f64>::zeros(4)),
        Err(EmulatorError::ShapeMismatch {
            x_samples: 3,
            y_samples: 4
        })
    );
    assert_eq!(
        check_dataset(Array2::<f64>::zeros((0, 2)).view(), &Array1::<f64>::zeros(0)),
        Err(EmulatorError::EmptyDataset)
    );
    assert_eq!(
        check_dataset(Array2::<f64>::zeros((3, 0)).view(), &array![1., 0., 2.]),
        Err(EmulatorError::NoFeatures)
    );
    assert_eq!(
        check_dataset(x.view(), &array![1., f64::NAN, 2.]),
        Err(EmulatorError::ContainsNaN)
    );
    assert!(check_dataset(x.view(), &array![1., 0., 2.]).is_ok());
}

#[test]
fn test_check_n_features() {
    let x = Array2::<f64>::zeros((3, 2));
    assert!(check_n_features(x.view(), 2).is_ok());
    assert_eq!(
        check_n_features(x.view(), 5),
        Err(EmulatorError::FeatureMismatch {
            expected: 5,
            found: 2
        })
    );
}
