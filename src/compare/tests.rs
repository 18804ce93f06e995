use ndarray::{Array1, Array2, Axis};
use proptest::prelude::*;

use super::*;
use crate::error::EmulatorError;
use crate::estimators::{
    GaussianProcess, GradientBoosting, Lasso, MultiTaskLasso, RandomForest,
    SecondOrderPolynomial,
};
use crate::helpers::test_helpers::{generate_random_data, generate_simulation_data};

fn small_forest() -> RandomForest {
    RandomForest::new(RandomForest::params().n_estimators(10).random_state(Some(0)))
}

fn sorted_keys(scores: &Scores) -> Vec<String> {
    let mut keys: Vec<String> = scores.iter().map(|(k, _)| k.clone()).collect();
    keys.sort();
    keys
}

#[test]
fn test_compare_default_models() {
    let (x, y) = generate_simulation_data(50, 3);
    let scores = compare(x.view(), &y, 5, None).unwrap();

    assert_eq!(sorted_keys(&scores), vec!["GaussianProcess", "RandomForest"]);
    assert!(scores.iter().all(|(_, s)| s.is_finite()));
}

#[test]
fn test_compare_given_models() {
    let (x, y) = generate_random_data(50, 4);
    let models: Vec<Box<dyn Estimator>> =
        vec![Box::new(small_forest()), Box::new(GaussianProcess::default())];
    let scores = compare(x.view(), &y, 5, Some(models)).unwrap();

    assert_eq!(scores.len(), 2);
    assert!(scores.get("RandomForest").unwrap().is_finite());
    assert!(scores.get("GaussianProcess").unwrap().is_finite());
}

#[test]
fn test_linear_model_wins_on_linear_data() {
    let (x, y) = generate_random_data(60, 3);
    let models: Vec<Box<dyn Estimator>> = vec![
        Box::new(Lasso::new(Lasso::params().alpha(1e-4))),
        Box::new(small_forest()),
    ];
    let scores = compare(x.view(), &y, 3, Some(models)).unwrap();
    assert!(scores.get("Lasso").unwrap() > 0.95);
    assert_eq!(scores.best().unwrap().0, "Lasso");
}

#[test]
fn test_compare_shape_mismatch() {
    let x = Array2::<f64>::zeros((10, 2));
    let y = Array1::<f64>::zeros(9);
    assert_eq!(
        compare(x.view(), &y, 5, None),
        Err(EmulatorError::ShapeMismatch {
            x_samples: 10,
            y_samples: 9
        })
    );
}

#[test]
fn test_compare_nan() {
    let (mut x, y) = generate_random_data(20, 2);
    x[[3, 1]] = f64::NAN;
    assert_eq!(compare(x.view(), &y, 5, None), Err(EmulatorError::ContainsNaN));

    let (x, mut y) = generate_random_data(20, 2);
    y[7] = f64::NAN;
    assert_eq!(compare(x.view(), &y, 5, None), Err(EmulatorError::ContainsNaN));
}

#[test]
fn test_compare_invalid_folds() {
    let (x, y) = generate_random_data(4, 2);
    assert_eq!(
        compare(x.view(), &y, 5, None),
        Err(EmulatorError::InvalidFolds {
            n_splits: 5,
            n_samples: 4
        })
    );
    assert!(matches!(
        compare(x.view(), &y, 1, None),
        Err(EmulatorError::InvalidFolds { .. })
    ));
}

#[test]
fn test_cross_validate_without_folds() {
    let (x, y) = generate_random_data(12, 2);
    let dataset = DatasetBase::new(x, &y);
    let mut model = Lasso::default();
    assert_eq!(
        cross_validate(&dataset, &[], &mut model),
        Err(EmulatorError::InvalidFolds {
            n_splits: 0,
            n_samples: 12
        })
    );
}

#[test]
fn test_compare_without_features() {
    let x = Array2::<f64>::zeros((20, 0));
    let y = Array1::from_iter((0..20).map(|i| i as f64));
    assert_eq!(compare(x.view(), &y, 5, None), Err(EmulatorError::NoFeatures));

    let models: Vec<Box<dyn Estimator>> = vec![Box::new(GradientBoosting::default())];
    assert_eq!(
        compare(x.view(), &y, 5, Some(models)),
        Err(EmulatorError::NoFeatures)
    );
}

#[test]
fn test_fold_error_aborts_comparison() {
    let (x, y) = generate_simulation_data(20, 2);
    let models: Vec<Box<dyn Estimator>> =
        vec![Box::new(SecondOrderPolynomial::default()), Box::new(Lasso::default())];
    assert_eq!(
        compare(x.view(), &y, 4, Some(models)),
        Err(EmulatorError::MultiOutputUnsupported("Lasso".to_string()))
    );
}

#[test]
fn test_shared_name_keeps_last_score() {
    let (x, y) = generate_random_data(30, 3);
    let models: Vec<Box<dyn Estimator>> = vec![
        Box::new(Lasso::new(Lasso::params().alpha(1e3))),
        Box::new(Lasso::new(Lasso::params().alpha(1e-4))),
    ];
    let scores = compare(x.view(), &y, 3, Some(models)).unwrap();
    assert_eq!(scores.len(), 1);
    // the first model predicts a constant, only the second scores this high
    assert!(scores.get("Lasso").unwrap() > 0.9);
}

#[test]
fn test_cross_validate_uses_every_fold() {
    let (x, y) = generate_random_data(12, 2);
    let y = y.insert_axis(Axis(1));
    let splits = crate::model_selection::KFold::new(3)
        .with_random_state(Some(1))
        .split(12)
        .unwrap();
    let dataset = DatasetBase::new(x.clone(), &y);
    let mut model = Lasso::new(Lasso::params().alpha(1e-4));
    let score = cross_validate(&dataset, &splits, &mut model).unwrap();

    let mut manual = 0.;
    for (train, test) in &splits {
        let mut m = Lasso::new(Lasso::params().alpha(1e-4));
        m.fit(x.select(Axis(0), train).view(), y.select(Axis(0), train).view())
            .unwrap();
        manual += m
            .score(x.select(Axis(0), test).view(), y.select(Axis(0), test).view())
            .unwrap();
    }
    approx::assert_relative_eq!(score, manual / 3., epsilon = 1e-12);
}

fn seeded_registry() -> ModelRegistry {
    ModelRegistry::new()
        .register("RandomForest", || Box::new(small_forest()))
        .unwrap()
        .register("GradientBoosting", || {
            Box::new(GradientBoosting::new(
                GradientBoosting::params()
                    .n_estimators(20)
                    .subsample(0.8)
                    .random_state(Some(3)),
            ))
        })
        .unwrap()
        .register("MultiTaskLasso", || Box::new(MultiTaskLasso::default()))
        .unwrap()
}

#[test]
fn test_comparison_runs_full_chain() {
    let (x, y) = generate_simulation_data(40, 3);
    let comparison = Comparison::new(Comparison::params().cv(4).random_state(Some(11))).unwrap();
    let scores = comparison.run(&seeded_registry(), x.view(), &y).unwrap();

    assert_eq!(
        sorted_keys(&scores),
        vec!["GradientBoosting", "MultiTaskLasso", "RandomForest"]
    );
    assert!(scores.iter().all(|(_, s)| s.is_finite()));
}

#[test]
fn test_seeded_comparison_is_reproducible() {
    let (x, y) = generate_simulation_data(30, 2);
    let comparison = Comparison::new(Comparison::params().cv(3).random_state(Some(5))).unwrap();
    let registry = seeded_registry();
    let first = comparison.run(&registry, x.view(), &y).unwrap();
    let second = comparison.run(&registry, x.view(), &y).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_comparison_model_subset() {
    let (x, y) = generate_simulation_data(30, 2);
    let comparison = Comparison::new(
        Comparison::params()
            .cv(3)
            .scale(false)
            .model_subset(&["Lasso", "SecondOrderPolynomial"]),
    )
    .unwrap();
    let scores = comparison
        .run(&ModelRegistry::default(), x.view(), &y)
        .unwrap();
    assert_eq!(sorted_keys(&scores), vec!["Lasso", "SecondOrderPolynomial"]);

    let comparison =
        Comparison::new(Comparison::params().model_subset(&["Lasso", "Kriging"])).unwrap();
    assert_eq!(
        comparison.run(&ModelRegistry::default(), x.view(), &y),
        Err(EmulatorError::UnknownModel("Kriging".to_string()))
    );
}

#[test]
fn test_compare_params_validation() {
    assert!(Comparison::new(Comparison::params().cv(1)).is_err());
    let config = Comparison::new(Comparison::params()).unwrap();
    assert_eq!(config.config().cv(), 5);
    assert!(config.config().scale());
    assert_eq!(config.config().random_state(), None);
    assert_eq!(config.config().model_subset(), None);

    let valid = CompareParams::new()
        .cv(3)
        .scaler_type(crate::preprocessing::ScalerType::Robust)
        .check_unwrap();
    assert_eq!(valid.cv(), 3);
    assert_eq!(valid.scaler_type(), crate::preprocessing::ScalerType::Robust);
}

#[test]
fn test_scores_best() {
    let mut scores = Scores::new();
    assert!(scores.best().is_none());
    scores.insert("A", 0.2);
    scores.insert("B", 0.9);
    scores.insert("C", -1.);
    assert_eq!(scores.best(), Some(("B", 0.9)));
    assert!(scores.contains("C"));
    assert_eq!(scores.insert("A", 0.5), Some(0.2));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_compare_keys_match_model_names(
        n_samples in 10usize..40,
        n_features in 1usize..4,
        cv in 2usize..6,
    ) {
        let (x, y) = generate_random_data(n_samples, n_features);
        let models: Vec<Box<dyn Estimator>> = vec![
            Box::new(Lasso::default()),
            Box::new(SecondOrderPolynomial::default()),
        ];
        let scores = compare(x.view(), &y, cv, Some(models)).unwrap();
        prop_assert_eq!(sorted_keys(&scores), vec!["Lasso", "SecondOrderPolynomial"]);
        prop_assert!(scores.iter().all(|(_, s)| s.is_finite()));
    }

    #[test]
    fn test_compare_rejects_row_mismatch(n_x in 5usize..30, n_y in 5usize..30) {
        prop_assume!(n_x != n_y);
        let x = Array2::<f64>::zeros((n_x, 2));
        let y = Array1::<f64>::zeros(n_y);
        let is_shape_mismatch = matches!(
            compare(x.view(), &y, 2, None),
            Err(EmulatorError::ShapeMismatch { .. })
        );
        prop_assert!(is_shape_mismatch);
    }
}
