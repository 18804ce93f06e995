use super::*;
use crate::estimators::Lasso;

#[test]
fn test_default_registry_order() {
    let registry = ModelRegistry::default();
    assert_eq!(
        registry.names(),
        vec![
            "GaussianProcess",
            "RandomForest",
            "GradientBoosting",
            "SecondOrderPolynomial",
            "Lasso",
            "MultiTaskLasso"
        ]
    );
    assert_eq!(registry.len(), 6);
    assert!(!registry.is_empty());
}

#[test]
fn test_factories_match_their_names() {
    let registry = ModelRegistry::default();
    for (name, factory) in registry.iter() {
        assert_eq!(factory().name(), name);
    }
}

#[test]
fn test_create_unknown_model() {
    let registry = ModelRegistry::default();
    assert_eq!(
        registry.create("NeuralNet").unwrap_err(),
        EmulatorError::UnknownModel("NeuralNet".to_string())
    );
}

#[test]
fn test_register_and_duplicate() {
    let registry = ModelRegistry::new();
    assert!(registry.is_empty());

    let registry = registry
        .register("Lasso", || Box::new(Lasso::default()))
        .unwrap();
    assert!(registry.contains("Lasso"));
    assert_eq!(registry.create("Lasso").unwrap().name(), "Lasso");

    let err = registry
        .register("Lasso", || Box::new(Lasso::default()))
        .unwrap_err();
    assert_eq!(err, EmulatorError::DuplicateModel("Lasso".to_string()));
}

#[test]
fn test_create_returns_fresh_instances() {
    let registry = ModelRegistry::default();
    let a = registry.create("Lasso").unwrap();
    let b = registry.create("Lasso").unwrap();
    let x = ndarray::array![[1.]];
    assert!(a.predict(x.view()).is_err());
    assert!(b.predict(x.view()).is_err());
}
