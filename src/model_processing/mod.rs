//! Preparation of candidate models: selection from a registry, adaptation to
//! multi-output targets and wrapping into pipelines.

use crate::datasets::AsMultiTargets;
use crate::error::{EmulatorError, Result};
use crate::estimators::{Estimator, MultiOutputRegressor, Transformer};
use crate::pipeline::{Pipeline, SCALER_STEP};
use crate::registry::ModelRegistry;


/// Instantiates fresh models from the registry.
///
/// Without a subset every registered model is returned in registration
/// order. With a subset, the names are validated first and one model is
/// returned per name, in the order given.
pub fn get_models(
    registry: &ModelRegistry,
    model_subset: Option<&[&str]>,
) -> Result<Vec<Box<dyn Estimator>>> {
    match model_subset {
        None => Ok(registry.iter().map(|(_, factory)| factory()).collect()),
        Some(names) => {
            check_model_names(names, registry)?;
            names.iter().map(|name| registry.create(name)).collect()
        }
    }
}

/// Fails on the first name that is not registered.
pub fn check_model_names(names: &[&str], registry: &ModelRegistry) -> Result<()> {
    match names.iter().find(|name| !registry.contains(name)) {
        Some(name) => Err(EmulatorError::UnknownModel(name.to_string())),
        None => Ok(()),
    }
}

/// Wraps every single-output model in a [`MultiOutputRegressor`] when `y` has
/// more than one output. Models are returned in the same order, unfitted.
pub fn turn_models_into_multioutput<T: AsMultiTargets>(
    models: Vec<Box<dyn Estimator>>,
    y: T,
) -> Vec<Box<dyn Estimator>> {
    if !y.is_multi_output() {
        return models;
    }
    models
        .into_iter()
        .map(|model| {
            if model.tags().multioutput {
                model
            } else {
                tracing::debug!(model = model.name(), "wrapping in MultiOutputRegressor");
                Box::new(MultiOutputRegressor::new(model)) as Box<dyn Estimator>
            }
        })
        .collect()
}

/// Puts every model in a [`Pipeline`], preceded by its own unfitted copy of
/// `scaler` when `scale` is set.
pub fn wrap_models_in_pipeline(
    models: Vec<Box<dyn Estimator>>,
    scale: bool,
    scaler: &dyn Transformer,
) -> Vec<Pipeline> {
    models
        .into_iter()
        .map(|model| {
            let pipeline = Pipeline::new(model);
            if scale {
                pipeline.with_step(SCALER_STEP, scaler.clone_unfitted())
            } else {
                pipeline
            }
        })
        .collect()
}
