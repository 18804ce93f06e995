//! Cross-validated comparison of emulators.
//!
//! [`compare`] scores a list of candidate models on the same k-fold split of
//! a dataset and reports the mean held-out score of each. [`Comparison`] runs
//! the whole preparation chain first: selecting models from a
//! [`ModelRegistry`], adapting single-output models to multi-output targets
//! and wrapping every model in a scaling [`Pipeline`](crate::pipeline::Pipeline).

use ndarray::ArrayView2;

use crate::datasets::{check_dataset, AsMultiTargets, DatasetBase};
use crate::error::{EmulatorError, Result};
use crate::estimators::param_guard::ParamGuard;
use crate::estimators::{Estimator, GaussianProcess, RandomForest};
use crate::model_processing::{get_models, turn_models_into_multioutput, wrap_models_in_pipeline};
use crate::model_selection::{KFold, Split};
use crate::preprocessing::Scaler;
use crate::registry::ModelRegistry;

mod hyperparams;
mod scores;

pub use hyperparams::{CompareParams, CompareValidParams};
pub use scores::Scores;

#[cfg(test)]
mod tests;

/// The models compared when none are given.
pub fn default_models() -> Vec<Box<dyn Estimator>> {
    vec![
        Box::new(GaussianProcess::default()),
        Box::new(RandomForest::default()),
    ]
}

/// Compares models with shuffled k-fold cross-validation.
///
/// Every model is fitted and scored on the same `cv` folds, and its scores
/// are averaged. The result maps each model's [`Estimator::name`] to its mean
/// score; a later model sharing the name of an earlier one replaces its entry.
/// `models` defaults to a Gaussian process and a random forest.
///
/// The inputs are validated before any fitting, and the first error raised
/// while fitting or scoring aborts the comparison.
pub fn compare<T: AsMultiTargets>(
    x: ArrayView2<f64>,
    y: T,
    cv: usize,
    models: Option<Vec<Box<dyn Estimator>>>,
) -> Result<Scores> {
    check_dataset(x, &y)?;
    let splits = KFold::new(cv).split(x.nrows())?;
    let dataset = DatasetBase::new(x.to_owned(), &y);
    let mut models = models.unwrap_or_else(default_models);
    cross_validate_all(&dataset, &splits, &mut models)
}

fn cross_validate_all(
    dataset: &DatasetBase,
    splits: &[Split],
    models: &mut [Box<dyn Estimator>],
) -> Result<Scores> {
    let mut scores = Scores::new();
    for model in models.iter_mut() {
        let score = cross_validate(dataset, splits, model.as_mut())?;
        tracing::info!(model = model.name(), score, "cross-validation done");
        if let Some(previous) = scores.insert(model.name(), score) {
            tracing::warn!(
                model = model.name(),
                previous,
                "several models share this name, keeping the last score"
            );
        }
    }
    Ok(scores)
}

/// Mean held-out score of `model` over the folds. An empty list of folds is
/// rejected.
pub fn cross_validate(
    dataset: &DatasetBase,
    splits: &[Split],
    model: &mut dyn Estimator,
) -> Result<f64> {
    if splits.is_empty() {
        return Err(EmulatorError::InvalidFolds {
            n_splits: 0,
            n_samples: dataset.n_samples(),
        });
    }
    let mut total = 0.;
    for (fold, (train, test)) in splits.iter().enumerate() {
        let train = dataset.select(train);
        let test = dataset.select(test);

        model.fit(train.design_matrix(), train.targets())?;
        let score = model.score(test.design_matrix(), test.targets())?;
        tracing::debug!(model = model.name(), fold, score, "fold scored");
        total += score;
    }
    Ok(total / splits.len() as f64)
}

/// A configured comparison of the emulators of a registry
///
/// ```ignore
/// let comparison = Comparison::new(CompareParams::new().cv(3).random_state(Some(0)))?;
/// let scores = comparison.run(&ModelRegistry::default(), x.view(), &y)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    params: CompareValidParams,
}

impl Comparison {
    pub fn params() -> CompareParams {
        CompareParams::new()
    }

    pub fn new(params: CompareParams) -> Result<Comparison> {
        Ok(Comparison {
            params: params.check()?,
        })
    }

    pub fn config(&self) -> &CompareValidParams {
        &self.params
    }

    /// Builds the candidate models from `registry` and compares them on
    /// `(x, y)`.
    pub fn run<T: AsMultiTargets>(
        &self,
        registry: &ModelRegistry,
        x: ArrayView2<f64>,
        y: T,
    ) -> Result<Scores> {
        check_dataset(x, &y)?;
        let splits = KFold::new(self.params.cv())
            .with_random_state(self.params.random_state())
            .split(x.nrows())?;

        let subset: Option<Vec<&str>> = self
            .params
            .model_subset()
            .map(|names| names.iter().map(String::as_str).collect());
        let models = get_models(registry, subset.as_deref())?;
        let models = turn_models_into_multioutput(models, &y);
        let scaler = Scaler::new(self.params.scaler_type());
        let mut models: Vec<Box<dyn Estimator>> =
            wrap_models_in_pipeline(models, self.params.scale(), &scaler)
                .into_iter()
                .map(|pipeline| Box::new(pipeline) as Box<dyn Estimator>)
                .collect();

        tracing::info!(
            n_models = models.len(),
            n_splits = splits.len(),
            "starting comparison"
        );
        let dataset = DatasetBase::new(x.to_owned(), &y);
        cross_validate_all(&dataset, &splits, &mut models)
    }
}
