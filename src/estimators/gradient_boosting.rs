//! Least-squares gradient boosting of shallow regression trees.

use std::any::Any;

use ndarray::{Array2, ArrayView2, Axis};
use rand::seq::index::sample;

use super::hyperparams::GradientBoostingParams;
use super::param_guard::ParamGuard;
use super::traits::{Estimator, EstimatorTags};
use super::tree::DecisionTree;
use super::{not_fitted, single_target};
use crate::datasets::{check_dataset, check_n_features};
use crate::error::Result;
use crate::helpers::make_rng;

/// Gradient boosting emulator
///
/// Each stage fits a tree to the residuals of the current ensemble. The model
/// handles a single output, as each stage follows the gradient of one loss.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GradientBoosting {
    params: GradientBoostingParams,
    init: Option<f64>,
    learning_rate: f64,
    trees: Vec<DecisionTree>,
    n_features: usize,
}

impl GradientBoosting {
    pub fn params() -> GradientBoostingParams {
        GradientBoostingParams::new()
    }

    pub fn new(params: GradientBoostingParams) -> GradientBoosting {
        GradientBoosting {
            params,
            init: None,
            learning_rate: 0.,
            trees: Vec::new(),
            n_features: 0,
        }
    }

    pub fn n_stages(&self) -> usize {
        self.trees.len()
    }
}

impl Estimator for GradientBoosting {
    fn name(&self) -> &str {
        "GradientBoosting"
    }

    fn tags(&self) -> EstimatorTags {
        EstimatorTags { multioutput: false }
    }

    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView2<f64>) -> Result<()> {
        let params = self.params.check_ref()?.clone();
        check_dataset(x, y)?;
        let y = single_target(self.name(), y)?;

        let n_samples = x.nrows();
        let n_subsample = ((params.subsample() * n_samples as f64).round() as usize).clamp(1, n_samples);
        let init = y.mean().unwrap_or(0.);
        let mut rng = make_rng(params.random_state());

        let mut residuals = y.mapv(|v| v - init).insert_axis(Axis(1));
        let mut trees = Vec::with_capacity(params.n_estimators());
        for _ in 0..params.n_estimators() {
            let indices: Vec<usize> = if n_subsample < n_samples {
                sample(&mut rng, n_samples, n_subsample).into_vec()
            } else {
                (0..n_samples).collect()
            };
            let mut tree = DecisionTree::new(params.tree());
            tree.fit_indices(x, residuals.view(), &indices, &mut rng)?;
            residuals.scaled_add(-params.learning_rate(), &tree.predict(x)?);
            trees.push(tree);
        }
        tracing::debug!(n_stages = trees.len(), "gradient boosting fitted");

        self.init = Some(init);
        self.learning_rate = params.learning_rate();
        self.trees = trees;
        self.n_features = x.ncols();
        Ok(())
    }

    fn predict(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        let init = self.init.ok_or_else(|| not_fitted(self.name()))?;
        check_n_features(x, self.n_features)?;
        let mut pred = Array2::<f64>::from_elem((x.nrows(), 1), init);
        for tree in &self.trees {
            pred.scaled_add(self.learning_rate, &tree.predict(x)?);
        }
        Ok(pred)
    }

    fn clone_unfitted(&self) -> Box<dyn Estimator> {
        Box::new(GradientBoosting::new(self.params.clone()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
