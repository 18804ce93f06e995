//! Random forest emulator: an average of regression trees grown on bootstrap
//! samples of the simulation runs.

use std::any::Any;

use ndarray::{Array2, ArrayView2};
use rand::Rng;

use super::hyperparams::RandomForestParams;
use super::param_guard::ParamGuard;
use super::traits::{Estimator, EstimatorTags};
use super::tree::DecisionTree;
use super::not_fitted;
use crate::datasets::{check_dataset, check_n_features};
use crate::error::Result;
use crate::helpers::make_rng;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RandomForest {
    params: RandomForestParams,
    trees: Vec<DecisionTree>,
    n_features: usize,
}

impl RandomForest {
    pub fn params() -> RandomForestParams {
        RandomForestParams::new()
    }

    pub fn new(params: RandomForestParams) -> RandomForest {
        RandomForest {
            params,
            trees: Vec::new(),
            n_features: 0,
        }
    }

    /// The fitted trees, empty until the forest is fitted.
    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }
}

impl Estimator for RandomForest {
    fn name(&self) -> &str {
        "RandomForest"
    }

    fn tags(&self) -> EstimatorTags {
        EstimatorTags { multioutput: true }
    }

    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView2<f64>) -> Result<()> {
        let params = self.params.check_ref()?.clone();
        check_dataset(x, y)?;

        let n_samples = x.nrows();
        let mut rng = make_rng(params.random_state());
        let mut trees = Vec::with_capacity(params.n_estimators());
        for _ in 0..params.n_estimators() {
            let indices: Vec<usize> = if params.bootstrap() {
                (0..n_samples).map(|_| rng.gen_range(0..n_samples)).collect()
            } else {
                (0..n_samples).collect()
            };
            let mut tree = DecisionTree::new(params.tree());
            tree.fit_indices(x, y, &indices, &mut rng)?;
            trees.push(tree);
        }
        tracing::debug!(n_trees = trees.len(), "random forest fitted");

        self.trees = trees;
        self.n_features = x.ncols();
        Ok(())
    }

    fn predict(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        if self.trees.is_empty() {
            return Err(not_fitted(self.name()));
        }
        check_n_features(x, self.n_features)?;
        let mut sum = self.trees[0].predict(x)?;
        for tree in &self.trees[1..] {
            sum += &tree.predict(x)?;
        }
        Ok(sum / self.trees.len() as f64)
    }

    fn clone_unfitted(&self) -> Box<dyn Estimator> {
        Box::new(RandomForest::new(self.params.clone()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
