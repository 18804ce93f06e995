use std::any::Any;

use ndarray::{Array2, ArrayView2, Axis};

use super::not_fitted;
use super::traits::{Estimator, EstimatorTags};
use crate::datasets::check_dataset;
use crate::error::Result;

/// Fits one clone of a single-output estimator per target column.
///
/// The wrapper reports the name of the estimator it wraps, so that results
/// keyed by name stay attached to the underlying model type.
#[derive(Debug)]
pub struct MultiOutputRegressor {
    base: Box<dyn Estimator>,
    estimators: Vec<Box<dyn Estimator>>,
}

impl MultiOutputRegressor {
    pub fn new(base: Box<dyn Estimator>) -> MultiOutputRegressor {
        MultiOutputRegressor {
            base,
            estimators: Vec::new(),
        }
    }

    /// The unfitted template every per-output estimator is cloned from.
    pub fn base(&self) -> &dyn Estimator {
        self.base.as_ref()
    }

    /// Number of fitted per-output estimators, zero before fitting.
    pub fn n_estimators(&self) -> usize {
        self.estimators.len()
    }
}

impl Estimator for MultiOutputRegressor {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn tags(&self) -> EstimatorTags {
        EstimatorTags { multioutput: true }
    }

    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView2<f64>) -> Result<()> {
        check_dataset(x, y)?;
        let mut estimators = Vec::with_capacity(y.ncols());
        for column in y.axis_iter(Axis(1)) {
            let mut estimator = self.base.clone_unfitted();
            estimator.fit(x, column.insert_axis(Axis(1)))?;
            estimators.push(estimator);
        }
        self.estimators = estimators;
        Ok(())
    }

    fn predict(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        if self.estimators.is_empty() {
            return Err(not_fitted(self.name()));
        }
        let mut out = Array2::<f64>::zeros((x.nrows(), self.estimators.len()));
        for (estimator, mut column) in self.estimators.iter().zip(out.axis_iter_mut(Axis(1))) {
            let pred = estimator.predict(x)?;
            column.assign(&pred.column(0));
        }
        Ok(out)
    }

    fn clone_unfitted(&self) -> Box<dyn Estimator> {
        Box::new(MultiOutputRegressor::new(self.base.clone_unfitted()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
