use std::any::Any;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use super::hyperparams::{LassoParams, MultiTaskLassoParams};
use super::param_guard::ParamGuard;
use super::traits::{Estimator, EstimatorTags};
use super::{center, not_fitted, single_target};
use crate::bcd::block_coordinate_descent;
use crate::cd::coordinate_descent;
use crate::datafits::{Quadratic, QuadraticMultiTask};
use crate::datasets::{check_dataset, check_n_features};
use crate::error::Result;
use crate::penalties::{L1, L21};

/// The Lasso estimator
///
/// The Lasso estimator solves a regularized least-square regression problem.
/// The L1-regularization used yields sparse solutions. It handles a single
/// output, multi-output targets need a
/// [`MultiOutputRegressor`](super::MultiOutputRegressor).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Lasso {
    params: LassoParams,
    coefficients: Option<Array1<f64>>,
    intercept: f64,
}

impl Lasso {
    /// This method instantiates the default hyperparameters of the coordinate
    /// descent solver.
    pub fn params() -> LassoParams {
        LassoParams::new()
    }

    pub fn new(params: LassoParams) -> Lasso {
        Lasso {
            params,
            coefficients: None,
            intercept: 0.,
        }
    }

    /// This method is a getter for the coefficients vector, `None` until the
    /// estimator is fitted.
    pub fn coefficients(&self) -> Option<ArrayView1<f64>> {
        self.coefficients.as_ref().map(|w| w.view())
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Estimator for Lasso {
    fn name(&self) -> &str {
        "Lasso"
    }

    fn tags(&self) -> EstimatorTags {
        EstimatorTags { multioutput: false }
    }

    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView2<f64>) -> Result<()> {
        let params = self.params.check_ref()?.clone();
        check_dataset(x, y)?;
        single_target(self.name(), y)?;

        let (x_c, y_c, x_mean, y_mean) = if params.fit_intercept() {
            center(x, y)
        } else {
            (
                x.to_owned(),
                y.to_owned(),
                Array1::zeros(x.ncols()),
                Array1::zeros(1),
            )
        };

        let mut datafit = Quadratic::new();
        let penalty = L1::new(params.alpha());
        let w = coordinate_descent(
            x_c.view(),
            y_c.column(0),
            &mut datafit,
            &penalty,
            params.max_epochs(),
            params.tolerance(),
        );
        self.intercept = y_mean[0] - x_mean.dot(&w);
        self.coefficients = Some(w);
        Ok(())
    }

    fn predict(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        let w = self
            .coefficients
            .as_ref()
            .ok_or_else(|| not_fitted(self.name()))?;
        check_n_features(x, w.len())?;
        Ok((x.dot(w) + self.intercept).insert_axis(Axis(1)))
    }

    fn clone_unfitted(&self) -> Box<dyn Estimator> {
        Box::new(Lasso::new(self.params.clone()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The MultiTaskLasso estimator
///
/// The MultiTaskLasso estimator solves a regularized multi-task least-squares
/// regression problem. The L21-regularization used yields solutions sharing
/// the same support across the outputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiTaskLasso {
    params: MultiTaskLassoParams,
    coefficients: Option<Array2<f64>>,
    intercept: Array1<f64>,
}

impl MultiTaskLasso {
    /// This method instantiates the default hyperparameters of the block
    /// coordinate descent solver.
    pub fn params() -> MultiTaskLassoParams {
        MultiTaskLassoParams::new()
    }

    pub fn new(params: MultiTaskLassoParams) -> MultiTaskLasso {
        MultiTaskLasso {
            params,
            coefficients: None,
            intercept: Array1::zeros(0),
        }
    }

    /// This method is a getter for the `(n_features, n_tasks)` coefficients
    /// matrix.
    pub fn coefficients(&self) -> Option<ArrayView2<f64>> {
        self.coefficients.as_ref().map(|W| W.view())
    }

    pub fn intercept(&self) -> ArrayView1<f64> {
        self.intercept.view()
    }
}

impl Estimator for MultiTaskLasso {
    fn name(&self) -> &str {
        "MultiTaskLasso"
    }

    fn tags(&self) -> EstimatorTags {
        EstimatorTags { multioutput: true }
    }

    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView2<f64>) -> Result<()> {
        let params = self.params.check_ref()?.clone();
        check_dataset(x, y)?;

        let (x_c, y_c, x_mean, y_mean) = if params.fit_intercept() {
            center(x, y)
        } else {
            (
                x.to_owned(),
                y.to_owned(),
                Array1::zeros(x.ncols()),
                Array1::zeros(y.ncols()),
            )
        };

        let mut datafit = QuadraticMultiTask::new();
        let penalty = L21::new(params.alpha());
        let W = block_coordinate_descent(
            x_c.view(),
            y_c.view(),
            &mut datafit,
            &penalty,
            params.max_epochs(),
            params.tolerance(),
        );
        self.intercept = &y_mean - &x_mean.dot(&W);
        self.coefficients = Some(W);
        Ok(())
    }

    fn predict(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        let W = self
            .coefficients
            .as_ref()
            .ok_or_else(|| not_fitted(self.name()))?;
        check_n_features(x, W.nrows())?;
        Ok(x.dot(W) + &self.intercept)
    }

    fn clone_unfitted(&self) -> Box<dyn Estimator> {
        Box::new(MultiTaskLasso::new(self.params.clone()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
