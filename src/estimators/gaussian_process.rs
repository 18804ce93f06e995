//! Gaussian process regression with a squared exponential kernel.
//!
//! The emulator interpolates the training outputs and provides a predictive
//! standard deviation. Every output column shares the same kernel, which makes
//! the model natively multi-output.

use std::any::Any;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use super::hyperparams::{GaussianProcessParams, GaussianProcessValidParams};
use super::param_guard::ParamGuard;
use super::traits::{Estimator, EstimatorTags};
use super::not_fitted;
use crate::datasets::{check_dataset, check_n_features};
use crate::error::Result;
use crate::helpers::linalg::{cholesky_factorization, cholesky_solve, forward_substitution};

#[derive(Debug, Clone, PartialEq)]
struct GaussianProcessFit {
    x_train: Array2<f64>,
    /// `K^{-1} y` for each (normalized) output
    alpha: Array2<f64>,
    /// Cholesky factor of the training covariance
    L: Array2<f64>,
    y_mean: Array1<f64>,
    y_std: Array1<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GaussianProcess {
    params: GaussianProcessParams,
    fitted: Option<GaussianProcessFit>,
}

impl GaussianProcess {
    pub fn params() -> GaussianProcessParams {
        GaussianProcessParams::new()
    }

    pub fn new(params: GaussianProcessParams) -> GaussianProcess {
        GaussianProcess {
            params,
            fitted: None,
        }
    }

    /// Predicts the outputs together with their standard deviation.
    pub fn predict_with_std(&self, x: ArrayView2<f64>) -> Result<(Array2<f64>, Array2<f64>)> {
        let params = self.params.check_ref()?;
        let fit = self.fitted.as_ref().ok_or_else(|| not_fitted(self.name()))?;
        check_n_features(x, fit.x_train.ncols())?;

        let K_star = kernel_matrix(params, x, fit.x_train.view());
        let mean = K_star.dot(&fit.alpha) * &fit.y_std + &fit.y_mean;

        let mut std = Array2::<f64>::zeros(mean.raw_dim());
        for (k_star, mut std_i) in K_star.axis_iter(Axis(0)).zip(std.axis_iter_mut(Axis(0))) {
            let v = forward_substitution(fit.L.view(), k_star)?;
            let var = (params.signal_variance() - v.dot(&v)).max(0.);
            std_i.assign(&(&fit.y_std * var.sqrt()));
        }
        Ok((mean, std))
    }
}

fn rbf(params: &GaussianProcessValidParams, a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    let sq_dist: f64 = a.iter().zip(b).map(|(ai, bi)| (ai - bi).powi(2)).sum();
    params.signal_variance() * (-sq_dist / (2. * params.length_scale().powi(2))).exp()
}

fn kernel_matrix(
    params: &GaussianProcessValidParams,
    a: ArrayView2<f64>,
    b: ArrayView2<f64>,
) -> Array2<f64> {
    Array2::from_shape_fn((a.nrows(), b.nrows()), |(i, j)| rbf(params, a.row(i), b.row(j)))
}

impl Estimator for GaussianProcess {
    fn name(&self) -> &str {
        "GaussianProcess"
    }

    fn tags(&self) -> EstimatorTags {
        EstimatorTags { multioutput: true }
    }

    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView2<f64>) -> Result<()> {
        let params = self.params.check_ref()?.clone();
        check_dataset(x, y)?;

        let (y_mean, y_std) = if params.normalize_y() {
            let mean = y.mean_axis(Axis(0)).unwrap_or_else(|| Array1::zeros(y.ncols()));
            let std = y.std_axis(Axis(0), 0.).mapv(|s| if s > 0. { s } else { 1. });
            (mean, std)
        } else {
            (Array1::zeros(y.ncols()), Array1::ones(y.ncols()))
        };
        let y_normalized = (&y - &y_mean) / &y_std;

        let mut K = kernel_matrix(&params, x, x);
        K.diag_mut().mapv_inplace(|k| k + params.noise_variance());
        let L = cholesky_factorization(K.view())?;
        let alpha = cholesky_solve(L.view(), y_normalized.view())?;
        tracing::debug!(n_samples = x.nrows(), "gaussian process fitted");

        self.fitted = Some(GaussianProcessFit {
            x_train: x.to_owned(),
            alpha,
            L,
            y_mean,
            y_std,
        });
        Ok(())
    }

    fn predict(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        let params = self.params.check_ref()?;
        let fit = self.fitted.as_ref().ok_or_else(|| not_fitted(self.name()))?;
        check_n_features(x, fit.x_train.ncols())?;
        let K_star = kernel_matrix(params, x, fit.x_train.view());
        Ok(K_star.dot(&fit.alpha) * &fit.y_std + &fit.y_mean)
    }

    fn clone_unfitted(&self) -> Box<dyn Estimator> {
        Box::new(GaussianProcess::new(self.params.clone()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
