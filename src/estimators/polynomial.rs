//! Second order polynomial response surface.

use std::any::Any;

use ndarray::{Array1, Array2, ArrayView2};

use super::hyperparams::SecondOrderPolynomialParams;
use super::param_guard::ParamGuard;
use super::traits::{Estimator, EstimatorTags};
use super::{center, not_fitted};
use crate::datasets::{check_dataset, check_n_features};
use crate::error::Result;
use crate::helpers::linalg::solve_spd;

#[derive(Debug, Clone, PartialEq)]
struct PolynomialFit {
    /// `(n_poly_features, n_outputs)`
    coefficients: Array2<f64>,
    feature_mean: Array1<f64>,
    y_mean: Array1<f64>,
    n_features: usize,
}

/// Linear regression on the degree-2 expansion of the inputs, i.e. the linear
/// terms `x_i` and every product `x_i x_j` with `i <= j`. A small ridge term
/// keeps the normal equations well posed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SecondOrderPolynomial {
    params: SecondOrderPolynomialParams,
    fitted: Option<PolynomialFit>,
}

impl SecondOrderPolynomial {
    pub fn params() -> SecondOrderPolynomialParams {
        SecondOrderPolynomialParams::new()
    }

    pub fn new(params: SecondOrderPolynomialParams) -> SecondOrderPolynomial {
        SecondOrderPolynomial {
            params,
            fitted: None,
        }
    }

    pub fn coefficients(&self) -> Option<ArrayView2<f64>> {
        self.fitted.as_ref().map(|fit| fit.coefficients.view())
    }
}

/// Number of columns of the degree-2 expansion of `n_features` inputs.
pub fn n_poly_features(n_features: usize) -> usize {
    n_features + n_features * (n_features + 1) / 2
}

pub(crate) fn poly_features(x: ArrayView2<f64>) -> Array2<f64> {
    let p = x.ncols();
    let mut out = Array2::<f64>::zeros((x.nrows(), n_poly_features(p)));
    for (row, mut out_row) in x.outer_iter().zip(out.outer_iter_mut()) {
        let mut k = 0;
        for i in 0..p {
            out_row[k] = row[i];
            k += 1;
        }
        for i in 0..p {
            for j in i..p {
                out_row[k] = row[i] * row[j];
                k += 1;
            }
        }
    }
    out
}

impl Estimator for SecondOrderPolynomial {
    fn name(&self) -> &str {
        "SecondOrderPolynomial"
    }

    fn tags(&self) -> EstimatorTags {
        EstimatorTags { multioutput: true }
    }

    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView2<f64>) -> Result<()> {
        let params = self.params.check_ref()?.clone();
        check_dataset(x, y)?;

        let phi = poly_features(x);
        let (phi_c, y_c, feature_mean, y_mean) = center(phi.view(), y);
        let mut gram = phi_c.t().dot(&phi_c);
        gram.diag_mut().mapv_inplace(|g| g + params.alpha());
        let rhs = phi_c.t().dot(&y_c);
        let coefficients = solve_spd(gram.view(), rhs.view())?;

        self.fitted = Some(PolynomialFit {
            coefficients,
            feature_mean,
            y_mean,
            n_features: x.ncols(),
        });
        Ok(())
    }

    fn predict(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        let fit = self.fitted.as_ref().ok_or_else(|| not_fitted(self.name()))?;
        check_n_features(x, fit.n_features)?;
        let phi = poly_features(x) - &fit.feature_mean;
        Ok(phi.dot(&fit.coefficients) + &fit.y_mean)
    }

    fn clone_unfitted(&self) -> Box<dyn Estimator> {
        Box::new(SecondOrderPolynomial::new(self.params.clone()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
