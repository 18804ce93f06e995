use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::error::{EmulatorError, Result};


pub mod gaussian_process;
pub mod gradient_boosting;
pub mod hyperparams;
pub mod lasso;
pub mod multioutput;
pub mod param_guard;
pub mod polynomial;
pub mod random_forest;
pub mod traits;
pub mod tree;

pub use gaussian_process::GaussianProcess;
pub use gradient_boosting::GradientBoosting;
pub use lasso::{Lasso, MultiTaskLasso};
pub use multioutput::MultiOutputRegressor;
pub use polynomial::SecondOrderPolynomial;
pub use random_forest::RandomForest;
pub use traits::{Estimator, EstimatorTags, Transformer};

/// Returns the only column of a target matrix, or fails for estimators that
/// cannot handle several outputs.
pub(crate) fn single_target<'a>(name: &str, y: ArrayView2<'a, f64>) -> Result<ArrayView1<'a, f64>> {
    if y.ncols() != 1 {
        return Err(EmulatorError::MultiOutputUnsupported(name.to_string()));
    }
    Ok(y.index_axis_move(Axis(1), 0))
}

/// Centers the columns of `x` and `y`, returning the centered copies along
/// with the column means.
pub(crate) fn center(
    x: ArrayView2<f64>,
    y: ArrayView2<f64>,
) -> (Array2<f64>, Array2<f64>, Array1<f64>, Array1<f64>) {
    let x_mean = x
        .mean_axis(Axis(0))
        .unwrap_or_else(|| Array1::zeros(x.ncols()));
    let y_mean = y
        .mean_axis(Axis(0))
        .unwrap_or_else(|| Array1::zeros(y.ncols()));
    (&x - &x_mean, &y - &y_mean, x_mean, y_mean)
}

pub(crate) fn not_fitted(name: &str) -> EmulatorError {
    EmulatorError::NotFitted(name.to_string())
}
