use std::any::Any;

use ndarray::{Array2, ArrayView2};

use crate::error::Result;
use crate::metrics::r2_score;

/// Static capability flags declared by every estimator type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EstimatorTags {
    /// Whether the estimator fits several output columns natively.
    pub multioutput: bool,
}

/// Estimator trait
///
/// An estimator approximates the input-output map of a simulator. It starts
/// unfitted, becomes fitted after a successful call to [`Estimator::fit`] and
/// can then predict and be scored. Targets are always two-dimensional,
/// `(n_samples, n_outputs)`, single-output problems having one column.
pub trait Estimator: Send {
    /// The type name of the estimator, used as a key in comparison results.
    fn name(&self) -> &str;

    /// The capability flags of the estimator type.
    fn tags(&self) -> EstimatorTags;

    /// Fits the estimator to a design matrix and its targets, overwriting any
    /// previously learned state.
    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView2<f64>) -> Result<()>;

    /// Predicts the simulator outputs for some inputs.
    fn predict(&self, x: ArrayView2<f64>) -> Result<Array2<f64>>;

    /// Scores the estimator on held-out data. Defaults to the R² of the
    /// predictions, averaged over the outputs.
    fn score(&self, x: ArrayView2<f64>, y: ArrayView2<f64>) -> Result<f64> {
        let y_pred = self.predict(x)?;
        Ok(r2_score(y, y_pred.view()))
    }

    /// Returns a fresh, unfitted estimator sharing the hyperparameters of
    /// `self`.
    fn clone_unfitted(&self) -> Box<dyn Estimator>;

    fn as_any(&self) -> &dyn Any;
}

/// Transformer trait
///
/// A preprocessing stage learning its parameters from a design matrix and
/// applying them to other matrices with the same columns.
pub trait Transformer: Send {
    fn name(&self) -> &str;

    fn fit(&mut self, x: ArrayView2<f64>) -> Result<()>;

    fn transform(&self, x: ArrayView2<f64>) -> Result<Array2<f64>>;

    fn fit_transform(&mut self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        self.fit(x)?;
        self.transform(x)
    }

    fn clone_unfitted(&self) -> Box<dyn Transformer>;
}

impl std::fmt::Debug for dyn Estimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Estimator")
            .field("name", &self.name())
            .field("tags", &self.tags())
            .finish()
    }
}

impl std::fmt::Debug for dyn Transformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transformer")
            .field("name", &self.name())
            .finish()
    }
}
