use super::{AsMultiTargets, DatasetBase};
use crate::error::{EmulatorError, Result};
use ndarray::{Array2, ArrayBase, ArrayView2, Axis, Data, Ix2};

/// This implementation block provides a method for the creation of datasets
/// from dense matrices and either single or multi-output targets.
impl<S: Data<Elem = f64>, T: AsMultiTargets> From<(ArrayBase<S, Ix2>, T)> for DatasetBase {
    fn from(data: (ArrayBase<S, Ix2>, T)) -> Self {
        DatasetBase::new(data.0.to_owned(), &data.1)
    }
}

impl DatasetBase {
    /// This method instantiates a new dataset from a design matrix and targets.
    ///
    /// No check is performed here, see [`DatasetBase::validate`].
    pub fn new<T: AsMultiTargets>(design_matrix: Array2<f64>, targets: T) -> DatasetBase {
        DatasetBase {
            design_matrix,
            targets: targets.as_multi_tasks().to_owned(),
        }
    }

    /// This method is a getter for the targets.
    pub fn targets(&self) -> ArrayView2<f64> {
        self.targets.view()
    }

    /// This method is a getter for the design matrix.
    pub fn design_matrix(&self) -> ArrayView2<f64> {
        self.design_matrix.view()
    }

    pub fn n_samples(&self) -> usize {
        self.design_matrix.len_of(Axis(0))
    }

    pub fn n_features(&self) -> usize {
        self.design_matrix.len_of(Axis(1))
    }

    pub fn n_tasks(&self) -> usize {
        self.targets.len_of(Axis(1))
    }

    /// Checks that the design matrix and the targets have the same number of
    /// rows, that the dataset is not empty and that neither array contains
    /// NaNs.
    pub fn validate(&self) -> Result<()> {
        check_dataset(self.design_matrix.view(), &self.targets)
    }

    /// Returns a new dataset restricted to the given rows, in the given order.
    pub fn select(&self, indices: &[usize]) -> DatasetBase {
        DatasetBase {
            design_matrix: self.design_matrix.select(Axis(0), indices),
            targets: self.targets.select(Axis(0), indices),
        }
    }
}

/// This function checks the invariants of a `(X, y)` pair before any model is
/// fitted on it.
pub fn check_dataset<T: AsMultiTargets>(x: ArrayView2<f64>, y: T) -> Result<()> {
    let x_samples = x.len_of(Axis(0));
    let y_samples = y.n_samples();
    if x_samples != y_samples {
        return Err(EmulatorError::ShapeMismatch {
            x_samples,
            y_samples,
        });
    }
    if x_samples == 0 {
        return Err(EmulatorError::EmptyDataset);
    }
    if x.len_of(Axis(1)) == 0 {
        return Err(EmulatorError::NoFeatures);
    }
    if x.iter().any(|v| v.is_nan()) || y.as_multi_tasks().iter().any(|v| v.is_nan()) {
        return Err(EmulatorError::ContainsNaN);
    }
    Ok(())
}

/// Checks that an input matrix has the number of features seen during `fit`.
pub(crate) fn check_n_features(x: ArrayView2<f64>, expected: usize) -> Result<()> {
    let found = x.len_of(Axis(1));
    if found != expected {
        return Err(EmulatorError::FeatureMismatch { expected, found });
    }
    Ok(())
}
