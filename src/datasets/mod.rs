use ndarray::{Array2, ArrayView2};

mod impl_datasets;
mod impl_targets;

pub use impl_datasets::check_dataset;
pub(crate) use impl_datasets::check_n_features;

#[cfg(test)]
mod tests;

/// A dataset pairs a design matrix of simulation inputs, of shape
/// `(n_samples, n_features)`, with the simulation outputs, stored as a
/// `(n_samples, n_tasks)` matrix. Single-output targets are stored with a
/// single column.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetBase {
    pub design_matrix: Array2<f64>,
    pub targets: Array2<f64>,
}

/// This trait is implemented for one and two-dimensional arrays so that both
/// single-output and multi-output targets can be handed to the comparison
/// routines.
pub trait AsMultiTargets {
    fn n_samples(&self) -> usize;
    fn n_tasks(&self) -> usize;
    fn as_multi_tasks(&self) -> ArrayView2<f64>;

    /// A target is multi-output when it has more than one column.
    fn is_multi_output(&self) -> bool {
        self.n_tasks() > 1
    }
}
