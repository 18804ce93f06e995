use thiserror::Error;

/// Simplified `Result` using [`EmulatorError`](crate::EmulatorError) as error type
pub type Result<T> = std::result::Result<T, EmulatorError>;

/// Error variants from dataset validation, model selection, hyperparameter
/// checking or model estimation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmulatorError {
    /// Design matrix and targets disagree on the number of samples
    #[error("X and y must have the same number of samples (got {x_samples} and {y_samples})")]
    ShapeMismatch { x_samples: usize, y_samples: usize },
    #[error("X and y should not contain NaNs")]
    ContainsNaN,
    #[error("dataset has no samples")]
    EmptyDataset,
    #[error("design matrix has no features")]
    NoFeatures,
    /// Input has a different number of columns than the data seen at fit time
    #[error("expected {expected} features, got {found}")]
    FeatureMismatch { expected: usize, found: usize },
    #[error("model '{0}' is not in the registry")]
    UnknownModel(String),
    #[error("model '{0}' is already registered")]
    DuplicateModel(String),
    #[error("{0} does not support multi-output targets, wrap it in a MultiOutputRegressor")]
    MultiOutputUnsupported(String),
    #[error("{0} is not fitted yet, call `fit` first")]
    NotFitted(String),
    #[error("invalid number of folds {n_splits} for {n_samples} samples")]
    InvalidFolds { n_splits: usize, n_samples: usize },
    #[error("invalid alpha {0}")]
    InvalidRegularization(f64),
    #[error("invalid tolerance {0}")]
    InvalidTolerance(f64),
    #[error("invalid hyperparameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("matrix is singular or not positive definite")]
    SingularMatrix,
}
