use serde::{Deserialize, Serialize};

use super::param_guard::ParamGuard;
use crate::error::{EmulatorError, Result};

fn invalid(name: &'static str, reason: impl Into<String>) -> EmulatorError {
    EmulatorError::InvalidParameter {
        name,
        reason: reason.into(),
    }
}

/// A verified hyperparameter set ready for the fitting of a Lasso regression model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LassoValidParams {
    alpha: f64,
    max_epochs: usize,
    tolerance: f64,
    fit_intercept: bool,
}

impl LassoValidParams {
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn max_epochs(&self) -> usize {
        self.max_epochs
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }
}

/// A hyper-parameter set during construction
///
/// Configures and minimizes the following objective function:
/// ```ignore
/// 1 / (2 * n_samples) * ||y - Xw - b||^2_2
///     + alpha * ||w||_1
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LassoParams(LassoValidParams);

impl Default for LassoParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a Lasso model
impl LassoParams {
    /// Create default Lasso hyper parameters
    pub fn new() -> LassoParams {
        Self(LassoValidParams {
            alpha: 0.01,
            max_epochs: 1000,
            tolerance: 1e-6,
            fit_intercept: true,
        })
    }

    /// Set the regularization hyperparameter. A higher value yields sparser
    /// solutions.
    /// Defaults to `0.01` if not set.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.0.alpha = alpha;
        self
    }

    /// Set the maximum number of epochs of the coordinate descent routine.
    /// Defaults to `1000` if not set.
    pub fn max_epochs(mut self, max_epochs: usize) -> Self {
        self.0.max_epochs = max_epochs;
        self
    }

    /// Set the stopping criterion for the optimization routine (KKT violation).
    ///
    /// Defaults to `1e-6` if not set.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.0.tolerance = tolerance;
        self
    }

    /// Whether to fit an unpenalized intercept.
    /// Defaults to `true` if not set.
    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.0.fit_intercept = fit_intercept;
        self
    }
}

impl ParamGuard for LassoParams {
    type Checked = LassoValidParams;
    type Error = EmulatorError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        if !(self.0.alpha >= 0.) {
            Err(EmulatorError::InvalidRegularization(self.0.alpha))
        } else if !(self.0.tolerance >= 0.) {
            Err(EmulatorError::InvalidTolerance(self.0.tolerance))
        } else if self.0.max_epochs == 0 {
            Err(invalid("max_epochs", "must be at least 1"))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// A verified hyperparameter set ready for the fitting of a MultiTaskLasso model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiTaskLassoValidParams {
    alpha: f64,
    max_epochs: usize,
    tolerance: f64,
    fit_intercept: bool,
}

impl MultiTaskLassoValidParams {
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn max_epochs(&self) -> usize {
        self.max_epochs
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }
}

/// A hyper-parameter set during construction
///
/// Configures and minimizes the following objective function:
/// ```ignore
/// 1 / (2 * n_samples) * ||Y - XW - B||^2_F
///     + alpha * sum_j ||W_j||_2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiTaskLassoParams(MultiTaskLassoValidParams);

impl Default for MultiTaskLassoParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a MultiTaskLasso model
impl MultiTaskLassoParams {
    /// Create default MultiTaskLasso hyper parameters
    pub fn new() -> MultiTaskLassoParams {
        Self(MultiTaskLassoValidParams {
            alpha: 0.01,
            max_epochs: 1000,
            tolerance: 1e-6,
            fit_intercept: true,
        })
    }

    /// Set the regularization hyperparameter. A higher value yields sparser
    /// solutions.
    /// Defaults to `0.01` if not set.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.0.alpha = alpha;
        self
    }

    /// Set the maximum number of epochs of the block coordinate descent routine.
    /// Defaults to `1000` if not set.
    pub fn max_epochs(mut self, max_epochs: usize) -> Self {
        self.0.max_epochs = max_epochs;
        self
    }

    /// Set the stopping criterion for the optimization routine (KKT violation).
    ///
    /// Defaults to `1e-6` if not set.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.0.tolerance = tolerance;
        self
    }

    /// Whether to fit an unpenalized intercept per task.
    /// Defaults to `true` if not set.
    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.0.fit_intercept = fit_intercept;
        self
    }
}

impl ParamGuard for MultiTaskLassoParams {
    type Checked = MultiTaskLassoValidParams;
    type Error = EmulatorError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        if !(self.0.alpha >= 0.) {
            Err(EmulatorError::InvalidRegularization(self.0.alpha))
        } else if !(self.0.tolerance >= 0.) {
            Err(EmulatorError::InvalidTolerance(self.0.tolerance))
        } else if self.0.max_epochs == 0 {
            Err(invalid("max_epochs", "must be at least 1"))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// A verified hyperparameter set ready for the fitting of a Gaussian process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianProcessValidParams {
    length_scale: f64,
    signal_variance: f64,
    noise_variance: f64,
    normalize_y: bool,
}

impl GaussianProcessValidParams {
    pub fn length_scale(&self) -> f64 {
        self.length_scale
    }

    pub fn signal_variance(&self) -> f64 {
        self.signal_variance
    }

    pub fn noise_variance(&self) -> f64 {
        self.noise_variance
    }

    pub fn normalize_y(&self) -> bool {
        self.normalize_y
    }
}

/// A hyper-parameter set during construction
///
/// The covariance between two inputs is the squared exponential kernel
/// ```ignore
/// k(x, x') = signal_variance * exp(-||x - x'||^2 / (2 * length_scale^2))
/// ```
/// and `noise_variance` is added to the diagonal of the training covariance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianProcessParams(GaussianProcessValidParams);

impl Default for GaussianProcessParams {
    fn default() -> Self {
        Self::new()
    }
}

impl GaussianProcessParams {
    pub fn new() -> GaussianProcessParams {
        Self(GaussianProcessValidParams {
            length_scale: 1.,
            signal_variance: 1.,
            noise_variance: 1e-6,
            normalize_y: true,
        })
    }

    /// Defaults to `1` if not set.
    pub fn length_scale(mut self, length_scale: f64) -> Self {
        self.0.length_scale = length_scale;
        self
    }

    /// Defaults to `1` if not set.
    pub fn signal_variance(mut self, signal_variance: f64) -> Self {
        self.0.signal_variance = signal_variance;
        self
    }

    /// Variance of the observation noise, also acting as a jitter keeping the
    /// covariance positive definite.
    /// Defaults to `1e-6` if not set.
    pub fn noise_variance(mut self, noise_variance: f64) -> Self {
        self.0.noise_variance = noise_variance;
        self
    }

    /// Whether to standardize the targets before fitting.
    /// Defaults to `true` if not set.
    pub fn normalize_y(mut self, normalize_y: bool) -> Self {
        self.0.normalize_y = normalize_y;
        self
    }
}

impl ParamGuard for GaussianProcessParams {
    type Checked = GaussianProcessValidParams;
    type Error = EmulatorError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if !(self.0.length_scale > 0.) {
            Err(invalid("length_scale", format!("{} must be positive", self.0.length_scale)))
        } else if !(self.0.signal_variance > 0.) {
            Err(invalid(
                "signal_variance",
                format!("{} must be positive", self.0.signal_variance),
            ))
        } else if !(self.0.noise_variance >= 0.) {
            Err(invalid(
                "noise_variance",
                format!("{} must be non-negative", self.0.noise_variance),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// Growth limits shared by the tree-based emulators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeParams {
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    /// Fraction of the features drawn as split candidates at each node.
    pub max_features: f64,
}

impl TreeParams {
    fn check(&self) -> Result<()> {
        if self.min_samples_split < 2 {
            Err(invalid("min_samples_split", "must be at least 2"))
        } else if self.min_samples_leaf == 0 {
            Err(invalid("min_samples_leaf", "must be at least 1"))
        } else if !(self.max_features > 0. && self.max_features <= 1.) {
            Err(invalid(
                "max_features",
                format!("{} must lie in (0, 1]", self.max_features),
            ))
        } else {
            Ok(())
        }
    }
}

/// A verified hyperparameter set ready for the fitting of a random forest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForestValidParams {
    n_estimators: usize,
    tree: TreeParams,
    bootstrap: bool,
    random_state: Option<u64>,
}

impl RandomForestValidParams {
    pub fn n_estimators(&self) -> usize {
        self.n_estimators
    }

    pub fn tree(&self) -> TreeParams {
        self.tree
    }

    pub fn bootstrap(&self) -> bool {
        self.bootstrap
    }

    pub fn random_state(&self) -> Option<u64> {
        self.random_state
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForestParams(RandomForestValidParams);

impl Default for RandomForestParams {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomForestParams {
    pub fn new() -> RandomForestParams {
        Self(RandomForestValidParams {
            n_estimators: 100,
            tree: TreeParams {
                max_depth: None,
                min_samples_split: 2,
                min_samples_leaf: 1,
                max_features: 1.,
            },
            bootstrap: true,
            random_state: None,
        })
    }

    /// Number of trees in the forest.
    /// Defaults to `100` if not set.
    pub fn n_estimators(mut self, n_estimators: usize) -> Self {
        self.0.n_estimators = n_estimators;
        self
    }

    /// Defaults to unlimited depth if not set.
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.0.tree.max_depth = max_depth;
        self
    }

    /// Defaults to `2` if not set.
    pub fn min_samples_split(mut self, min_samples_split: usize) -> Self {
        self.0.tree.min_samples_split = min_samples_split;
        self
    }

    /// Defaults to `1` if not set.
    pub fn min_samples_leaf(mut self, min_samples_leaf: usize) -> Self {
        self.0.tree.min_samples_leaf = min_samples_leaf;
        self
    }

    /// Fraction of features considered at each split.
    /// Defaults to `1` if not set.
    pub fn max_features(mut self, max_features: f64) -> Self {
        self.0.tree.max_features = max_features;
        self
    }

    /// Whether each tree is grown on a bootstrap sample.
    /// Defaults to `true` if not set.
    pub fn bootstrap(mut self, bootstrap: bool) -> Self {
        self.0.bootstrap = bootstrap;
        self
    }

    /// Seed of the random number generator. Defaults to entropy if not set.
    pub fn random_state(mut self, random_state: Option<u64>) -> Self {
        self.0.random_state = random_state;
        self
    }
}

impl ParamGuard for RandomForestParams {
    type Checked = RandomForestValidParams;
    type Error = EmulatorError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.n_estimators == 0 {
            return Err(invalid("n_estimators", "must be at least 1"));
        }
        self.0.tree.check()?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// A verified hyperparameter set ready for the fitting of a gradient boosting
/// ensemble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBoostingValidParams {
    n_estimators: usize,
    learning_rate: f64,
    subsample: f64,
    tree: TreeParams,
    random_state: Option<u64>,
}

impl GradientBoostingValidParams {
    pub fn n_estimators(&self) -> usize {
        self.n_estimators
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn subsample(&self) -> f64 {
        self.subsample
    }

    pub fn tree(&self) -> TreeParams {
        self.tree
    }

    pub fn random_state(&self) -> Option<u64> {
        self.random_state
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBoostingParams(GradientBoostingValidParams);

impl Default for GradientBoostingParams {
    fn default() -> Self {
        Self::new()
    }
}

impl GradientBoostingParams {
    pub fn new() -> GradientBoostingParams {
        Self(GradientBoostingValidParams {
            n_estimators: 100,
            learning_rate: 0.1,
            subsample: 1.,
            tree: TreeParams {
                max_depth: Some(3),
                min_samples_split: 2,
                min_samples_leaf: 1,
                max_features: 1.,
            },
            random_state: None,
        })
    }

    /// Number of boosting stages.
    /// Defaults to `100` if not set.
    pub fn n_estimators(mut self, n_estimators: usize) -> Self {
        self.0.n_estimators = n_estimators;
        self
    }

    /// Shrinkage applied to the contribution of each tree.
    /// Defaults to `0.1` if not set.
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.0.learning_rate = learning_rate;
        self
    }

    /// Fraction of samples drawn without replacement for each stage.
    /// Defaults to `1` if not set.
    pub fn subsample(mut self, subsample: f64) -> Self {
        self.0.subsample = subsample;
        self
    }

    /// Defaults to `3` if not set.
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.0.tree.max_depth = max_depth;
        self
    }

    /// Defaults to `1` if not set.
    pub fn min_samples_leaf(mut self, min_samples_leaf: usize) -> Self {
        self.0.tree.min_samples_leaf = min_samples_leaf;
        self
    }

    pub fn random_state(mut self, random_state: Option<u64>) -> Self {
        self.0.random_state = random_state;
        self
    }
}

impl ParamGuard for GradientBoostingParams {
    type Checked = GradientBoostingValidParams;
    type Error = EmulatorError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.n_estimators == 0 {
            return Err(invalid("n_estimators", "must be at least 1"));
        }
        if !(self.0.learning_rate > 0.) {
            return Err(invalid(
                "learning_rate",
                format!("{} must be positive", self.0.learning_rate),
            ));
        }
        if !(self.0.subsample > 0. && self.0.subsample <= 1.) {
            return Err(invalid(
                "subsample",
                format!("{} must lie in (0, 1]", self.0.subsample),
            ));
        }
        self.0.tree.check()?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// A verified hyperparameter set ready for the fitting of a second order
/// polynomial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondOrderPolynomialValidParams {
    alpha: f64,
}

impl SecondOrderPolynomialValidParams {
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

/// A hyper-parameter set during construction
///
/// The polynomial is fitted by ridge regression on the degree-2 expansion of
/// the inputs, the intercept being left unpenalized:
/// ```ignore
/// ||y - Phi(X) w - b||^2_2 + alpha * ||w||^2_2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondOrderPolynomialParams(SecondOrderPolynomialValidParams);

impl Default for SecondOrderPolynomialParams {
    fn default() -> Self {
        Self::new()
    }
}

impl SecondOrderPolynomialParams {
    pub fn new() -> SecondOrderPolynomialParams {
        Self(SecondOrderPolynomialValidParams { alpha: 1e-6 })
    }

    /// Defaults to `1e-6` if not set.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.0.alpha = alpha;
        self
    }
}

impl ParamGuard for SecondOrderPolynomialParams {
    type Checked = SecondOrderPolynomialValidParams;
    type Error = EmulatorError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if !(self.0.alpha >= 0.) {
            Err(EmulatorError::InvalidRegularization(self.0.alpha))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
