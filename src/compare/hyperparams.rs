use serde::{Deserialize, Serialize};

use crate::error::{EmulatorError, Result};
use crate::estimators::param_guard::ParamGuard;
use crate::preprocessing::ScalerType;

/// A verified comparison configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareValidParams {
    cv: usize,
    random_state: Option<u64>,
    scale: bool,
    scaler_type: ScalerType,
    model_subset: Option<Vec<String>>,
}

impl CompareValidParams {
    pub fn cv(&self) -> usize {
        self.cv
    }

    pub fn random_state(&self) -> Option<u64> {
        self.random_state
    }

    pub fn scale(&self) -> bool {
        self.scale
    }

    pub fn scaler_type(&self) -> ScalerType {
        self.scaler_type
    }

    pub fn model_subset(&self) -> Option<&[String]> {
        self.model_subset.as_deref()
    }
}

/// A comparison configuration during construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareParams(CompareValidParams);

impl Default for CompareParams {
    fn default() -> Self {
        Self::new()
    }
}

impl CompareParams {
    pub fn new() -> CompareParams {
        Self(CompareValidParams {
            cv: 5,
            random_state: None,
            scale: true,
            scaler_type: ScalerType::Standard,
            model_subset: None,
        })
    }

    /// Set the number of cross-validation folds.
    /// Defaults to `5` if not set.
    pub fn cv(mut self, cv: usize) -> Self {
        self.0.cv = cv;
        self
    }

    /// Seed of the fold shuffle. Leaving it unset draws a new split on every
    /// run.
    pub fn random_state(mut self, random_state: Option<u64>) -> Self {
        self.0.random_state = random_state;
        self
    }

    /// Whether to scale the inputs before each model.
    /// Defaults to `true` if not set.
    pub fn scale(mut self, scale: bool) -> Self {
        self.0.scale = scale;
        self
    }

    /// Defaults to [`ScalerType::Standard`] if not set.
    pub fn scaler_type(mut self, scaler_type: ScalerType) -> Self {
        self.0.scaler_type = scaler_type;
        self
    }

    /// Restricts the comparison to the named registry entries, compared in
    /// the order given.
    pub fn model_subset<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.0.model_subset = Some(names.iter().map(|n| n.as_ref().to_string()).collect());
        self
    }
}

impl ParamGuard for CompareParams {
    type Checked = CompareValidParams;
    type Error = EmulatorError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.cv < 2 {
            Err(EmulatorError::InvalidParameter {
                name: "cv",
                reason: format!("needs at least 2 folds, got {}", self.0.cv),
            })
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
