//! The catalogue of emulators a comparison can draw from.

use crate::error::{EmulatorError, Result};
use crate::estimators::{
    Estimator, GaussianProcess, GradientBoosting, Lasso, MultiTaskLasso, RandomForest,
    SecondOrderPolynomial,
};

#[cfg(test)]
mod tests;

/// Builds a fresh, unfitted estimator.
pub type ModelFactory = Box<dyn Fn() -> Box<dyn Estimator> + Send + Sync>;

/// An ordered mapping from model names to estimator factories
///
/// Names are unique and iteration follows registration order. The registry
/// hands out fresh instances, so selecting models never shares fitted state
/// between calls.
pub struct ModelRegistry {
    entries: Vec<(String, ModelFactory)>,
}

impl ModelRegistry {
    /// An empty registry.
    pub fn new() -> ModelRegistry {
        ModelRegistry {
            entries: Vec::new(),
        }
    }

    pub fn register<F>(mut self, name: &str, factory: F) -> Result<ModelRegistry>
    where
        F: Fn() -> Box<dyn Estimator> + Send + Sync + 'static,
    {
        if self.contains(name) {
            return Err(EmulatorError::DuplicateModel(name.to_string()));
        }
        self.entries.push((name.to_string(), Box::new(factory)));
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Builds a fresh instance of the model registered under `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn Estimator>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, factory)| factory())
            .ok_or_else(|| EmulatorError::UnknownModel(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelFactory)> + '_ {
        self.entries.iter().map(|(n, f)| (n.as_str(), f))
    }
}

fn builtin<E>(name: &str) -> (String, ModelFactory)
where
    E: Estimator + Default + 'static,
{
    let factory: ModelFactory = Box::new(|| Box::new(E::default()) as Box<dyn Estimator>);
    (name.to_string(), factory)
}

impl Default for ModelRegistry {
    /// The built-in emulators with their default hyperparameters.
    fn default() -> Self {
        ModelRegistry {
            entries: vec![
                builtin::<GaussianProcess>("GaussianProcess"),
                builtin::<RandomForest>("RandomForest"),
                builtin::<GradientBoosting>("GradientBoosting"),
                builtin::<SecondOrderPolynomial>("SecondOrderPolynomial"),
                builtin::<Lasso>("Lasso"),
                builtin::<MultiTaskLasso>("MultiTaskLasso"),
            ],
        }
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("names", &self.names())
            .finish()
    }
}
