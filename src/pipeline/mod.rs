//! A chain of preprocessing steps ending in an estimator.

use std::any::Any;

use ndarray::{Array2, ArrayView2};

use crate::error::Result;
use crate::estimators::{Estimator, EstimatorTags, Transformer};


/// Name of the final step of every pipeline.
pub const MODEL_STEP: &str = "model";
/// Name given to the scaling step by [`wrap_models_in_pipeline`](crate::model_processing::wrap_models_in_pipeline).
pub const SCALER_STEP: &str = "scaler";

/// A sequence of named transformers followed by a named estimator
///
/// Fitting fits each transformer on the output of the previous one, then fits
/// the model on the fully transformed inputs. Predicting applies the fitted
/// transformers in order before calling the model. The pipeline is itself an
/// [`Estimator`] reporting the name and tags of its model.
#[derive(Debug)]
pub struct Pipeline {
    transformers: Vec<(String, Box<dyn Transformer>)>,
    model: Box<dyn Estimator>,
}

impl Pipeline {
    /// A pipeline with the single step `"model"`.
    pub fn new(model: Box<dyn Estimator>) -> Pipeline {
        Pipeline {
            transformers: Vec::new(),
            model,
        }
    }

    /// Appends a transformer, applied after the ones already present.
    pub fn with_step(mut self, name: &str, transformer: Box<dyn Transformer>) -> Pipeline {
        self.transformers.push((name.to_string(), transformer));
        self
    }

    /// Step names in application order, the model step last.
    pub fn step_names(&self) -> Vec<&str> {
        self.transformers
            .iter()
            .map(|(name, _)| name.as_str())
            .chain(std::iter::once(MODEL_STEP))
            .collect()
    }

    pub fn has_step(&self, name: &str) -> bool {
        self.step_names().contains(&name)
    }

    pub fn model(&self) -> &dyn Estimator {
        self.model.as_ref()
    }

    pub fn n_steps(&self) -> usize {
        self.transformers.len() + 1
    }

    fn transform(&self, x: ArrayView2<f64>) -> Result<Option<Array2<f64>>> {
        let mut current: Option<Array2<f64>> = None;
        for (_, transformer) in &self.transformers {
            let next = match &current {
                Some(xt) => transformer.transform(xt.view())?,
                None => transformer.transform(x)?,
            };
            current = Some(next);
        }
        Ok(current)
    }
}

impl Estimator for Pipeline {
    fn name(&self) -> &str {
        self.model.name()
    }

    fn tags(&self) -> EstimatorTags {
        self.model.tags()
    }

    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView2<f64>) -> Result<()> {
        let mut current: Option<Array2<f64>> = None;
        for (_, transformer) in self.transformers.iter_mut() {
            let next = match &current {
                Some(xt) => transformer.fit_transform(xt.view())?,
                None => transformer.fit_transform(x)?,
            };
            current = Some(next);
        }
        match &current {
            Some(xt) => self.model.fit(xt.view(), y),
            None => self.model.fit(x, y),
        }
    }

    fn predict(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        match self.transform(x)? {
            Some(xt) => self.model.predict(xt.view()),
            None => self.model.predict(x),
        }
    }

    fn clone_unfitted(&self) -> Box<dyn Estimator> {
        Box::new(Pipeline {
            transformers: self
                .transformers
                .iter()
                .map(|(name, transformer)| (name.clone(), transformer.clone_unfitted()))
                .collect(),
            model: self.model.clone_unfitted(),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
