#![allow(non_snake_case)]

//! Cross-validated comparison of emulators, regression models standing in for
//! expensive simulators.
//!
//! Candidate emulators are drawn from a [`ModelRegistry`], adapted to
//! multi-output targets, wrapped in scaling pipelines and scored by k-fold
//! cross-validation:
//!
//! ```ignore
//! use autoemulate::{compare, Comparison, ModelRegistry};
//!
//! let scores = compare(x.view(), &y, 5, None)?;
//! let scores = Comparison::new(Comparison::params().random_state(Some(0)))?
//!     .run(&ModelRegistry::default(), x.view(), &y)?;
//! ```

pub mod bcd;
pub mod cd;
pub mod compare;
pub mod datafits;
pub mod datasets;
pub mod error;
pub mod estimators;
pub mod helpers;
pub mod metrics;
pub mod model_processing;
pub mod model_selection;
pub mod penalties;
pub mod pipeline;
pub mod preprocessing;
pub mod registry;

pub use compare::{compare, CompareParams, Comparison, Scores};
pub use datasets::{AsMultiTargets, DatasetBase};
pub use error::{EmulatorError, Result};
pub use estimators::param_guard::ParamGuard;
pub use estimators::{Estimator, EstimatorTags, Transformer};
pub use model_processing::{
    check_model_names, get_models, turn_models_into_multioutput, wrap_models_in_pipeline,
};
pub use pipeline::Pipeline;
pub use registry::ModelRegistry;
