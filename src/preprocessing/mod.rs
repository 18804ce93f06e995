//! Column-wise feature scaling.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::datasets::check_n_features;
use crate::error::{EmulatorError, Result};
use crate::estimators::Transformer;

#[cfg(test)]
mod tests;

/// Type of scaler to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScalerType {
    /// Standard scaling (z-score normalization): (x - mean) / std
    #[default]
    Standard,
    /// Min-Max scaling: (x - min) / (max - min)
    MinMax,
    /// Robust scaling using median and IQR
    Robust,
    /// Max absolute scaling: x / max(|x|)
    MaxAbs,
    /// No scaling
    None,
}

#[derive(Debug, Clone, PartialEq)]
struct ScalerParams {
    /// mean, min, median or zero
    center: Array1<f64>,
    /// std, range, IQR or max absolute value
    scale: Array1<f64>,
}

/// Feature scaler
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scaler {
    scaler_type: ScalerType,
    params: Option<ScalerParams>,
}

impl Scaler {
    pub fn new(scaler_type: ScalerType) -> Self {
        Self {
            scaler_type,
            params: None,
        }
    }

    pub fn standard() -> Self {
        Self::new(ScalerType::Standard)
    }

    pub fn scaler_type(&self) -> ScalerType {
        self.scaler_type
    }

    pub fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    /// Maps scaled data back to the original units.
    pub fn inverse_transform(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        let params = self.fitted_params(x)?;
        Ok(&x * &params.scale + &params.center)
    }

    fn fitted_params(&self, x: ArrayView2<f64>) -> Result<&ScalerParams> {
        let params = self
            .params
            .as_ref()
            .ok_or_else(|| EmulatorError::NotFitted(self.name().to_string()))?;
        check_n_features(x, params.center.len())?;
        Ok(params)
    }

    fn column_params(&self, column: ArrayView1<f64>) -> (f64, f64) {
        let (center, scale) = match self.scaler_type {
            ScalerType::Standard => {
                let mean = column.mean().unwrap_or(0.);
                (mean, column.std(0.))
            }
            ScalerType::MinMax => {
                let min = column.fold(f64::INFINITY, |acc, &v| acc.min(v));
                let max = column.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
                (min, max - min)
            }
            ScalerType::Robust => {
                let mut sorted = column.to_vec();
                sorted.sort_by(|a, b| a.total_cmp(b));
                let median = quantile(&sorted, 0.5);
                (median, quantile(&sorted, 0.75) - quantile(&sorted, 0.25))
            }
            ScalerType::MaxAbs => (0., column.fold(0., |acc: f64, &v| acc.max(v.abs()))),
            ScalerType::None => (0., 1.),
        };
        // constant columns are only shifted
        let scale = if scale == 0. || !scale.is_finite() { 1. } else { scale };
        (center, scale)
    }
}

/// Linearly interpolated quantile of sorted, non-empty data.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + frac * (sorted[upper] - sorted[lower])
}

impl Transformer for Scaler {
    fn name(&self) -> &str {
        "Scaler"
    }

    fn fit(&mut self, x: ArrayView2<f64>) -> Result<()> {
        if x.nrows() == 0 {
            return Err(EmulatorError::EmptyDataset);
        }
        let (center, scale): (Vec<f64>, Vec<f64>) = x
            .axis_iter(Axis(1))
            .map(|column| self.column_params(column))
            .unzip();
        self.params = Some(ScalerParams {
            center: Array1::from(center),
            scale: Array1::from(scale),
        });
        Ok(())
    }

    fn transform(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        let params = self.fitted_params(x)?;
        Ok((&x - &params.center) / &params.scale)
    }

    fn clone_unfitted(&self) -> Box<dyn Transformer> {
        Box::new(Scaler::new(self.scaler_type))
    }
}
