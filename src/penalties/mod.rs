use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

use crate::helpers::prox::{block_soft_thresholding, soft_thresholding};

#[cfg(test)]
mod tests;

/// This trait provides three methods needed to update the weights during the
/// optimization routine.
pub trait Penalty {
    /// This method is called when evaluating the objective value.
    fn value(&self, w: ArrayView1<f64>) -> f64;

    /// This method computes the proximal gradient step during the update of the
    /// weights. For a given penalty, it implements its proximal operator.
    fn prox(&self, value: f64, step_size: f64) -> f64;

    /// This method computes the distance between the gradient of the datafit
    /// and the subdifferential of the penalty, for each feature, as well as the
    /// maximum distance. It is the stopping criterion of the solver.
    fn subdiff_distance(&self, w: ArrayView1<f64>, grad: ArrayView1<f64>) -> (Array1<f64>, f64);
}

/// This trait is the multi-task counterpart of [`Penalty`], acting on the rows
/// of the coefficient matrix.
pub trait MultiTaskPenalty {
    fn value(&self, W: ArrayView2<f64>) -> f64;

    fn prox(&self, value: ArrayView1<f64>, step_size: f64) -> Array1<f64>;

    fn subdiff_distance(&self, W: ArrayView2<f64>, grad: ArrayView2<f64>) -> (Array1<f64>, f64);
}

fn max_of(dist: &Array1<f64>) -> f64 {
    dist.fold(f64::NEG_INFINITY, |max_val, &d| max_val.max(d))
}

/// The L1 penalty
///
/// A widely-used penalty made popular by the LASSO model. It yields sparse
/// solutions.
#[derive(Debug, Clone, PartialEq)]
pub struct L1 {
    alpha: f64,
}

impl L1 {
    /// Instantiates a L1 penalty with a positive regularization hyperparameter.
    pub fn new(alpha: f64) -> Self {
        L1 { alpha }
    }
}

impl Penalty for L1 {
    /// Computes the L1-norm of the weights
    fn value(&self, w: ArrayView1<f64>) -> f64 {
        self.alpha * w.iter().map(|wj| wj.abs()).sum::<f64>()
    }

    /// Applies the soft-thresholding operator to a weight scalar
    fn prox(&self, value: f64, step_size: f64) -> f64 {
        soft_thresholding(value, self.alpha * step_size)
    }

    /// The distance of the gradient to the subdifferential of L1 is:
    /// dist(grad, subdiff) = max(0, |grad| - alpha)         if w[j] = 0
    ///                       |- grad - sign(w[j]) * alpha|  otherwise
    fn subdiff_distance(&self, w: ArrayView1<f64>, grad: ArrayView1<f64>) -> (Array1<f64>, f64) {
        let subdiff_dist = Array1::from_iter(grad.iter().zip(w).map(|(&grad_j, &w_j)| {
            if w_j == 0. {
                f64::max(0., grad_j.abs() - self.alpha)
            } else {
                (-grad_j - w_j.signum() * self.alpha).abs()
            }
        }));
        let max_dist = max_of(&subdiff_dist);
        (subdiff_dist, max_dist)
    }
}

/// L21 penalty
///
/// The multi-task counterpart of the [`L1`] penalty, used by the multi-task
/// LASSO. It selects the same features for every task.
#[derive(Debug, Clone, PartialEq)]
pub struct L21 {
    alpha: f64,
}

impl L21 {
    pub fn new(alpha: f64) -> Self {
        L21 { alpha }
    }
}

impl MultiTaskPenalty for L21 {
    /// pen(W) = alpha * sum_j ||W_j||_2
    fn value(&self, W: ArrayView2<f64>) -> f64 {
        self.alpha * W.map_axis(Axis(1), |Wj| Wj.dot(&Wj).sqrt()).sum()
    }

    /// Applies the block soft-thresholding operator to a weight row
    fn prox(&self, value: ArrayView1<f64>, step_size: f64) -> Array1<f64> {
        block_soft_thresholding(value, self.alpha * step_size)
    }

    /// The distance of the gradient to the subdifferential of L21 is:
    /// dist(grad, subdiff) = max(0, ||grad|| - alpha)             if ||W[j]|| = 0
    ///                       || grad + alpha * W[j] / ||W[j]|| || otherwise
    fn subdiff_distance(&self, W: ArrayView2<f64>, grad: ArrayView2<f64>) -> (Array1<f64>, f64) {
        let subdiff_dist = Array1::from_iter(
            grad.axis_iter(Axis(0))
                .zip(W.axis_iter(Axis(0)))
                .map(|(grad_j, W_j)| {
                    let norm_W_j = W_j.dot(&W_j).sqrt();
                    if norm_W_j == 0. {
                        f64::max(0., grad_j.dot(&grad_j).sqrt() - self.alpha)
                    } else {
                        let r = &grad_j + &(&W_j * (self.alpha / norm_W_j));
                        r.dot(&r).sqrt()
                    }
                }),
        );
        let max_dist = max_of(&subdiff_dist);
        (subdiff_dist, max_dist)
    }
}
