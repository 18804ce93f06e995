use ndarray::{Array2, ArrayView2, Axis};

use crate::datafits::QuadraticMultiTask;
use crate::penalties::MultiTaskPenalty;


/// This function constructs the gradient of the datafit, one row per feature.
pub fn construct_grad(
    X: ArrayView2<f64>,
    XW: ArrayView2<f64>,
    datafit: &QuadraticMultiTask,
) -> Array2<f64> {
    let mut grad = Array2::<f64>::zeros((X.ncols(), XW.ncols()));
    for (j, mut grad_j) in grad.axis_iter_mut(Axis(0)).enumerate() {
        grad_j.assign(&datafit.gradient_j(X, XW, j));
    }
    grad
}

/// This function computes the distance of the gradient of the datafit to the
/// subdifferential of the penalty, for each row of coefficients.
pub fn kkt_violation<P: MultiTaskPenalty>(
    X: ArrayView2<f64>,
    W: ArrayView2<f64>,
    XW: ArrayView2<f64>,
    datafit: &QuadraticMultiTask,
    penalty: &P,
) -> (ndarray::Array1<f64>, f64) {
    let grad = construct_grad(X, XW, datafit);
    penalty.subdiff_distance(W, grad.view())
}

/// This function performs one cycle of proximal block coordinate descent, each
/// block being the row of coefficients of one feature across the tasks.
pub fn bcd_epoch<P: MultiTaskPenalty>(
    X: ArrayView2<f64>,
    W: &mut Array2<f64>,
    XW: &mut Array2<f64>,
    datafit: &QuadraticMultiTask,
    penalty: &P,
) {
    let lipschitz = datafit.lipschitz();
    for j in 0..X.ncols() {
        if lipschitz[j] == 0. {
            continue;
        }
        let old_W_j = W.row(j).to_owned();
        let grad_j = datafit.gradient_j(X, XW.view(), j);
        let upd = &old_W_j - &(grad_j / lipschitz[j]);
        let new_W_j = penalty.prox(upd.view(), 1. / lipschitz[j]);
        let diff = &new_W_j - &old_W_j;
        if diff.iter().any(|&d| d != 0.) {
            let X_j = X.column(j);
            for (mut XW_i, &x_ij) in XW.axis_iter_mut(Axis(0)).zip(X_j) {
                XW_i.scaled_add(x_ij, &diff);
            }
            W.row_mut(j).assign(&new_W_j);
        }
    }
}

/// This function solves a multi-task sparse regression problem by cyclic
/// proximal block coordinate descent.
pub fn block_coordinate_descent<P: MultiTaskPenalty>(
    X: ArrayView2<f64>,
    Y: ArrayView2<f64>,
    datafit: &mut QuadraticMultiTask,
    penalty: &P,
    max_epochs: usize,
    tolerance: f64,
) -> Array2<f64> {
    let mut W = Array2::<f64>::zeros((X.ncols(), Y.ncols()));
    let mut XW = Array2::<f64>::zeros((X.nrows(), Y.ncols()));
    datafit.initialize(X, Y);

    for epoch in 0..max_epochs {
        bcd_epoch(X, &mut W, &mut XW, datafit, penalty);

        if epoch % 10 == 0 {
            let (_, kkt_max) = kkt_violation(X, W.view(), XW.view(), datafit, penalty);
            let p_obj = datafit.value(Y, XW.view()) + penalty.value(W.view());
            tracing::trace!(epoch, p_obj, kkt_max, "block coordinate descent");
            if kkt_max <= tolerance {
                tracing::debug!(epoch, kkt_max, "block coordinate descent converged");
                break;
            }
        }
    }
    W
}
