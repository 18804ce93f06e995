use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::datafits::Quadratic;
use crate::penalties::Penalty;


/// This function constructs the gradient of the datafit for every feature.
pub fn construct_grad(X: ArrayView2<f64>, Xw: ArrayView1<f64>, datafit: &Quadratic) -> Array1<f64> {
    Array1::from_iter((0..X.ncols()).map(|j| datafit.gradient_j(X, Xw, j)))
}

/// This function computes the distance of the gradient of the datafit to the
/// subdifferential of the penalty. It returns an array containing the distances
/// for each feature as well as the maximum distance.
pub fn kkt_violation<P: Penalty>(
    X: ArrayView2<f64>,
    w: ArrayView1<f64>,
    Xw: ArrayView1<f64>,
    datafit: &Quadratic,
    penalty: &P,
) -> (Array1<f64>, f64) {
    let grad = construct_grad(X, Xw, datafit);
    penalty.subdiff_distance(w, grad.view())
}

/// This function performs one cycle of proximal coordinate descent over the
/// features, keeping the model fit `Xw` up to date.
pub fn cd_epoch<P: Penalty>(
    X: ArrayView2<f64>,
    w: &mut Array1<f64>,
    Xw: &mut Array1<f64>,
    datafit: &Quadratic,
    penalty: &P,
) {
    let lipschitz = datafit.lipschitz();
    for j in 0..X.ncols() {
        if lipschitz[j] == 0. {
            continue;
        }
        let old_w_j = w[j];
        let grad_j = datafit.gradient_j(X, Xw.view(), j);
        w[j] = penalty.prox(old_w_j - grad_j / lipschitz[j], 1. / lipschitz[j]);
        let diff = w[j] - old_w_j;
        if diff != 0. {
            Xw.scaled_add(diff, &X.column(j));
        }
    }
}

/// This function solves a single-task sparse regression problem by cyclic
/// proximal coordinate descent. The optimality conditions are checked every 10
/// epochs and the routine stops once the KKT violation falls below
/// `tolerance`.
pub fn coordinate_descent<P: Penalty>(
    X: ArrayView2<f64>,
    y: ArrayView1<f64>,
    datafit: &mut Quadratic,
    penalty: &P,
    max_epochs: usize,
    tolerance: f64,
) -> Array1<f64> {
    let mut w = Array1::<f64>::zeros(X.ncols());
    let mut Xw = Array1::<f64>::zeros(X.nrows());
    datafit.initialize(X, y);

    for epoch in 0..max_epochs {
        cd_epoch(X, &mut w, &mut Xw, datafit, penalty);

        if epoch % 10 == 0 {
            let (_, kkt_max) = kkt_violation(X, w.view(), Xw.view(), datafit, penalty);
            let p_obj = datafit.value(y, Xw.view()) + penalty.value(w.view());
            tracing::trace!(epoch, p_obj, kkt_max, "coordinate descent");
            if kkt_max <= tolerance {
                tracing::debug!(epoch, kkt_max, "coordinate descent converged");
                break;
            }
        }
    }
    w
}
