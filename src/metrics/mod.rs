use ndarray::{ArrayView2, Axis};


/// Coefficient of determination R², computed per output column and averaged
/// uniformly over the outputs.
///
/// A constant column scores `1` when it is predicted exactly and `0`
/// otherwise, so that the score stays finite.
pub fn r2_score(y_true: ArrayView2<f64>, y_pred: ArrayView2<f64>) -> f64 {
    let n_outputs = y_true.len_of(Axis(1));
    if n_outputs == 0 {
        return 0.;
    }
    let total: f64 = y_true
        .axis_iter(Axis(1))
        .zip(y_pred.axis_iter(Axis(1)))
        .map(|(yt, yp)| {
            let mean = yt.mean().unwrap_or(0.);
            let ss_res: f64 = yt.iter().zip(yp).map(|(a, b)| (a - b).powi(2)).sum();
            let ss_tot: f64 = yt.iter().map(|a| (a - mean).powi(2)).sum();
            if ss_tot == 0. {
                if ss_res == 0. {
                    1.
                } else {
                    0.
                }
            } else {
                1. - ss_res / ss_tot
            }
        })
        .sum();
    total / n_outputs as f64
}

/// Mean squared error over every entry of the targets.
pub fn mean_squared_error(y_true: ArrayView2<f64>, y_pred: ArrayView2<f64>) -> f64 {
    let diff = &y_true - &y_pred;
    diff.mapv(|d| d * d).mean().unwrap_or(0.)
}

pub fn root_mean_squared_error(y_true: ArrayView2<f64>, y_pred: ArrayView2<f64>) -> f64 {
    mean_squared_error(y_true, y_pred).sqrt()
}
