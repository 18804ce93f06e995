use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

#[cfg(test)]
mod tests;

/// Quadratic datafit
///
/// The least-squares datafit used by the sparse linear emulators:
/// ```ignore
/// 1 / (2 * n_samples) * ||y - Xw||^2_2
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Quadratic {
    lipschitz: Array1<f64>,
    Xty: Array1<f64>,
}

impl Quadratic {
    pub fn new() -> Quadratic {
        Quadratic::default()
    }

    /// Initializes the datafit by pre-computing useful quantities
    pub fn initialize(&mut self, X: ArrayView2<f64>, y: ArrayView1<f64>) {
        let n_samples = X.nrows() as f64;
        self.Xty = X.t().dot(&y);
        self.lipschitz = X.map_axis(Axis(0), |Xj| Xj.dot(&Xj) / n_samples);
    }

    /// Computes the value of the datafit
    pub fn value(&self, y: ArrayView1<f64>, Xw: ArrayView1<f64>) -> f64 {
        let r = &y - &Xw;
        r.dot(&r) / (2. * y.len() as f64)
    }

    /// Computes the value of the gradient at some point w for coordinate j
    pub fn gradient_j(&self, X: ArrayView2<f64>, Xw: ArrayView1<f64>, j: usize) -> f64 {
        (X.column(j).dot(&Xw) - self.Xty[j]) / X.nrows() as f64
    }

    // Getter for Lipschitz constants
    pub fn lipschitz(&self) -> ArrayView1<f64> {
        self.lipschitz.view()
    }
}

/// Multi-task quadratic datafit
///
/// ```ignore
/// 1 / (2 * n_samples) * ||Y - XW||^2_F
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuadraticMultiTask {
    lipschitz: Array1<f64>,
    XtY: Array2<f64>,
}

impl QuadraticMultiTask {
    pub fn new() -> QuadraticMultiTask {
        QuadraticMultiTask::default()
    }

    /// Initializes the datafit by pre-computing useful quantities
    pub fn initialize(&mut self, X: ArrayView2<f64>, Y: ArrayView2<f64>) {
        let n_samples = X.nrows() as f64;
        self.XtY = X.t().dot(&Y);
        self.lipschitz = X.map_axis(Axis(0), |Xj| Xj.dot(&Xj) / n_samples);
    }

    /// Computes the value of the datafit
    pub fn value(&self, Y: ArrayView2<f64>, XW: ArrayView2<f64>) -> f64 {
        let R = &Y - &XW;
        R.iter().map(|r| r * r).sum::<f64>() / (2. * Y.nrows() as f64)
    }

    /// Computes the gradient with respect to the j-th row of W
    pub fn gradient_j(&self, X: ArrayView2<f64>, XW: ArrayView2<f64>, j: usize) -> Array1<f64> {
        let n_samples = X.nrows() as f64;
        (XW.t().dot(&X.column(j)) - self.XtY.row(j)) / n_samples
    }

    // Getter for Lipschitz constants
    pub fn lipschitz(&self) -> ArrayView1<f64> {
        self.lipschitz.view()
    }
}
