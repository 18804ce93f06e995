use rand::rngs::StdRng;
use rand::SeedableRng;

#[cfg(test)]
mod tests;

/// Seeded generator when a random state is given, entropy-seeded otherwise.
pub fn make_rng(random_state: Option<u64>) -> StdRng {
    match random_state {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// This module implements the proximal operators of the penalties used by the
/// sparse linear emulators.
pub mod prox {
    use ndarray::{Array1, ArrayView1};

    /// The soft-thresholding operator is the proximal operator of the L1 norm.
    pub fn soft_thresholding(x: f64, threshold: f64) -> f64 {
        if x > threshold {
            x - threshold
        } else if x < -threshold {
            x + threshold
        } else {
            0.
        }
    }

    /// The block soft-thresholding operator is the proximal operator of the
    /// L21 norm.
    pub fn block_soft_thresholding(x: ArrayView1<f64>, threshold: f64) -> Array1<f64> {
        let norm_x = x.dot(&x).sqrt();
        if norm_x <= threshold {
            return Array1::<f64>::zeros(x.len());
        }
        let scale = 1. - threshold / norm_x;
        &x * scale
    }
}

/// This module contains the dense linear algebra routines needed by the
/// kernel and polynomial emulators. We made the choice not to use a LAPACK
/// binding since it introduces unsafe code and a significantly larger bundle
/// size.
pub mod linalg {
    use crate::error::{EmulatorError, Result};
    use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

    /// Computes the lower triangular factor `L` such that `A = L L^T`.
    pub fn cholesky_factorization(A: ArrayView2<f64>) -> Result<Array2<f64>> {
        let n = A.nrows();
        if A.ncols() != n {
            return Err(EmulatorError::SingularMatrix);
        }
        let mut L = Array2::<f64>::zeros((n, n));
        for i in 0..n {
            for j in 0..=i {
                let sum: f64 = (0..j).map(|k| L[[i, k]] * L[[j, k]]).sum();
                if i == j {
                    let val = A[[i, i]] - sum;
                    if val <= 0. || !val.is_finite() {
                        return Err(EmulatorError::SingularMatrix);
                    }
                    L[[i, j]] = val.sqrt();
                } else {
                    L[[i, j]] = (A[[i, j]] - sum) / L[[j, j]];
                }
            }
        }
        Ok(L)
    }

    /// Solves `L x = b` for a lower triangular `L`.
    pub fn forward_substitution(L: ArrayView2<f64>, b: ArrayView1<f64>) -> Result<Array1<f64>> {
        let n = b.len();
        let mut x = Array1::<f64>::zeros(n);
        for i in 0..n {
            if L[[i, i]] == 0. {
                return Err(EmulatorError::SingularMatrix);
            }
            let sum: f64 = (0..i).map(|j| L[[i, j]] * x[j]).sum();
            x[i] = (b[i] - sum) / L[[i, i]];
        }
        Ok(x)
    }

    /// Solves `U x = b` for an upper triangular `U`.
    pub fn backward_substitution(U: ArrayView2<f64>, b: ArrayView1<f64>) -> Result<Array1<f64>> {
        let n = b.len();
        let mut x = Array1::<f64>::zeros(n);
        for i in (0..n).rev() {
            if U[[i, i]] == 0. {
                return Err(EmulatorError::SingularMatrix);
            }
            let sum: f64 = ((i + 1)..n).map(|j| U[[i, j]] * x[j]).sum();
            x[i] = (b[i] - sum) / U[[i, i]];
        }
        Ok(x)
    }

    /// Solves `L L^T X = B` column by column, given the Cholesky factor `L`.
    pub fn cholesky_solve(L: ArrayView2<f64>, B: ArrayView2<f64>) -> Result<Array2<f64>> {
        let Lt = L.t();
        let mut X = Array2::<f64>::zeros(B.raw_dim());
        for (b, mut x) in B.axis_iter(Axis(1)).zip(X.axis_iter_mut(Axis(1))) {
            let z = forward_substitution(L, b)?;
            x.assign(&backward_substitution(Lt, z.view())?);
        }
        Ok(X)
    }

    /// Solves the symmetric positive definite system `A X = B`.
    pub fn solve_spd(A: ArrayView2<f64>, B: ArrayView2<f64>) -> Result<Array2<f64>> {
        let L = cholesky_factorization(A)?;
        cholesky_solve(L.view(), B)
    }
}

/// This module contains helpers functions to efficiently write tests and
/// benchmarks.
pub mod test_helpers {
    use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    pub fn assert_array_all_close(x: ArrayView1<f64>, y: ArrayView1<f64>, delta: f64) {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if (x[i] - y[i]).abs() > delta {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    pub fn assert_array2d_all_close(x: ArrayView2<f64>, y: ArrayView2<f64>, delta: f64) {
        assert_eq!(x.shape(), y.shape());
        for ((i, j), &xij) in x.indexed_iter() {
            if (xij - y[[i, j]]).abs() > delta {
                panic!(
                    "x: {}, y: {} ; with precision level {}",
                    xij,
                    y[[i, j]],
                    delta
                );
            }
        }
    }

    pub fn fill_random_vector(capacity: usize, seed: u64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., 1.).unwrap();

        let mut data_x: Vec<f64> = Vec::with_capacity(capacity);
        for _ in 0..data_x.capacity() {
            data_x.push(normal.sample(&mut r));
        }
        data_x
    }

    /// Generates a linear single-output problem with a small amount of noise.
    pub fn generate_random_data(n_samples: usize, n_features: usize) -> (Array2<f64>, Array1<f64>) {
        let data_x = fill_random_vector(n_samples * n_features, 42);
        let data_w = fill_random_vector(n_features, 43);
        let data_e = fill_random_vector(n_samples, 44);
        let X = Array2::from_shape_vec((n_samples, n_features), data_x).unwrap();
        let true_w = Array1::from_shape_vec(n_features, data_w).unwrap();
        let noise = Array1::from_shape_vec(n_samples, data_e).unwrap() * 0.1;
        let y = X.dot(&true_w) + noise;

        (X, y)
    }

    /// Generates a linear multi-output problem with a small amount of noise.
    pub fn generate_random_data_mtl(
        n_samples: usize,
        n_features: usize,
        n_tasks: usize,
    ) -> (Array2<f64>, Array2<f64>) {
        let data_x = fill_random_vector(n_samples * n_features, 42);
        let data_w = fill_random_vector(n_features * n_tasks, 43);
        let data_e = fill_random_vector(n_samples * n_tasks, 44);
        let X = Array2::from_shape_vec((n_samples, n_features), data_x).unwrap();
        let true_W = Array2::from_shape_vec((n_features, n_tasks), data_w).unwrap();
        let noise = Array2::from_shape_vec((n_samples, n_tasks), data_e).unwrap() * 0.1;
        let Y = X.dot(&true_W) + noise;
        (X, Y)
    }

    /// Generates a smooth non-linear simulator response on `[0, 1]^n_features`,
    /// the kind of input-output map emulators are built for.
    pub fn generate_simulation_data(n_samples: usize, n_features: usize) -> (Array2<f64>, Array2<f64>) {
        let data_x = fill_random_vector(n_samples * n_features, 7);
        let X = Array2::from_shape_vec((n_samples, n_features), data_x)
            .unwrap()
            .mapv(|v| 0.5 + 0.25 * v);
        let Y = Array2::from_shape_fn((n_samples, 2), |(i, t)| {
            let row = X.row(i);
            let s = row.sum();
            if t == 0 {
                (2. * s).sin() + row[0]
            } else {
                s * s - row[row.len() - 1]
            }
        });
        (X, Y)
    }
}
