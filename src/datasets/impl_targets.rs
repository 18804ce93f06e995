use super::AsMultiTargets;
use ndarray::{ArrayBase, ArrayView2, Axis, Data, Ix1, Ix2};

impl<S: Data<Elem = f64>> AsMultiTargets for ArrayBase<S, Ix2> {
    fn n_samples(&self) -> usize {
        self.len_of(Axis(0))
    }

    fn n_tasks(&self) -> usize {
        self.len_of(Axis(1))
    }

    fn as_multi_tasks(&self) -> ArrayView2<f64> {
        self.view()
    }
}

impl<S: Data<Elem = f64>> AsMultiTargets for ArrayBase<S, Ix1> {
    fn n_samples(&self) -> usize {
        self.len_of(Axis(0))
    }

    fn n_tasks(&self) -> usize {
        1
    }

    fn as_multi_tasks(&self) -> ArrayView2<f64> {
        self.view().insert_axis(Axis(1))
    }
}

impl<T: AsMultiTargets> AsMultiTargets for &T {
    fn n_samples(&self) -> usize {
        (*self).n_samples()
    }

    fn n_tasks(&self) -> usize {
        (*self).n_tasks()
    }

    fn as_multi_tasks(&self) -> ArrayView2<f64> {
        (*self).as_multi_tasks()
    }
}
