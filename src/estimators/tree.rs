//! Multi-output regression trees, the building block of the forest and
//! boosting emulators.

use ndarray::{Array1, Array2, ArrayView2, Axis};
use rand::seq::index::sample;
use rand::Rng;

use super::hyperparams::TreeParams;
use crate::datasets::check_n_features;
use crate::error::{EmulatorError, Result};

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Leaf {
        value: Array1<f64>,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// A CART regression tree minimizing the squared error summed over the
/// outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    params: TreeParams,
    root: Option<Node>,
    n_features: usize,
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    score: f64,
}

impl DecisionTree {
    pub fn new(params: TreeParams) -> DecisionTree {
        DecisionTree {
            params,
            root: None,
            n_features: 0,
        }
    }

    /// Grows the tree on the rows of `(x, y)` listed in `indices`. Rows may be
    /// repeated, as happens with bootstrap samples.
    pub fn fit_indices<R: Rng>(
        &mut self,
        x: ArrayView2<f64>,
        y: ArrayView2<f64>,
        indices: &[usize],
        rng: &mut R,
    ) -> Result<()> {
        if indices.is_empty() {
            return Err(EmulatorError::EmptyDataset);
        }
        self.n_features = x.ncols();
        let mut indices = indices.to_vec();
        self.root = Some(self.build(x, y, &mut indices, 0, rng));
        Ok(())
    }

    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        let root = self
            .root
            .as_ref()
            .ok_or_else(|| EmulatorError::NotFitted("DecisionTree".to_string()))?;
        check_n_features(x, self.n_features)?;
        let n_outputs = leaf_width(root);
        let mut out = Array2::<f64>::zeros((x.nrows(), n_outputs));
        for (row, mut out_row) in x.axis_iter(Axis(0)).zip(out.axis_iter_mut(Axis(0))) {
            let mut node = root;
            loop {
                match node {
                    Node::Leaf { value } => {
                        out_row.assign(value);
                        break;
                    }
                    Node::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    } => {
                        node = if row[*feature] <= *threshold {
                            left.as_ref()
                        } else {
                            right.as_ref()
                        };
                    }
                }
            }
        }
        Ok(out)
    }

    pub fn depth(&self) -> usize {
        fn node_depth(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 0,
                Node::Split { left, right, .. } => 1 + node_depth(left).max(node_depth(right)),
            }
        }
        self.root.as_ref().map(node_depth).unwrap_or(0)
    }

    pub fn n_leaves(&self) -> usize {
        fn count(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 1,
                Node::Split { left, right, .. } => count(left) + count(right),
            }
        }
        self.root.as_ref().map(count).unwrap_or(0)
    }

    fn build<R: Rng>(
        &self,
        x: ArrayView2<f64>,
        y: ArrayView2<f64>,
        indices: &mut [usize],
        depth: usize,
        rng: &mut R,
    ) -> Node {
        let depth_reached = self.params.max_depth.map_or(false, |d| depth >= d);
        if depth_reached || indices.len() < self.params.min_samples_split {
            return Node::Leaf {
                value: leaf_value(y, indices),
            };
        }

        let best = match self.find_best_split(x, y, indices, rng) {
            Some(best) => best,
            None => {
                return Node::Leaf {
                    value: leaf_value(y, indices),
                }
            }
        };

        // Partition in place: rows going left first
        let mut n_left = 0;
        for i in 0..indices.len() {
            if x[[indices[i], best.feature]] <= best.threshold {
                indices.swap(i, n_left);
                n_left += 1;
            }
        }
        let (left_idx, right_idx) = indices.split_at_mut(n_left);
        let left = self.build(x, y, left_idx, depth + 1, rng);
        let right = self.build(x, y, right_idx, depth + 1, rng);
        Node::Split {
            feature: best.feature,
            threshold: best.threshold,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Searches the split maximizing `sum_t S_left_t^2 / n_left + S_right_t^2 / n_right`,
    /// which is equivalent to minimizing the squared error of the children.
    fn find_best_split<R: Rng>(
        &self,
        x: ArrayView2<f64>,
        y: ArrayView2<f64>,
        indices: &[usize],
        rng: &mut R,
    ) -> Option<BestSplit> {
        let n = indices.len();
        let n_outputs = y.ncols();
        let min_leaf = self.params.min_samples_leaf;
        if n < 2 * min_leaf {
            return None;
        }

        let mut total = Array1::<f64>::zeros(n_outputs);
        for &i in indices.iter() {
            total += &y.row(i);
        }
        let parent_score = total.dot(&total) / n as f64;

        let n_features = x.ncols();
        if n_features == 0 {
            return None;
        }
        let n_candidates = ((self.params.max_features * n_features as f64).ceil() as usize)
            .clamp(1, n_features);
        let features = sample(rng, n_features, n_candidates).into_vec();

        let mut best: Option<BestSplit> = None;
        let mut sorted = indices.to_vec();
        let mut left_sum = Array1::<f64>::zeros(n_outputs);
        for feature in features {
            sorted.sort_by(|&a, &b| x[[a, feature]].total_cmp(&x[[b, feature]]));
            left_sum.fill(0.);
            for pos in 0..(n - 1) {
                left_sum += &y.row(sorted[pos]);
                let n_left = pos + 1;
                let n_right = n - n_left;
                let current = x[[sorted[pos], feature]];
                let next = x[[sorted[pos + 1], feature]];
                if n_left < min_leaf || n_right < min_leaf || current == next {
                    continue;
                }
                let right_sum = &total - &left_sum;
                let score = left_sum.dot(&left_sum) / n_left as f64
                    + right_sum.dot(&right_sum) / n_right as f64;
                let improves = match &best {
                    Some(b) => score > b.score,
                    None => score > parent_score + 1e-12 * parent_score.abs().max(1.),
                };
                if improves {
                    let mut threshold = current + (next - current) / 2.;
                    if threshold >= next {
                        threshold = current;
                    }
                    best = Some(BestSplit {
                        feature,
                        threshold,
                        score,
                    });
                }
            }
        }
        best
    }
}

fn leaf_value(y: ArrayView2<f64>, indices: &[usize]) -> Array1<f64> {
    let mut value = Array1::<f64>::zeros(y.ncols());
    for &i in indices {
        value += &y.row(i);
    }
    value / indices.len().max(1) as f64
}

fn leaf_width(node: &Node) -> usize {
    match node {
        Node::Leaf { value } => value.len(),
        Node::Split { left, .. } => leaf_width(left),
    }
}
