//! Cross-validation splitters.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{EmulatorError, Result};
use crate::helpers::make_rng;

#[cfg(test)]
mod tests;

/// A `(train_indices, test_indices)` pair.
pub type Split = (Vec<usize>, Vec<usize>);

/// K-Fold cross-validation
///
/// The samples are cut into `n_splits` contiguous folds, after an optional
/// shuffle. The first `n_samples % n_splits` folds hold one extra sample.
/// Each fold is used once as the test set, the others forming the training
/// set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KFold {
    pub n_splits: usize,
    pub shuffle: bool,
    pub random_state: Option<u64>,
}

impl Default for KFold {
    fn default() -> Self {
        KFold {
            n_splits: 5,
            shuffle: true,
            random_state: None,
        }
    }
}

impl KFold {
    pub fn new(n_splits: usize) -> Self {
        KFold {
            n_splits,
            ..Default::default()
        }
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Set random state for reproducibility
    pub fn with_random_state(mut self, random_state: Option<u64>) -> Self {
        self.random_state = random_state;
        self
    }

    pub fn split(&self, n_samples: usize) -> Result<Vec<Split>> {
        let n_splits = self.n_splits;
        if n_splits < 2 || n_samples < n_splits {
            return Err(EmulatorError::InvalidFolds {
                n_splits,
                n_samples,
            });
        }

        let mut indices: Vec<usize> = (0..n_samples).collect();
        if self.shuffle {
            indices.shuffle(&mut make_rng(self.random_state));
        }

        let base = n_samples / n_splits;
        let remainder = n_samples % n_splits;
        let mut splits = Vec::with_capacity(n_splits);
        let mut current = 0;
        for fold_idx in 0..n_splits {
            let fold_size = if fold_idx < remainder { base + 1 } else { base };
            let test = indices[current..current + fold_size].to_vec();
            let train = indices[..current]
                .iter()
                .chain(indices[current + fold_size..].iter())
                .copied()
                .collect();
            splits.push((train, test));
            current += fold_size;
        }
        Ok(splits)
    }
}
