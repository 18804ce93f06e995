use std::collections::hash_map::{self, HashMap};

use serde::Serialize;

/// Mean cross-validation score of each compared model, keyed by model name.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Scores {
    scores: HashMap<String, f64>,
}

impl Scores {
    pub fn new() -> Scores {
        Scores::default()
    }

    /// Records the score of a model, returning the score it replaces if the
    /// name was already present.
    pub fn insert(&mut self, name: &str, score: f64) -> Option<f64> {
        self.scores.insert(name.to_string(), score)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.scores.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scores.contains_key(name)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, f64> {
        self.scores.iter()
    }

    /// The model with the highest mean score.
    pub fn best(&self) -> Option<(&str, f64)> {
        self.scores
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(name, &score)| (name.as_str(), score))
    }

    pub fn into_inner(self) -> HashMap<String, f64> {
        self.scores
    }
}

impl<'a> IntoIterator for &'a Scores {
    type Item = (&'a String, &'a f64);
    type IntoIter = hash_map::Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.iter()
    }
}
