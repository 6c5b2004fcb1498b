use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A key with its score: a neighbour with its similarity, or an item with
/// its predicted rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredKey {
    pub score: f64,
    pub key: String,
}

impl ScoredKey {
    pub fn new(score: f64, key: impl Into<String>) -> Self {
        Self {
            score,
            key: key.into(),
        }
    }

    /// Result ordering: score descending, ties broken by key ascending.
    pub fn ranking_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.key.cmp(&other.key))
    }
}

/// Sort into result order (score descending, key ascending on ties).
pub fn sort_descending(scored: &mut [ScoredKey]) {
    scored.sort_by(ScoredKey::ranking_cmp);
}
