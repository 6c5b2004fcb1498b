//! Recommendation: similarity-weighted rating predictions.
//!
//! - `aggregator`: user-based. Every positively similar entity votes on the
//!   items the subject has not rated.
//! - `item_based`: item-based. A precomputed item-similarity table is
//!   weighted by the subject's own ratings.

pub mod aggregator;
pub mod item_based;

pub use aggregator::{par_recommend, recommend};
pub use item_based::{par_similar_items, recommend_items, similar_items, ItemSimilarityTable};

use std::collections::HashMap;

use crate::ranking::{sort_descending, ScoredKey};

/// Running totals for one candidate item.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Tally {
    pub weighted_sum: f64,
    pub weight_sum: f64,
}

impl Tally {
    pub fn add(&mut self, rating: f64, weight: f64) {
        self.weighted_sum += rating * weight;
        self.weight_sum += weight;
    }

    pub fn merge(&mut self, other: Tally) {
        self.weighted_sum += other.weighted_sum;
        self.weight_sum += other.weight_sum;
    }
}

/// Turn tallies into predicted ratings in result order.
///
/// Only positive weights are ever added, so every tally present has a
/// non-zero weight sum.
pub(crate) fn predictions(tallies: HashMap<&str, Tally>) -> Vec<ScoredKey> {
    let mut ranked: Vec<ScoredKey> = tallies
        .into_iter()
        .map(|(item, t)| ScoredKey::new(t.weighted_sum / t.weight_sum, item))
        .collect();
    sort_descending(&mut ranked);
    ranked
}

/// Whether a similarity score may vote. NaN and non-positive scores may not.
pub(crate) fn is_voter(similarity: f64) -> bool {
    similarity > 0.0
}
