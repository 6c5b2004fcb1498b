//! Distance-based similarity: `1 / (1 + Σ (a_i - b_i)²)` over shared items.
//!
//! Identical shared ratings score 1.0; the score falls towards 0 as ratings
//! diverge. No shared items scores 0, not 1.

use kindred_core::{KindredResult, PreferenceStore, Ratings};

use super::shared::SharedStats;

/// Distance similarity of two rows.
pub fn distance_score(a: &Ratings, b: &Ratings) -> f64 {
    distance_score_with_min(a, b, 1)
}

/// Distance similarity of two rows, treating pairs that share fewer than
/// `min_shared` items as carrying no signal.
pub fn distance_score_with_min(a: &Ratings, b: &Ratings, min_shared: usize) -> f64 {
    let s = SharedStats::collect(a, b);
    if s.n == 0 || s.n < min_shared {
        return 0.0;
    }
    1.0 / (1.0 + s.sum_sq_diff)
}

/// Distance similarity of entities `a` and `b` in `store`.
pub fn sim_distance(store: &PreferenceStore, a: &str, b: &str) -> KindredResult<f64> {
    Ok(distance_score(store.ratings(a)?, store.ratings(b)?))
}
