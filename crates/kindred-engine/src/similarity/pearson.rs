//! Pearson correlation over shared items.
//!
//! Degenerate comparisons (no shared items, or a row whose variance vanishes
//! relative to its own magnitude) score 0. The result is clamped to [-1, 1]
//! to absorb rounding.

use kindred_core::{KindredResult, PreferenceStore, Ratings};

use super::shared::SharedStats;

/// Pearson correlation of two rows.
pub fn pearson_score(a: &Ratings, b: &Ratings) -> f64 {
    pearson_score_with_min(a, b, 1)
}

/// Pearson correlation of two rows, treating pairs that share fewer than
/// `min_shared` items as carrying no signal.
pub fn pearson_score_with_min(a: &Ratings, b: &Ratings, min_shared: usize) -> f64 {
    let s = SharedStats::collect(a, b);
    if s.n == 0 || s.n < min_shared {
        return 0.0;
    }
    let n = s.n as f64;
    let var_a = s.sum_sq_a - s.sum_a * s.sum_a / n;
    let var_b = s.sum_sq_b - s.sum_b * s.sum_b / n;
    if is_flat(var_a, s.sum_sq_a, n) || is_flat(var_b, s.sum_sq_b, n) {
        return 0.0;
    }
    let numerator = s.sum_prod - (s.sum_a * s.sum_b / n);
    let denominator = (var_a * var_b).sqrt();
    if !denominator.is_finite() || denominator <= 0.0 {
        return 0.0;
    }
    (numerator / denominator).clamp(-1.0, 1.0)
}

/// Zero variance, relative to the magnitude of the ratings. Cancellation in
/// `sum_sq - sum²/n` leaves at most a few ulps of `sum_sq` for a flat row.
fn is_flat(variance: f64, sum_sq: f64, n: f64) -> bool {
    variance <= sum_sq * n * f64::EPSILON
}

/// Pearson correlation of entities `a` and `b` in `store`.
pub fn sim_pearson(store: &PreferenceStore, a: &str, b: &str) -> KindredResult<f64> {
    Ok(pearson_score(store.ratings(a)?, store.ratings(b)?))
}
