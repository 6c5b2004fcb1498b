//! Top-K neighbour search by exhaustive pairwise comparison.

use kindred_core::{ISimilarityMetric, KindredResult, PreferenceStore};
use rayon::prelude::*;
use tracing::debug;

use super::scored::{sort_descending, ScoredKey};

/// The `k` entities most similar to `subject`, best first.
///
/// Every other entity is scored with `metric`; the result has
/// `min(k, store.len() - 1)` entries ordered by score descending, ties by
/// key ascending. Fails with `EntityNotFound` when `subject` is absent.
pub fn top_matches<M>(
    store: &PreferenceStore,
    subject: &str,
    k: usize,
    metric: &M,
) -> KindredResult<Vec<ScoredKey>>
where
    M: ISimilarityMetric + ?Sized,
{
    store.ratings(subject)?;

    let scored = store
        .entities()
        .filter(|other| *other != subject)
        .map(|other| Ok(ScoredKey::new(metric.similarity(store, subject, other)?, other)))
        .collect::<KindredResult<Vec<_>>>()?;

    Ok(truncate_ranked(scored, k, subject, metric.name()))
}

/// [`top_matches`] with the pairwise comparisons spread over the rayon pool.
/// Output is identical to the sequential version.
pub fn par_top_matches<M>(
    store: &PreferenceStore,
    subject: &str,
    k: usize,
    metric: &M,
) -> KindredResult<Vec<ScoredKey>>
where
    M: ISimilarityMetric + ?Sized,
{
    store.ratings(subject)?;

    let others: Vec<&str> = store.entities().filter(|other| *other != subject).collect();
    let scored = others
        .into_par_iter()
        .map(|other| Ok(ScoredKey::new(metric.similarity(store, subject, other)?, other)))
        .collect::<KindredResult<Vec<_>>>()?;

    Ok(truncate_ranked(scored, k, subject, metric.name()))
}

fn truncate_ranked(
    mut scored: Vec<ScoredKey>,
    k: usize,
    subject: &str,
    metric: &str,
) -> Vec<ScoredKey> {
    let candidates = scored.len();
    sort_descending(&mut scored);
    scored.truncate(k);
    debug!(
        subject,
        metric,
        candidates,
        returned = scored.len(),
        "ranked neighbours"
    );
    scored
}
