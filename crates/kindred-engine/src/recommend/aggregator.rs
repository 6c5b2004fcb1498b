//! User-based recommendation by similarity-weighted averaging.
//!
//! For each other entity `o` with `sim(subject, o) > 0`, and each item `o`
//! has an entry for that the subject has not usefully rated:
//!
//! ```text
//! weighted_sum[item] += rating(o, item) * sim
//! weight_sum[item]   += sim
//! prediction[item]    = weighted_sum[item] / weight_sum[item]
//! ```
//!
//! Neighbours with zero or negative similarity never vote, so dissimilar
//! entities cannot drag a prediction down.

use std::collections::HashMap;

use kindred_core::preferences::has_usable_rating;
use kindred_core::{ISimilarityMetric, KindredResult, PreferenceStore, Ratings};
use rayon::prelude::*;
use tracing::debug;

use super::{is_voter, predictions, Tally};
use crate::ranking::ScoredKey;

/// Predicted ratings for every item `subject` has not usefully rated,
/// best first. Empty when no other entity is positively similar.
///
/// In binary stores an item can come back with a score of 0.0: every
/// neighbour who voted on it holds only the 0 "not saved" sentinel there.
pub fn recommend<M>(
    store: &PreferenceStore,
    subject: &str,
    metric: &M,
) -> KindredResult<Vec<ScoredKey>>
where
    M: ISimilarityMetric + ?Sized,
{
    let subject_row = store.ratings(subject)?;

    let mut tallies: HashMap<&str, Tally> = HashMap::new();
    let mut voters = 0usize;
    for (other, row) in store.iter() {
        if other == subject {
            continue;
        }
        let similarity = metric.similarity(store, subject, other)?;
        if !is_voter(similarity) {
            continue;
        }
        voters += 1;
        accumulate(&mut tallies, subject_row, row, similarity);
    }

    let ranked = predictions(tallies);
    debug!(
        subject,
        metric = metric.name(),
        voters,
        recommended = ranked.len(),
        "aggregated recommendations"
    );
    Ok(ranked)
}

/// [`recommend`] with neighbours processed on the rayon pool. Each worker
/// keeps partial tallies which are merged at the end.
///
/// Predictions match the sequential version up to floating-point
/// summation order, zero-score entries included.
pub fn par_recommend<M>(
    store: &PreferenceStore,
    subject: &str,
    metric: &M,
) -> KindredResult<Vec<ScoredKey>>
where
    M: ISimilarityMetric + ?Sized,
{
    let subject_row = store.ratings(subject)?;

    let neighbours: Vec<(&str, &Ratings)> =
        store.iter().filter(|(other, _)| *other != subject).collect();

    let tallies = neighbours
        .into_par_iter()
        .try_fold(HashMap::new, |mut partial, (other, row)| {
            let similarity = metric.similarity(store, subject, other)?;
            if is_voter(similarity) {
                accumulate(&mut partial, subject_row, row, similarity);
            }
            Ok::<_, kindred_core::KindredError>(partial)
        })
        .try_reduce(HashMap::new, |mut left, right| {
            for (item, tally) in right {
                left.entry(item).or_default().merge(tally);
            }
            Ok(left)
        })?;

    let ranked = predictions(tallies);
    debug!(
        subject,
        metric = metric.name(),
        recommended = ranked.len(),
        "aggregated recommendations in parallel"
    );
    Ok(ranked)
}

fn accumulate<'a>(
    tallies: &mut HashMap<&'a str, Tally>,
    subject_row: &Ratings,
    neighbour_row: &'a Ratings,
    similarity: f64,
) {
    for (item, &rating) in neighbour_row {
        if has_usable_rating(subject_row, item) {
            continue;
        }
        tallies
            .entry(item.as_str())
            .or_default()
            .add(rating, similarity);
    }
}
