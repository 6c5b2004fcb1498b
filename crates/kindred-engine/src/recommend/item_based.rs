//! Item-based recommendation.
//!
//! The item-similarity table is the expensive part (one top-K search per
//! item over the transposed store) and is built once up front. Scoring a
//! subject against it is cheap: each item the subject rated lends its
//! rating to its similar items, weighted by similarity.

use std::collections::{BTreeMap, HashMap};

use kindred_core::preferences::has_usable_rating;
use kindred_core::{ISimilarityMetric, KindredResult, PreferenceStore};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{is_voter, predictions, Tally};
use crate::ranking::{top_matches, ScoredKey};
use crate::transpose::transpose;

/// For every item, its `k` most similar items, best first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemSimilarityTable {
    entries: BTreeMap<String, Vec<ScoredKey>>,
}

impl ItemSimilarityTable {
    /// Neighbours of `item`, or `None` when the item was never rated.
    pub fn neighbors(&self, item: &str) -> Option<&[ScoredKey]> {
        self.entries.get(item).map(Vec::as_slice)
    }

    /// Number of items with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ScoredKey])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl FromIterator<(String, Vec<ScoredKey>)> for ItemSimilarityTable {
    fn from_iter<I: IntoIterator<Item = (String, Vec<ScoredKey>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Build the item-similarity table for `store` (entities rating items).
pub fn similar_items<M>(
    store: &PreferenceStore,
    k: usize,
    metric: &M,
) -> KindredResult<ItemSimilarityTable>
where
    M: ISimilarityMetric + ?Sized,
{
    let by_item = transpose(store);
    let table = by_item
        .entities()
        .map(|item| Ok((item.to_string(), top_matches(&by_item, item, k, metric)?)))
        .collect::<KindredResult<ItemSimilarityTable>>()?;

    info!(items = table.len(), k, metric = metric.name(), "built item similarity table");
    Ok(table)
}

/// [`similar_items`] with one top-K search per rayon task.
pub fn par_similar_items<M>(
    store: &PreferenceStore,
    k: usize,
    metric: &M,
) -> KindredResult<ItemSimilarityTable>
where
    M: ISimilarityMetric + ?Sized,
{
    let by_item = transpose(store);
    let items: Vec<&str> = by_item.entities().collect();
    let rows = items
        .into_par_iter()
        .map(|item| Ok((item.to_string(), top_matches(&by_item, item, k, metric)?)))
        .collect::<KindredResult<Vec<_>>>()?;
    let table: ItemSimilarityTable = rows.into_iter().collect();

    info!(items = table.len(), k, metric = metric.name(), "built item similarity table in parallel");
    Ok(table)
}

/// Predicted ratings for items `subject` has not usefully rated, derived
/// from the subject's own ratings and `table`. Best first.
///
/// Only positively similar item pairs contribute.
pub fn recommend_items(
    store: &PreferenceStore,
    table: &ItemSimilarityTable,
    subject: &str,
) -> KindredResult<Vec<ScoredKey>> {
    let subject_row = store.ratings(subject)?;

    let mut tallies: HashMap<&str, Tally> = HashMap::new();
    for (item, &rating) in subject_row {
        if !has_usable_rating(subject_row, item) {
            continue;
        }
        let Some(neighbours) = table.neighbors(item) else {
            continue;
        };
        for neighbour in neighbours {
            if !is_voter(neighbour.score) || has_usable_rating(subject_row, &neighbour.key) {
                continue;
            }
            tallies
                .entry(neighbour.key.as_str())
                .or_default()
                .add(rating, neighbour.score);
        }
    }

    let ranked = predictions(tallies);
    debug!(subject, recommended = ranked.len(), "item-based recommendations");
    Ok(ranked)
}
