use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::constants::UNRATED_SENTINEL;
use crate::errors::{KindredError, KindredResult};

/// One entity's ratings, keyed by item.
pub type Ratings = BTreeMap<String, f64>;

/// Two-level mapping from entity key to item key to rating.
///
/// Read-only once built. Sorted maps keep iteration (and therefore
/// floating-point accumulation order) deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceStore {
    entries: BTreeMap<String, Ratings>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The row for `entity`, or `EntityNotFound`.
    pub fn ratings(&self, entity: &str) -> KindredResult<&Ratings> {
        self.entries
            .get(entity)
            .ok_or_else(|| KindredError::entity_not_found(entity))
    }

    /// The row for `entity`, if present.
    pub fn get(&self, entity: &str) -> Option<&Ratings> {
        self.entries.get(entity)
    }

    /// The rating `entity` gave `item`, if any was recorded.
    pub fn rating(&self, entity: &str, item: &str) -> Option<f64> {
        self.entries.get(entity)?.get(item).copied()
    }

    pub fn contains(&self, entity: &str) -> bool {
        self.entries.contains_key(entity)
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entity keys in ascending order.
    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Every item key rated by at least one entity, ascending.
    pub fn items(&self) -> BTreeSet<&str> {
        self.entries
            .values()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect()
    }

    /// `(entity, row)` pairs in ascending entity order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Ratings)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Total number of recorded (entity, item) pairs.
    pub fn rating_count(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn into_inner(self) -> BTreeMap<String, Ratings> {
        self.entries
    }
}

impl From<BTreeMap<String, Ratings>> for PreferenceStore {
    fn from(entries: BTreeMap<String, Ratings>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, Ratings)> for PreferenceStore {
    fn from_iter<I: IntoIterator<Item = (String, Ratings)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PreferenceStore {
    type Item = (&'a String, &'a Ratings);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Ratings>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Whether `row` carries a usable preference for `item`.
///
/// Absent and exactly-zero ratings both mean "no usable preference".
pub fn has_usable_rating(row: &Ratings, item: &str) -> bool {
    matches!(row.get(item), Some(&r) if r != UNRATED_SENTINEL)
}
