//! Incremental construction of a [`PreferenceStore`].
//!
//! Mirrors how an acquisition layer fills the store: register entities up
//! front, record explicit ratings or implicit "touched" marks, then
//! optionally densify with the unrated sentinel.

use std::collections::{BTreeMap, BTreeSet};

use super::store::{PreferenceStore, Ratings};
use crate::constants::IMPLICIT_RATING;
use crate::errors::{KindredError, KindredResult};

#[derive(Debug, Clone, Default)]
pub struct PreferenceStoreBuilder {
    entries: BTreeMap<String, Ratings>,
}

impl PreferenceStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `entity` with an empty row if it is not already present.
    pub fn ensure_entity(&mut self, entity: impl Into<String>) -> &mut Self {
        self.entries.entry(entity.into()).or_default();
        self
    }

    /// Record an explicit rating. A later rating for the same pair replaces
    /// the earlier one.
    pub fn rate(
        &mut self,
        entity: impl Into<String>,
        item: impl Into<String>,
        rating: f64,
    ) -> KindredResult<&mut Self> {
        let entity = entity.into();
        let item = item.into();
        if !rating.is_finite() {
            return Err(KindredError::InvalidRating {
                entity,
                item,
                value: rating,
            });
        }
        self.entries.entry(entity).or_default().insert(item, rating);
        Ok(self)
    }

    /// Record implicit feedback: `entity` interacted with `item`.
    pub fn mark(&mut self, entity: impl Into<String>, item: impl Into<String>) -> &mut Self {
        self.entries
            .entry(entity.into())
            .or_default()
            .insert(item.into(), IMPLICIT_RATING);
        self
    }

    /// Give every entity an entry for every item seen anywhere, using
    /// `value` where nothing was recorded.
    pub fn fill_missing(&mut self, value: f64) -> &mut Self {
        let all_items: BTreeSet<String> = self
            .entries
            .values()
            .flat_map(|row| row.keys().cloned())
            .collect();
        for row in self.entries.values_mut() {
            for item in &all_items {
                row.entry(item.clone()).or_insert(value);
            }
        }
        self
    }

    /// Number of registered entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(&self) -> PreferenceStore {
        PreferenceStore::from(self.entries.clone())
    }
}
