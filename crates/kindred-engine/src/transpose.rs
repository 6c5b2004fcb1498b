//! Swap the two levels of a preference store.
//!
//! `transpose(store)[item][entity] == store[entity][item]`. The same
//! similarity, ranking and recommendation code then runs on items instead
//! of entities. Entities with empty rows have nothing to transpose and do
//! not survive a round trip.

use std::collections::BTreeMap;

use kindred_core::{PreferenceStore, Ratings};

/// Build a new store with entity and item levels swapped. `store` is not
/// modified.
pub fn transpose(store: &PreferenceStore) -> PreferenceStore {
    let mut swapped: BTreeMap<String, Ratings> = BTreeMap::new();
    for (entity, row) in store.iter() {
        for (item, &rating) in row {
            swapped
                .entry(item.clone())
                .or_default()
                .insert(entity.to_string(), rating);
        }
    }
    PreferenceStore::from(swapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_core::PreferenceStoreBuilder;

    #[test]
    fn swaps_levels() {
        let mut b = PreferenceStoreBuilder::new();
        b.rate("ann", "x", 1.0).unwrap();
        b.rate("ann", "y", 2.0).unwrap();
        b.rate("bob", "x", 3.0).unwrap();
        let t = transpose(&b.build());

        assert_eq!(t.len(), 2);
        assert_eq!(t.rating("x", "ann"), Some(1.0));
        assert_eq!(t.rating("x", "bob"), Some(3.0));
        assert_eq!(t.rating("y", "ann"), Some(2.0));
        assert_eq!(t.rating("y", "bob"), None);
    }

    #[test]
    fn empty_rows_vanish() {
        let mut b = PreferenceStoreBuilder::new();
        b.rate("ann", "x", 1.0).unwrap();
        b.ensure_entity("quiet");
        let original = b.build();
        let round_trip = transpose(&transpose(&original));

        assert!(!round_trip.contains("quiet"));
        assert_eq!(round_trip.ratings("ann").unwrap(), original.ratings("ann").unwrap());
    }

    #[test]
    fn empty_store_transposes_to_empty() {
        assert!(transpose(&PreferenceStore::new()).is_empty());
    }
}
