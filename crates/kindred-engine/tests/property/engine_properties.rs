//! Property tests for kindred-engine: similarity bounds and symmetry,
//! transposition round trips, ranking order, and recommendation ranges.

use std::collections::BTreeMap;

use proptest::prelude::*;

use kindred_core::preferences::has_usable_rating;
use kindred_core::{PreferenceStore, Ratings};
use kindred_engine::similarity::{distance_score, pearson_score};
use kindred_engine::{
    par_recommend, par_top_matches, recommend, sim_distance, sim_pearson, top_matches, transpose,
};

const ENTITIES: usize = 8;
const ITEMS: usize = 10;

/// Ratings on a half-star scale, like the critics fixture.
fn rating_strategy() -> impl Strategy<Value = f64> {
    (2_u8..=10).prop_map(|half_stars| f64::from(half_stars) / 2.0)
}

fn row_strategy() -> impl Strategy<Value = Ratings> {
    prop::collection::btree_map(
        (0..ITEMS).prop_map(|i| format!("item{i}")),
        rating_strategy(),
        0..ITEMS,
    )
}

fn store_strategy() -> impl Strategy<Value = PreferenceStore> {
    prop::collection::vec(row_strategy(), 1..=ENTITIES).prop_map(|rows| {
        let entries: BTreeMap<String, Ratings> = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| (format!("entity{i}"), row))
            .collect();
        PreferenceStore::from(entries)
    })
}

// =============================================================================
// Similarity
// =============================================================================
proptest! {
    #[test]
    fn similarity_is_symmetric(a in row_strategy(), b in row_strategy()) {
        prop_assert_eq!(distance_score(&a, &b), distance_score(&b, &a));
        prop_assert!((pearson_score(&a, &b) - pearson_score(&b, &a)).abs() < 1e-12);
    }

    #[test]
    fn self_distance_is_one_for_non_empty_rows(a in row_strategy()) {
        prop_assume!(!a.is_empty());
        prop_assert_eq!(distance_score(&a, &a), 1.0);
    }

    #[test]
    fn distance_is_bounded(a in row_strategy(), b in row_strategy()) {
        let score = distance_score(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn pearson_is_bounded(a in row_strategy(), b in row_strategy()) {
        let score = pearson_score(&a, &b);
        prop_assert!((-1.0..=1.0).contains(&score), "pearson out of range: {}", score);
    }
}

// =============================================================================
// Transposition
// =============================================================================
proptest! {
    #[test]
    fn double_transpose_restores_non_empty_rows(store in store_strategy()) {
        let round_trip = transpose(&transpose(&store));
        for (entity, row) in store.iter() {
            if row.is_empty() {
                prop_assert!(!round_trip.contains(entity));
            } else {
                prop_assert_eq!(round_trip.ratings(entity).unwrap(), row);
            }
        }
        prop_assert_eq!(round_trip.rating_count(), store.rating_count());
    }

    #[test]
    fn transpose_preserves_every_rating(store in store_strategy()) {
        let swapped = transpose(&store);
        for (entity, row) in store.iter() {
            for (item, rating) in row {
                prop_assert_eq!(swapped.rating(item, entity), Some(*rating));
            }
        }
    }
}

// =============================================================================
// Ranking
// =============================================================================
proptest! {
    #[test]
    fn top_matches_is_bounded_and_ordered(store in store_strategy(), k in 0_usize..12) {
        let subject = store.entities().next().unwrap().to_string();
        let result = top_matches(&store, &subject, k, &sim_pearson).unwrap();

        prop_assert!(result.len() <= k);
        prop_assert!(result.len() <= store.len() - 1);
        prop_assert_eq!(result.len(), k.min(store.len() - 1));
        prop_assert!(result.iter().all(|m| m.key != subject));
        for pair in result.windows(2) {
            prop_assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].key < pair[1].key)
            );
        }
    }

    #[test]
    fn parallel_top_matches_is_identical(store in store_strategy(), k in 0_usize..12) {
        let subject = store.entities().last().unwrap().to_string();
        prop_assert_eq!(
            top_matches(&store, &subject, k, &sim_distance).unwrap(),
            par_top_matches(&store, &subject, k, &sim_distance).unwrap()
        );
    }
}

// =============================================================================
// Recommendation
// =============================================================================
proptest! {
    #[test]
    fn recommendations_skip_rated_items_and_stay_in_range(store in store_strategy()) {
        for subject in store.entities() {
            let subject_row = store.ratings(subject).unwrap();
            let recs = recommend(&store, subject, &sim_distance).unwrap();

            for rec in &recs {
                prop_assert!(!has_usable_rating(subject_row, &rec.key));

                let voters: Vec<f64> = store
                    .iter()
                    .filter(|(other, _)| *other != subject)
                    .filter(|(other, _)| sim_distance(&store, subject, other).unwrap() > 0.0)
                    .filter_map(|(_, row)| row.get(&rec.key).copied())
                    .collect();
                let min = voters.iter().copied().fold(f64::INFINITY, f64::min);
                let max = voters.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(
                    rec.score >= min - 1e-9 && rec.score <= max + 1e-9,
                    "{} predicted {} outside [{}, {}]", rec.key, rec.score, min, max
                );
            }
        }
    }

    #[test]
    fn parallel_recommend_agrees(store in store_strategy()) {
        let subject = store.entities().next().unwrap().to_string();
        let seq = recommend(&store, &subject, &sim_pearson).unwrap();
        let par = par_recommend(&store, &subject, &sim_pearson).unwrap();
        prop_assert_eq!(seq.len(), par.len());
        for (a, b) in seq.iter().zip(&par) {
            prop_assert!((a.score - b.score).abs() < 1e-9);
        }
    }
}
