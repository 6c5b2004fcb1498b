//! # kindred-engine
//!
//! Neighbourhood-based collaborative filtering over a [`PreferenceStore`].
//!
//! | Operation | Module |
//! |-----------|--------|
//! | Distance / Pearson similarity | [`similarity`] |
//! | Top-K neighbours | [`ranking`] |
//! | Weighted recommendation, item-based recommendation | [`recommend`] |
//! | Entity ↔ item orientation swap | [`transpose`] |
//!
//! Every operation is a pure function over an immutable store. Comparisons
//! are exact and pairwise; the `par_*` variants spread them over rayon.
//!
//! [`PreferenceStore`]: kindred_core::PreferenceStore

pub mod engine;
pub mod ranking;
pub mod recommend;
pub mod similarity;
pub mod transpose;

pub use engine::KindredEngine;
pub use ranking::{par_top_matches, top_matches, ScoredKey};
pub use recommend::{
    par_recommend, par_similar_items, recommend, recommend_items, similar_items,
    ItemSimilarityTable,
};
pub use similarity::{metric_for, sim_distance, sim_pearson, EuclideanDistance, PearsonCorrelation};
pub use transpose::transpose;
