//! Ranking: scored keys, the shared result ordering, and top-K neighbour search.

pub mod neighbors;
mod scored;

pub use neighbors::{par_top_matches, top_matches};
pub use scored::{sort_descending, ScoredKey};
