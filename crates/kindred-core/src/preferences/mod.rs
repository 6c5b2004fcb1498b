//! The preference store: entity → item → rating.

mod builder;
mod store;

pub use builder::PreferenceStoreBuilder;
pub use store::{has_usable_rating, PreferenceStore, Ratings};
