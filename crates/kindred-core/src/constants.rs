/// Kindred version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of neighbours returned by a top-K search.
pub const DEFAULT_NEIGHBORS: usize = 5;

/// Default minimum number of shared items for a comparison to carry signal.
pub const DEFAULT_MIN_SHARED_ITEMS: usize = 1;

/// Rating recorded for implicit feedback ("the entity touched this item").
pub const IMPLICIT_RATING: f64 = 1.0;

/// Rating that marks an item as present but not rated (binary feedback).
pub const UNRATED_SENTINEL: f64 = 0.0;
