//! Default values for [`super::KindredConfig`].

use crate::constants;

/// Default K for neighbour searches.
pub const DEFAULT_NEIGHBORS: usize = constants::DEFAULT_NEIGHBORS;

/// Default minimum shared items for a comparison to carry signal.
pub const DEFAULT_MIN_SHARED_ITEMS: usize = constants::DEFAULT_MIN_SHARED_ITEMS;

/// Parallel evaluation is opt-in.
pub const DEFAULT_PARALLEL: bool = false;
