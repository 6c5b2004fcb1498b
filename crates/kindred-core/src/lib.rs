//! # kindred-core
//!
//! Foundation crate for the kindred recommendation workspace.
//! Defines the preference store, errors, config, constants, and the
//! similarity-metric trait. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod preferences;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{KindredConfig, MetricKind, Orientation};
pub use errors::{KindredError, KindredResult};
pub use preferences::{PreferenceStore, PreferenceStoreBuilder, Ratings};
pub use traits::ISimilarityMetric;
