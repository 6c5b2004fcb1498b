//! Error types for the kindred workspace.
//!
//! A missing entity is the only failure the algorithms surface. Degenerate
//! comparisons and empty neighbourhoods fold into a 0 score or an empty
//! result instead.

mod config_error;
mod kindred_error;

pub use config_error::ConfigError;
pub use kindred_error::KindredError;

/// Result alias used across every kindred crate.
pub type KindredResult<T> = Result<T, KindredError>;
