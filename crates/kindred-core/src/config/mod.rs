//! Configuration for the kindred engine.
//!
//! Every field has a default, so a partial (or empty) TOML document is a
//! valid configuration.

pub mod defaults;
mod engine_config;

pub use engine_config::{KindredConfig, MetricKind, Orientation};
