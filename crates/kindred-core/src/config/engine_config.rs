//! Engine configuration: K, metric, orientation, parallelism.
//!
//! # Examples
//!
//! ```
//! use kindred_core::config::{KindredConfig, MetricKind, Orientation};
//!
//! let config = KindredConfig::from_toml_str("neighbors = 3\nmetric = \"distance\"").unwrap();
//! assert_eq!(config.neighbors, 3);
//! assert_eq!(config.metric, MetricKind::Distance);
//! assert_eq!(config.orientation, Orientation::Direct);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ConfigError, KindredResult};

/// Which similarity metric ranking and aggregation use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// `1 / (1 + sum of squared differences)` over shared items.
    Distance,
    /// Pearson correlation over shared items.
    #[default]
    #[serde(alias = "correlation")]
    Pearson,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Pearson => "pearson",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which level of the preference store is treated as the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Entities rate items (people → movies).
    #[default]
    Direct,
    /// Items are rated by entities (movies → people), via transposition.
    Transposed,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => f.write_str("direct"),
            Self::Transposed => f.write_str("transposed"),
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindredConfig {
    /// K for neighbour searches. Default: 5.
    pub neighbors: usize,
    /// Similarity metric. Default: pearson.
    pub metric: MetricKind,
    /// Store orientation. Default: direct.
    pub orientation: Orientation,
    /// Evaluate pairwise comparisons on the rayon pool. Default: false.
    pub parallel: bool,
    /// Pairs sharing fewer items than this score 0. Default: 1.
    pub min_shared_items: usize,
}

impl Default for KindredConfig {
    fn default() -> Self {
        Self {
            neighbors: defaults::DEFAULT_NEIGHBORS,
            metric: MetricKind::default(),
            orientation: Orientation::default(),
            parallel: defaults::DEFAULT_PARALLEL,
            min_shared_items: defaults::DEFAULT_MIN_SHARED_ITEMS,
        }
    }
}

impl KindredConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(input: &str) -> KindredResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> KindredResult<String> {
        let text = toml::to_string(self).map_err(|e| ConfigError::Serialize {
            reason: e.to_string(),
        })?;
        Ok(text)
    }

    /// Reject values the engine cannot honour.
    pub fn validate(&self) -> KindredResult<()> {
        if self.neighbors == 0 {
            return Err(ConfigError::InvalidValue {
                field: "neighbors".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.min_shared_items == 0 {
            return Err(ConfigError::InvalidValue {
                field: "min_shared_items".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }

    pub fn with_metric(mut self, metric: MetricKind) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_neighbors(mut self, neighbors: usize) -> Self {
        self.neighbors = neighbors;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_min_shared_items(mut self, min_shared_items: usize) -> Self {
        self.min_shared_items = min_shared_items;
        self
    }
}
