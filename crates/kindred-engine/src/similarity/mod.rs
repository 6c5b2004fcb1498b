//! Similarity metrics between two entities of a preference store.
//!
//! | Metric | Range | Degenerate case |
//! |--------|-------|-----------------|
//! | Distance | (0, 1] | no shared items → 0 |
//! | Pearson | [-1, 1] | no shared items or zero variance → 0 |

pub mod distance;
pub mod pearson;
pub mod shared;

use kindred_core::config::MetricKind;
use kindred_core::{ISimilarityMetric, KindredResult, PreferenceStore};

pub use distance::{distance_score, sim_distance};
pub use pearson::{pearson_score, sim_pearson};

/// Distance-based similarity as a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EuclideanDistance {
    pub min_shared_items: usize,
}

impl Default for EuclideanDistance {
    fn default() -> Self {
        Self {
            min_shared_items: 1,
        }
    }
}

impl ISimilarityMetric for EuclideanDistance {
    fn similarity(&self, store: &PreferenceStore, a: &str, b: &str) -> KindredResult<f64> {
        Ok(distance::distance_score_with_min(
            store.ratings(a)?,
            store.ratings(b)?,
            self.min_shared_items,
        ))
    }

    fn name(&self) -> &str {
        MetricKind::Distance.as_str()
    }
}

/// Pearson correlation as a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PearsonCorrelation {
    pub min_shared_items: usize,
}

impl Default for PearsonCorrelation {
    fn default() -> Self {
        Self {
            min_shared_items: 1,
        }
    }
}

impl ISimilarityMetric for PearsonCorrelation {
    fn similarity(&self, store: &PreferenceStore, a: &str, b: &str) -> KindredResult<f64> {
        Ok(pearson::pearson_score_with_min(
            store.ratings(a)?,
            store.ratings(b)?,
            self.min_shared_items,
        ))
    }

    fn name(&self) -> &str {
        MetricKind::Pearson.as_str()
    }
}

/// Build the metric a config names.
pub fn metric_for(kind: MetricKind, min_shared_items: usize) -> Box<dyn ISimilarityMetric> {
    match kind {
        MetricKind::Distance => Box::new(EuclideanDistance { min_shared_items }),
        MetricKind::Pearson => Box::new(PearsonCorrelation { min_shared_items }),
    }
}
