//! KindredEngine: a preference store fixed in one orientation, plus the
//! configured metric, K and execution mode.

use kindred_core::config::{KindredConfig, Orientation};
use kindred_core::{ISimilarityMetric, KindredResult, PreferenceStore};
use tracing::info;

use crate::ranking::{self, ScoredKey};
use crate::recommend::{self, ItemSimilarityTable};
use crate::similarity::metric_for;
use crate::transpose::transpose;

/// Entry point for callers that pick orientation, metric and K through
/// [`KindredConfig`] instead of passing them to every call.
pub struct KindredEngine {
    store: PreferenceStore,
    metric: Box<dyn ISimilarityMetric>,
    config: KindredConfig,
}

impl KindredEngine {
    /// Validate `config` and orient `store` accordingly.
    pub fn new(store: PreferenceStore, config: KindredConfig) -> KindredResult<Self> {
        config.validate()?;
        let store = match config.orientation {
            Orientation::Direct => store,
            Orientation::Transposed => transpose(&store),
        };
        let metric = metric_for(config.metric, config.min_shared_items);
        info!(
            orientation = %config.orientation,
            metric = %config.metric,
            entities = store.len(),
            parallel = config.parallel,
            "kindred engine ready"
        );
        Ok(Self {
            store,
            metric,
            config,
        })
    }

    /// Engine over `store` with default configuration.
    pub fn with_defaults(store: PreferenceStore) -> KindredResult<Self> {
        Self::new(store, KindredConfig::default())
    }

    /// Swap the metric for a caller-supplied one.
    pub fn with_metric(mut self, metric: Box<dyn ISimilarityMetric>) -> Self {
        self.metric = metric;
        self
    }

    /// The store in the configured orientation.
    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    pub fn config(&self) -> &KindredConfig {
        &self.config
    }

    pub fn metric(&self) -> &dyn ISimilarityMetric {
        self.metric.as_ref()
    }

    /// Similarity between two keys of the oriented store.
    pub fn similarity(&self, a: &str, b: &str) -> KindredResult<f64> {
        self.metric.similarity(&self.store, a, b)
    }

    /// The configured number of nearest neighbours of `subject`.
    pub fn top_matches(&self, subject: &str) -> KindredResult<Vec<ScoredKey>> {
        self.top_matches_with(subject, self.config.neighbors)
    }

    /// The `k` nearest neighbours of `subject`.
    pub fn top_matches_with(&self, subject: &str, k: usize) -> KindredResult<Vec<ScoredKey>> {
        if self.config.parallel {
            ranking::par_top_matches(&self.store, subject, k, self.metric())
        } else {
            ranking::top_matches(&self.store, subject, k, self.metric())
        }
    }

    /// Similarity-weighted predictions for everything `subject` has not rated.
    pub fn recommend(&self, subject: &str) -> KindredResult<Vec<ScoredKey>> {
        if self.config.parallel {
            recommend::par_recommend(&self.store, subject, self.metric())
        } else {
            recommend::recommend(&self.store, subject, self.metric())
        }
    }

    /// Item-similarity table over the oriented store, configured K per item.
    pub fn similar_items(&self) -> KindredResult<ItemSimilarityTable> {
        if self.config.parallel {
            recommend::par_similar_items(&self.store, self.config.neighbors, self.metric())
        } else {
            recommend::similar_items(&self.store, self.config.neighbors, self.metric())
        }
    }

    /// Item-based predictions for `subject` from a table built by
    /// [`Self::similar_items`].
    pub fn recommend_items(
        &self,
        table: &ItemSimilarityTable,
        subject: &str,
    ) -> KindredResult<Vec<ScoredKey>> {
        recommend::recommend_items(&self.store, table, subject)
    }
}
