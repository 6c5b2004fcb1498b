use crate::errors::KindredResult;
use crate::preferences::PreferenceStore;

/// A similarity metric over two entities of a preference store.
///
/// Higher scores mean more alike; 0 means no usable signal. Both keys must
/// exist in `store`, otherwise implementations return `EntityNotFound`.
///
/// Any `Fn(&PreferenceStore, &str, &str) -> KindredResult<f64>` is a metric,
/// so plain functions can be passed where a metric is expected.
pub trait ISimilarityMetric: Send + Sync {
    /// Score how similar `a` and `b` are.
    fn similarity(&self, store: &PreferenceStore, a: &str, b: &str) -> KindredResult<f64>;

    /// Human-readable metric name.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> ISimilarityMetric for F
where
    F: Fn(&PreferenceStore, &str, &str) -> KindredResult<f64> + Send + Sync,
{
    fn similarity(&self, store: &PreferenceStore, a: &str, b: &str) -> KindredResult<f64> {
        self(store, a, b)
    }
}
