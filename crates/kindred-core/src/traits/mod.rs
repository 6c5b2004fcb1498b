mod similarity;

pub use similarity::ISimilarityMetric;
