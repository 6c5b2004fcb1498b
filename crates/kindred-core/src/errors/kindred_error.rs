use super::ConfigError;

/// Top-level kindred error.
#[derive(Debug, thiserror::Error)]
pub enum KindredError {
    #[error("entity not found in preference store: {key}")]
    EntityNotFound { key: String },

    #[error("invalid rating {value} for entity {entity}, item {item}: ratings must be finite")]
    InvalidRating {
        entity: String,
        item: String,
        value: f64,
    },

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
}

impl KindredError {
    /// Shorthand for an [`KindredError::EntityNotFound`] on `key`.
    pub fn entity_not_found(key: impl Into<String>) -> Self {
        Self::EntityNotFound { key: key.into() }
    }
}
