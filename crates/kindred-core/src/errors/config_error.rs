/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {reason}")]
    Parse { reason: String },

    #[error("failed to serialize config: {reason}")]
    Serialize { reason: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
