//! Configuration validation errors and semantic validation.

use thiserror::Error;

use crate::settings::{Config, ScorerBackend};

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Semantic validation failed: {0}")]
    SemanticError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },
}

impl From<ValidationError> for hs_common::Error {
    fn from(err: ValidationError) -> Self {
        hs_common::Error::Config(err.to_string())
    }
}

/// Validate configuration semantically.
pub fn validate_config(config: &Config) -> ValidationResult<()> {
    if !hs_common::schema::is_compatible(&config.schema_version) {
        return Err(ValidationError::VersionMismatch {
            expected: crate::CONFIG_SCHEMA_VERSION.to_string(),
            actual: config.schema_version.clone(),
        });
    }

    if config.scorer.backend == ScorerBackend::Model {
        if config.scorer.model_path.is_none() {
            return Err(ValidationError::InvalidValue {
                field: "scorer.model_path".to_string(),
                message: "required when scorer.backend = model".to_string(),
            });
        }
        if config.scorer.vectorizer_path.is_none() {
            return Err(ValidationError::InvalidValue {
                field: "scorer.vectorizer_path".to_string(),
                message: "required when scorer.backend = model".to_string(),
            });
        }
    }

    if config.feed.timeout_secs == 0 {
        return Err(ValidationError::InvalidValue {
            field: "feed.timeout_secs".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    if config.feed.max_items == 0 {
        return Err(ValidationError::InvalidValue {
            field: "feed.max_items".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    if config.feed.user_agent.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "feed.user_agent".to_string(),
            message: "must not be blank".to_string(),
        });
    }

    if let Some(capacity) = config.history.capacity {
        if capacity == 0 {
            return Err(ValidationError::InvalidValue {
                field: "history.capacity".to_string(),
                message: "must be at least 1 when set (omit for unbounded)".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_validates() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_model_backend_requires_artifacts() {
        let mut config = Config::default();
        config.scorer.backend = ScorerBackend::Model;
        assert!(matches!(
            validate_config(&config),
            Err(ValidationError::InvalidValue { field, .. }) if field == "scorer.model_path"
        ));

        config.scorer.model_path = Some(PathBuf::from("model.json"));
        assert!(matches!(
            validate_config(&config),
            Err(ValidationError::InvalidValue { field, .. }) if field == "scorer.vectorizer_path"
        ));

        config.scorer.vectorizer_path = Some(PathBuf::from("vectorizer.json"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.feed.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut config = Config::default();
        config.history.capacity = Some(0);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_schema_version_mismatch() {
        let mut config = Config::default();
        config.schema_version = "9.0.0".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ValidationError::VersionMismatch { .. })
        ));
    }
}
