//! Embedding model configuration

use serde::{Deserialize, Serialize};

/// Embedding model selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Model identifier sent with every request
    ///
    /// Examples: "mxbai-embed-large", "nomic-embed-text", "all-minilm"
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

impl crate::validation::Validate for EmbeddingConfig {
    fn validate(&self) -> crate::error::Result<()> {
        crate::validation::validate_non_empty("embedding.model", &self.model)
    }
}

pub const DEFAULT_MODEL: &str = "mxbai-embed-large";

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        let config = EmbeddingConfig::default();
        assert_eq!(config.model, "mxbai-embed-large");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_model_invalid() {
        let config = EmbeddingConfig {
            model: String::new(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_model_names_field() {
        let config = EmbeddingConfig {
            model: "  ".to_string(),
        };
        match config.validate() {
            Err(crate::error::ConfigError::ValidationError { field, .. }) => {
                assert_eq!(field, "embedding.model")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_model_uses_default() {
        let config: EmbeddingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
