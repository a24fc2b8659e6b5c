//! Configuration merging logic
//!
//! Merges configurations from multiple sources with proper precedence.

use crate::{types::*, Config};

/// Merge two configurations, with `overlay` taking precedence
///
/// Non-default values from `overlay` replace values in `base`; optional
/// fields are taken from `overlay` whenever it sets them.
pub fn merge(mut base: Config, overlay: Config) -> Config {
    base.embedding = merge_embedding(base.embedding, overlay.embedding);
    base.ollama = merge_ollama(base.ollama, overlay.ollama);
    base.output = merge_output(base.output, overlay.output);
    base
}

fn merge_embedding(base: EmbeddingConfig, overlay: EmbeddingConfig) -> EmbeddingConfig {
    let default = EmbeddingConfig::default();
    EmbeddingConfig {
        model: if overlay.model != default.model {
            overlay.model
        } else {
            base.model
        },
    }
}

fn merge_ollama(base: OllamaConfig, overlay: OllamaConfig) -> OllamaConfig {
    let default = OllamaConfig::default();
    OllamaConfig {
        base_url: if overlay.base_url != default.base_url {
            overlay.base_url
        } else {
            base.base_url
        },
        timeout_secs: overlay.timeout_secs.or(base.timeout_secs),
        truncate: overlay.truncate.or(base.truncate),
    }
}

fn merge_output(base: OutputConfig, overlay: OutputConfig) -> OutputConfig {
    let default = OutputConfig::default();
    OutputConfig {
        format: if overlay.format != default.format {
            overlay.format
        } else {
            base.format
        },
    }
}
