//! Configuration type definitions
//!
//! Each section is self-contained with validation and sensible defaults.

pub mod embedding;
pub mod ollama;
pub mod output;

pub use embedding::EmbeddingConfig;
pub use ollama::OllamaConfig;
pub use output::{OutputConfig, OutputFormat};

use serde::{Deserialize, Serialize};

/// Main configuration struct aggregating all settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Which model computes the embeddings
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Where the Ollama server lives and how requests are sent
    #[serde(default)]
    pub ollama: OllamaConfig,

    /// How results are written to stdout
    #[serde(default)]
    pub output: OutputConfig,
}

impl crate::validation::Validate for Config {
    fn validate(&self) -> crate::error::Result<()> {
        self.embedding.validate()?;
        self.ollama.validate()?;
        self.output.validate()?;
        Ok(())
    }
}
