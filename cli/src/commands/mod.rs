pub mod config;
pub mod embed;
pub mod models;

pub use config::handle_config;
pub use embed::handle_embed;
pub use models::handle_models;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use embedreq_config::{Config, ConfigBuilder, ConfigOverrides, ErrorFormatter, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "embedreq", version)]
#[command(about = "Request embeddings for a list of texts from a local Ollama server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Configuration file (.toml, .yml, .yaml or .json)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Embedding model to request
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Base URL of the Ollama server
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<CliOutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Embed texts and print each with its embedding (default command)
    Embed {
        /// Texts to embed; the built-in example sentences are used when omitted
        texts: Vec<String>,
    },
    /// List models installed on the Ollama server
    Models,
    /// Print the effective configuration
    Config,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

impl GlobalArgs {
    /// Flag values as a config layer; only flags actually given override
    /// lower layers.
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            model: self.model.clone(),
            base_url: self
                .base_url
                .as_ref()
                .map(|url| url.trim_end_matches('/').to_string()),
            format: self.format.map(Into::into),
            ..Default::default()
        }
    }
}

/// Resolve defaults < file < environment < flags.
pub fn load_config(args: &GlobalArgs) -> Result<Config> {
    let builder = match &args.config {
        Some(path) => ConfigBuilder::new().with_file(path),
        None => ConfigBuilder::new().with_default_file_in("."),
    };

    builder
        .with_env()
        .with_overrides(args.overrides())
        .build()
        .map_err(|e| anyhow!("{}", ErrorFormatter::new(&e)))
}
