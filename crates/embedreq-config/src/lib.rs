//! Configuration management for embedreq
//!
//! This crate provides a validated configuration system with support for:
//! - Multiple formats (YAML, TOML, JSON)
//! - Config validation with helpful error messages
//! - Config merging (file + environment + CLI)
//!
//! # Example
//!
//! ```no_run
//! use embedreq_config::Config;
//!
//! // Load from default location (.embedreq.{toml,yml,json})
//! let config = Config::load()?;
//!
//! // Or load from specific file
//! let config = Config::from_file("path/to/config.toml")?;
//!
//! let model = &config.embedding.model;
//! let base_url = &config.ollama.base_url;
//! # Ok::<(), embedreq_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

pub use error::{ConfigError, ErrorFormatter, Result};
pub use loader::{ConfigBuilder, ConfigOverrides};
pub use types::*;

pub use validation::Validate;
