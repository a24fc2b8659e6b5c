//! Configuration loading from various sources

pub mod env;
pub mod file;
pub mod formats;
pub mod merge;
pub mod overrides;

use crate::{Config, Result, Validate};
pub use overrides::ConfigOverrides;
use std::path::{Path, PathBuf};

/// Format for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Configuration source for layered loading
#[derive(Debug, Clone)]
pub enum ConfigSource {
    File(PathBuf),
    Environment,
    /// Explicitly set fields, e.g. CLI flags
    Explicit(ConfigOverrides),
}

/// File names probed by [`Config::load`], in order.
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    ".embedreq.toml",
    ".embedreq.yml",
    ".embedreq.yaml",
    ".embedreq.json",
];

/// Builder for loading and merging configurations
///
/// Later sources take precedence:
/// defaults < file < environment < explicit overrides
///
/// # Example
///
/// ```no_run
/// use embedreq_config::loader::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_file(".embedreq.toml")
///     .with_env()
///     .build()?;
/// # Ok::<(), embedreq_config::ConfigError>(())
/// ```
pub struct ConfigBuilder {
    sources: Vec<ConfigSource>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources
            .push(ConfigSource::File(path.as_ref().to_path_buf()));
        self
    }

    /// Add the first default config file found under `dir`, if any.
    pub fn with_default_file_in<P: AsRef<Path>>(self, dir: P) -> Self {
        match find_default_file(dir.as_ref()) {
            Some(path) => self.with_file(path),
            None => self,
        }
    }

    pub fn with_env(mut self) -> Self {
        self.sources.push(ConfigSource::Environment);
        self
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.sources.push(ConfigSource::Explicit(overrides));
        self
    }

    /// Merge all sources in order and validate the result.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        for source in self.sources {
            match source {
                ConfigSource::File(path) => {
                    let file_config = file::load_from_file(&path)?;
                    config = merge::merge(config, file_config);
                }
                ConfigSource::Environment => {
                    if let Some(env_overrides) = env::from_env()? {
                        env_overrides.apply(&mut config);
                    }
                }
                ConfigSource::Explicit(overrides) => overrides.apply(&mut config),
            }
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn find_default_file(dir: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

impl Config {
    /// Load configuration from the working directory plus environment.
    ///
    /// Uses the first of [`DEFAULT_CONFIG_FILES`] that exists; with none
    /// present the defaults apply.
    pub fn load() -> Result<Self> {
        ConfigBuilder::new()
            .with_default_file_in(".")
            .with_env()
            .build()
    }

    /// Load configuration from a specific file, plus environment.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        ConfigBuilder::new().with_file(path).with_env().build()
    }
}
