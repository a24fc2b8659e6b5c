//! Partial configuration layers
//!
//! Environment variables and CLI flags only name the fields they set, so
//! they are applied field by field on top of the accumulated config rather
//! than merged against defaults. A value equal to the default still wins.

use crate::{Config, OutputFormat};

/// Fields set by a higher-precedence source; `None` leaves the lower layer alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub truncate: Option<bool>,
    pub format: Option<OutputFormat>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite every field this layer sets.
    pub fn apply(self, config: &mut Config) {
        if let Some(model) = self.model {
            config.embedding.model = model;
        }
        if let Some(base_url) = self.base_url {
            config.ollama.base_url = base_url;
        }
        if let Some(secs) = self.timeout_secs {
            config.ollama.timeout_secs = Some(secs);
        }
        if let Some(truncate) = self.truncate {
            config.ollama.truncate = Some(truncate);
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
    }
}
