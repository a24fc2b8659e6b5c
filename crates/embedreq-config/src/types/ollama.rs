//! Ollama server connection settings

use serde::{Deserialize, Serialize};

/// Connection settings for the Ollama HTTP API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Base URL of the server, without the `/api` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. Unset means requests wait for the server indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Ask the server to truncate inputs that exceed the model context.
    /// Unset leaves the server default in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncate: Option<bool>,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            truncate: None,
        }
    }
}

impl crate::validation::Validate for OllamaConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;
        use crate::validation::validate_http_url;

        validate_http_url("ollama.base_url", &self.base_url)?;

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::validation(
                "ollama.timeout_secs",
                "timeout_secs must be > 0 (remove it to disable the timeout)",
            ));
        }

        Ok(())
    }
}

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:11434";
const DEFAULT_PORT: u16 = 11434;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Turn an `OLLAMA_HOST`-style value into a full base URL.
///
/// `example.com` becomes `http://example.com:11434` and `:8080` becomes
/// `http://127.0.0.1:8080`. Explicit schemes and ports are kept.
pub fn normalize_host(raw: &str) -> String {
    let raw = raw.trim().trim_end_matches('/');
    let (scheme, rest) = match raw.split_once("://") {
        Some((scheme, rest)) => (scheme.to_lowercase(), rest),
        None => ("http".to_string(), raw),
    };

    let (authority, path) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    };

    let authority = if authority.is_empty() || authority.starts_with(':') {
        format!("127.0.0.1{}", authority)
    } else {
        authority.to_string()
    };

    // Skip the colons inside a bracketed IPv6 literal.
    let has_port = match authority.rfind(']') {
        Some(i) => authority[i..].contains(':'),
        None => authority.contains(':'),
    };

    if has_port {
        format!("{}://{}{}", scheme, authority, path)
    } else {
        let port = if scheme == "https" { 443 } else { DEFAULT_PORT };
        format!("{}://{}:{}{}", scheme, authority, port, path)
    }
}
