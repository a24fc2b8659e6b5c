//! Environment variable configuration overlay
//!
//! Supports environment variables in the format:
//! `EMBEDREQ_<section>_<field>=value`
//!
//! Examples:
//! - `EMBEDREQ_EMBEDDING_MODEL=nomic-embed-text`
//! - `EMBEDREQ_OLLAMA_TIMEOUT_SECS=30`
//! - `EMBEDREQ_OUTPUT_FORMAT=json`
//!
//! `OLLAMA_HOST` is honored as well and maps to `ollama.base_url`;
//! `EMBEDREQ_OLLAMA_BASE_URL` wins when both are set.

use crate::types::ollama::normalize_host;
use crate::loader::ConfigOverrides;
use crate::{error::ConfigError, OutputFormat, Result};
use std::env;

const PREFIX: &str = "EMBEDREQ_";
const OLLAMA_HOST: &str = "OLLAMA_HOST";

/// Parse configuration from environment variables
///
/// Only the fields named by a variable are set. Returns `None` when no
/// relevant variable is set. Malformed variables are logged and skipped.
pub fn from_env() -> Result<Option<ConfigOverrides>> {
    let mut overrides = ConfigOverrides::default();
    let mut found_any = false;

    if let Ok(host) = env::var(OLLAMA_HOST) {
        if !host.trim().is_empty() {
            overrides.base_url = Some(normalize_host(&host));
            found_any = true;
        }
    }

    let mut env_vars: Vec<(String, String)> = env::vars()
        .filter(|(k, _)| k.starts_with(PREFIX))
        .collect();
    env_vars.sort();

    for (key, value) in env_vars {
        found_any = true;
        if let Err(e) = apply_env_var(&mut overrides, &key, &value) {
            tracing::warn!(var = %key, error = %e, "ignoring environment variable");
        }
    }

    Ok(found_any.then_some(overrides))
}

/// Apply a single environment variable to config
fn apply_env_var(overrides: &mut ConfigOverrides, key: &str, value: &str) -> Result<()> {
    let key = key.strip_prefix(PREFIX).unwrap_or(key);

    let Some((section, field)) = key.split_once('_') else {
        return Err(ConfigError::EnvVarError {
            var: format!("{}{}", PREFIX, key),
            message: "Expected format: EMBEDREQ_<section>_<field>".to_string(),
        });
    };

    let section = section.to_lowercase();
    let field = field.to_lowercase();

    match section.as_str() {
        "embedding" => apply_embedding_var(overrides, &field, value),
        "ollama" => apply_ollama_var(overrides, &field, value),
        "output" => apply_output_var(overrides, &field, value),
        _ => Err(ConfigError::EnvVarError {
            var: format!("{}{}", PREFIX, key),
            message: format!("Unknown section: {}", section),
        }),
    }
}

fn apply_embedding_var(overrides: &mut ConfigOverrides, field: &str, value: &str) -> Result<()> {
    match field {
        "model" => overrides.model = Some(value.to_string()),
        _ => return Err(unknown_field("EMBEDDING", field)),
    }
    Ok(())
}

fn apply_ollama_var(overrides: &mut ConfigOverrides, field: &str, value: &str) -> Result<()> {
    match field {
        "base_url" => overrides.base_url = Some(value.trim_end_matches('/').to_string()),
        "timeout_secs" => {
            overrides.timeout_secs = Some(value.parse().map_err(|_| ConfigError::EnvVarError {
                var: "EMBEDREQ_OLLAMA_TIMEOUT_SECS".to_string(),
                message: format!("Invalid integer: {}", value),
            })?);
        }
        "truncate" => overrides.truncate = Some(parse_bool("EMBEDREQ_OLLAMA_TRUNCATE", value)?),
        _ => return Err(unknown_field("OLLAMA", field)),
    }
    Ok(())
}

fn apply_output_var(overrides: &mut ConfigOverrides, field: &str, value: &str) -> Result<()> {
    match field {
        "format" => overrides.format = Some(value.parse::<OutputFormat>()?),
        _ => return Err(unknown_field("OUTPUT", field)),
    }
    Ok(())
}

fn unknown_field(section: &str, field: &str) -> ConfigError {
    ConfigError::EnvVarError {
        var: format!("{}{}_{}", PREFIX, section, field.to_uppercase()),
        message: format!("Unknown field: {}", field),
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::EnvVarError {
            var: var.to_string(),
            message: format!(
                "Invalid boolean: {} (use true/false, 1/0, yes/no, on/off)",
                value
            ),
        }),
    }
}
