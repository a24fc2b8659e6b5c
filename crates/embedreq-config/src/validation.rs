//! Validation trait and shared helpers for configuration types

use crate::error::{ConfigError, Result};

/// Trait for validating configuration values
///
/// Implement this for any config type that needs validation beyond
/// type-level checks.
pub trait Validate {
    /// Returns `Ok(())` if validation passes, or a `ConfigError` describing
    /// what failed.
    fn validate(&self) -> Result<()>;
}

/// Reject empty or whitespace-only strings.
pub fn validate_non_empty(field: impl Into<String>, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::validation(field, "Value cannot be empty"));
    }
    Ok(())
}

/// Require an absolute http(s) URL.
pub fn validate_http_url(field: impl Into<String>, value: &str) -> Result<()> {
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(ConfigError::validation(
            field,
            format!("URL must start with http:// or https://, got: {}", value),
        ));
    }
    Ok(())
}
