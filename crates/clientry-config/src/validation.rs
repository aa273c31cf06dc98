// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as URL shape and known log levels.

use crate::diagnostic::ConfigError;
use crate::model::ClientryConfig;

/// Log levels accepted by the tracing env filter.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &ClientryConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let base_url = config.api.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "api.base_url must not be empty".to_string(),
        });
    } else if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!(
                "api.base_url `{base_url}` must start with http:// or https://"
            ),
        });
    }

    if config.dashboard.date_format.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "dashboard.date_format must not be empty".to_string(),
        });
    }

    let level = config.log.level.trim();
    if !LOG_LEVELS.contains(&level) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{level}` is not one of: {}",
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ClientryConfig::default()).is_ok());
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let mut config = ClientryConfig::default();
        config.api.base_url = "  ".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("api.base_url"));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let mut config = ClientryConfig::default();
        config.api.base_url = "ftp://example.com".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let mut config = ClientryConfig::default();
        config.log.level = "verbose".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].to_string().contains("log.level"));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = ClientryConfig::default();
        config.api.base_url = String::new();
        config.log.level = "loud".into();
        config.dashboard.date_format = String::new();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
