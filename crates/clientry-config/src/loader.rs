// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./clientry.toml` >
//! `~/.config/clientry/clientry.toml` > `/etc/clientry/clientry.toml`,
//! with environment variable overrides via the `CLIENTRY_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::ClientryConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/clientry/clientry.toml` (system-wide)
/// 3. `~/.config/clientry/clientry.toml` (user XDG config)
/// 4. `./clientry.toml` (local directory)
/// 5. `CLIENTRY_*` environment variables
pub fn load_config() -> Result<ClientryConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<ClientryConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ClientryConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ClientryConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ClientryConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(ClientryConfig::default()))
        .merge(Toml::file("/etc/clientry/clientry.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("clientry/clientry.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("clientry.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that keys containing
/// underscores stay intact: `CLIENTRY_API_BASE_URL` must map to
/// `api.base_url`, not `api.base.url`.
fn env_provider() -> Env {
    Env::prefixed("CLIENTRY_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped.
        // Example: CLIENTRY_API_BASE_URL -> "api_base_url"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("api_", "api.", 1)
            .replacen("dashboard_", "dashboard.", 1)
            .replacen("log_", "log.", 1);
        mapped.into()
    })
}
