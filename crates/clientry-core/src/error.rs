// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Clientry dashboard.

use thiserror::Error;

use crate::types::CustomerId;

/// The primary error type used across the Clientry workspace.
///
/// The three fetch-failure variants (`Network`, `Status`, `Parse`) are never
/// distinguished in dashboard behavior: all of them collapse into the failed
/// load state through their `Display` message.
#[derive(Debug, Error)]
pub enum ClientryError {
    /// Configuration errors (invalid TOML, bad values, unknown keys).
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport-level failure (connection refused, DNS, closed socket).
    #[error("network error: {message}")]
    Network {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The API answered with a non-success status code.
    #[error("API returned {code}: {message}")]
    Status { code: u16, message: String },

    /// The response body was not valid JSON or lacked an expected field.
    #[error("failed to parse API response: {message}")]
    Parse { message: String },

    /// The detail endpoint reported no customer with the given id.
    #[error("customer {id} not found")]
    NotFound { id: CustomerId },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
