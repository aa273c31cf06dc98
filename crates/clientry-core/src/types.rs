// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Clientry workspace.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque stable key identifying a customer. Unique within one API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub i64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single customer record as returned by the customer API.
///
/// Immutable once loaded; the client never mutates any field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Stable unique key.
    pub user_id: CustomerId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Creation timestamp (ISO-8601 on the wire).
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// "First Last" display form.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Extended customer profile from the detail endpoint.
///
/// The demographic fields may be absent in the source database, and
/// `order_count` is computed server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetail {
    /// Stable unique key.
    pub user_id: CustomerId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Age in years, if recorded.
    #[serde(default)]
    pub age: Option<u32>,
    /// Gender, if recorded.
    #[serde(default)]
    pub gender: Option<String>,
    /// City of residence, if recorded.
    #[serde(default)]
    pub city: Option<String>,
    /// Country of residence, if recorded.
    #[serde(default)]
    pub country: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Number of orders placed by this customer.
    #[serde(default)]
    pub order_count: u64,
}
