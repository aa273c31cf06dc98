// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the customer REST API.

use clientry_core::Customer;
use serde::Deserialize;

/// Response envelope for `GET /api/customers`.
///
/// The server also emits pagination metadata (`total_count`, `page`,
/// `per_page`) beside the list; the dashboard does not paginate, so only
/// `customers` is modeled and serde ignores the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomersEnvelope {
    /// The full customer list, in server order.
    pub customers: Vec<Customer>,
}

/// Error envelope the API uses for non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error description.
    pub error: String,
}
