// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The customer source trait seaming the dashboard from its transport.
//!
//! Uses `#[async_trait]` for dynamic dispatch compatibility; the dashboard
//! only ever sees `&dyn CustomerSource`.

use async_trait::async_trait;

use crate::error::ClientryError;
use crate::types::{Customer, CustomerDetail, CustomerId};

/// A source of customer records.
///
/// Implemented by the HTTP API client in production and by
/// `MockCustomerSource` in tests.
#[async_trait]
pub trait CustomerSource: Send + Sync {
    /// Returns the human-readable name of this source instance.
    fn name(&self) -> &str;

    /// Fetches the full customer list.
    ///
    /// Performs exactly one outbound call per invocation; never retries.
    async fn list_customers(&self) -> Result<Vec<Customer>, ClientryError>;

    /// Fetches the extended profile for a single customer.
    async fn customer_detail(
        &self,
        id: CustomerId,
    ) -> Result<CustomerDetail, ClientryError>;
}
