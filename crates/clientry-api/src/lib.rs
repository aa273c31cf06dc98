// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client crate for the customer REST API.
//!
//! [`CustomerApi`] is the production implementation of
//! [`clientry_core::CustomerSource`]: one `GET` per fetch, no retries, and
//! every failure mapped onto the core error taxonomy.

pub mod client;
pub mod types;

pub use client::CustomerApi;
pub use types::{ApiErrorBody, CustomersEnvelope};
