// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Clientry customer dashboard.
//!
//! This crate provides the shared error type, the customer domain types, and
//! the [`CustomerSource`] trait that every record source implements.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ClientryError;
pub use traits::CustomerSource;
pub use types::{Customer, CustomerDetail, CustomerId};
