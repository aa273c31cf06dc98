// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard logic for Clientry.
//!
//! Two components live here:
//!
//! - the data-loading state machine ([`Dashboard`], [`LoadState`]): one
//!   fetch per lifetime, settling into `Ready` or `Failed`;
//! - the live filter ([`filter_customers`]): a pure, case-insensitive
//!   substring match over first name, last name, and email, recomputed on
//!   every change to the canonical set or the query.
//!
//! [`table`] renders the three mutually exclusive views as plain strings so
//! the binary only decides where they go.

pub mod filter;
pub mod state;
pub mod table;

pub use filter::filter_customers;
pub use state::{Dashboard, LoadState};
pub use table::{
    NO_CUSTOMERS_PLACEHOLDER, format_detail, format_failed, format_footer, format_table,
};
