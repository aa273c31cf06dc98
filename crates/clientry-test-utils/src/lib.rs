// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Clientry integration tests.
//!
//! Provides a mock customer source and shared fixtures for fast,
//! deterministic, CI-runnable tests without a live API.
//!
//! # Components
//!
//! - [`MockCustomerSource`] - Mock record source with queued results
//! - [`fixtures`] - Canonical customer sample data

pub mod fixtures;
pub mod mock_source;

pub use mock_source::MockCustomerSource;
