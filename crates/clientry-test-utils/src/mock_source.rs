// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock customer source for deterministic testing.
//!
//! `MockCustomerSource` implements `CustomerSource` with pre-configured
//! results, enabling fast, CI-runnable tests without a live API.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use clientry_core::{Customer, CustomerDetail, CustomerId, CustomerSource};
use clientry_core::ClientryError;
use tokio::sync::Mutex;

/// A mock customer source returning pre-configured results.
///
/// List results are popped from a FIFO queue. When the queue is empty, an
/// empty customer list is returned. Detail lookups hit a map and fall back
/// to `NotFound`.
pub struct MockCustomerSource {
    list_results: Arc<Mutex<VecDeque<Result<Vec<Customer>, ClientryError>>>>,
    details: Arc<Mutex<HashMap<CustomerId, CustomerDetail>>>,
    list_calls: Arc<AtomicUsize>,
}

impl MockCustomerSource {
    /// Create a mock source with an empty result queue.
    pub fn new() -> Self {
        Self::with_queue(VecDeque::new())
    }

    /// Create a mock source whose next list fetch succeeds with `customers`.
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self::with_queue(VecDeque::from([Ok(customers)]))
    }

    /// Create a mock source whose next list fetch fails with `error`.
    pub fn failing(error: ClientryError) -> Self {
        Self::with_queue(VecDeque::from([Err(error)]))
    }

    fn with_queue(queue: VecDeque<Result<Vec<Customer>, ClientryError>>) -> Self {
        Self {
            list_results: Arc::new(Mutex::new(queue)),
            details: Arc::new(Mutex::new(HashMap::new())),
            list_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Queue an additional list fetch result.
    pub async fn queue_list_result(
        &self,
        result: Result<Vec<Customer>, ClientryError>,
    ) {
        self.list_results.lock().await.push_back(result);
    }

    /// Register a detail profile for lookup by id.
    pub async fn insert_detail(&self, detail: CustomerDetail) {
        self.details.lock().await.insert(detail.user_id, detail);
    }

    /// Number of `list_customers` calls observed so far.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockCustomerSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerSource for MockCustomerSource {
    fn name(&self) -> &str {
        "mock-source"
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, ClientryError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list_results
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn customer_detail(
        &self,
        id: CustomerId,
    ) -> Result<CustomerDetail, ClientryError> {
        self.details
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or(ClientryError::NotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures;

    use super::*;

    #[tokio::test]
    async fn empty_queue_returns_empty_list() {
        let source = MockCustomerSource::new();
        assert!(source.list_customers().await.unwrap().is_empty());
        assert_eq!(source.list_calls(), 1);
    }

    #[tokio::test]
    async fn with_customers_returns_them_once_then_empty() {
        let source = MockCustomerSource::with_customers(fixtures::ann_and_bob());
        assert_eq!(source.list_customers().await.unwrap().len(), 2);
        assert!(source.list_customers().await.unwrap().is_empty());
        assert_eq!(source.list_calls(), 2);
    }

    #[tokio::test]
    async fn failing_source_returns_queued_error() {
        let source = MockCustomerSource::failing(ClientryError::Status {
            code: 500,
            message: "boom".into(),
        });
        let err = source.list_customers().await.unwrap_err();
        assert!(matches!(err, ClientryError::Status { code: 500, .. }));
    }

    #[tokio::test]
    async fn detail_lookup_hits_map_or_not_found() {
        let source = MockCustomerSource::new();
        source.insert_detail(fixtures::dana_detail()).await;

        let detail = source.customer_detail(CustomerId(4)).await.unwrap();
        assert_eq!(detail.order_count, 12);

        let err = source.customer_detail(CustomerId(99)).await.unwrap_err();
        assert!(matches!(err, ClientryError::NotFound { .. }));
    }
}
