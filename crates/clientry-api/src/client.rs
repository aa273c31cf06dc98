// SPDX-FileCopyrightText: 2026 Clientry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the customer REST API.
//!
//! Provides [`CustomerApi`] which handles request construction, status
//! mapping, and response parsing. No retries: every fetch is exactly one
//! outbound request, and failure is reported through the error taxonomy in
//! `clientry-core`.

use async_trait::async_trait;
use clientry_core::{Customer, CustomerDetail, CustomerId, CustomerSource};
use clientry_core::ClientryError;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{ApiErrorBody, CustomersEnvelope};

/// Path of the customer collection endpoint, relative to the base URL.
const CUSTOMERS_PATH: &str = "/api/customers";

/// HTTP client for the customer API.
///
/// No client-imposed timeout: failure is detected only through the
/// transport's own error signaling.
#[derive(Debug, Clone)]
pub struct CustomerApi {
    client: reqwest::Client,
    base_url: String,
}

impl CustomerApi {
    /// Creates a new customer API client against the given base URL.
    ///
    /// Trailing slashes on `base_url` are ignored.
    pub fn new(base_url: &str) -> Result<Self, ClientryError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| {
                ClientryError::Internal(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the full customer list with a single `GET` request.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, ClientryError> {
        let url = format!("{}{CUSTOMERS_PATH}", self.base_url);
        let body = self.get(&url, None).await?;

        let envelope: CustomersEnvelope =
            serde_json::from_str(&body).map_err(|e| ClientryError::Parse {
                message: format!("customer list body: {e}"),
            })?;
        debug!(count = envelope.customers.len(), "customer list parsed");
        Ok(envelope.customers)
    }

    /// Fetches the extended profile for one customer.
    ///
    /// A 404 maps to [`ClientryError::NotFound`]; every other failure uses
    /// the same taxonomy as the list call.
    pub async fn customer_detail(
        &self,
        id: CustomerId,
    ) -> Result<CustomerDetail, ClientryError> {
        let url = format!("{}{CUSTOMERS_PATH}/{id}", self.base_url);
        let body = self.get(&url, Some(id)).await?;

        serde_json::from_str(&body).map_err(|e| ClientryError::Parse {
            message: format!("customer detail body: {e}"),
        })
    }

    /// Issues one `GET` and returns the body of a 2xx response.
    ///
    /// `not_found_id` turns a 404 into `NotFound` for the detail endpoint.
    async fn get(
        &self,
        url: &str,
        not_found_id: Option<CustomerId>,
    ) -> Result<String, ClientryError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            ClientryError::Network {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            }
        })?;

        let status = response.status();
        debug!(status = %status, url, "customer API response received");

        let body = response.text().await.map_err(|e| ClientryError::Network {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;

        if status.is_success() {
            return Ok(body);
        }

        if let (StatusCode::NOT_FOUND, Some(id)) = (status, not_found_id) {
            return Err(ClientryError::NotFound { id });
        }

        Err(status_error(status, &body))
    }
}

#[async_trait]
impl CustomerSource for CustomerApi {
    fn name(&self) -> &str {
        "customer-api"
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, ClientryError> {
        CustomerApi::list_customers(self).await
    }

    async fn customer_detail(
        &self,
        id: CustomerId,
    ) -> Result<CustomerDetail, ClientryError> {
        CustomerApi::customer_detail(self, id).await
    }
}

/// Maps a non-success response onto `ClientryError::Status`, surfacing the
/// API's `{"error": ...}` envelope when the body carries one.
fn status_error(status: StatusCode, body: &str) -> ClientryError {
    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(envelope) => envelope.error,
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_string(),
        Err(_) => body.trim().to_string(),
    };
    ClientryError::Status {
        code: status.as_u16(),
        message,
    }
}
