//! Customers endpoint (`customers`).
//!
//! Besides CRUD, a customer's orders and downloads can be listed:
//!
//! ```rust,ignore
//! let customer = client.customers.get_by_email("john@example.com", None).await?;
//! let orders = client.customers.orders(42, None).await?;
//! ```

use std::fmt::Display;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::{ApiClient, ApiError, ApiResponse, ParameterSet};
use crate::rest::{encode_segment, segment, Resource};

/// Builder for the `customers` endpoint; bodies are wrapped under `customer`.
#[derive(Clone, Debug)]
pub struct Customers {
    resource: Resource,
}

impl Customers {
    /// Creates the builder.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            resource: Resource::new("customers", "customer", client),
        }
    }

    /// Gets one customer, or lists customers when `id` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get(
        &self,
        id: Option<impl Display>,
        params: Option<ParameterSet>,
    ) -> Result<ApiResponse, ApiError> {
        self.resource.get(&[segment(id)], params).await
    }

    /// Gets a customer by email address. The address is percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_by_email(
        &self,
        email: &str,
        params: Option<ParameterSet>,
    ) -> Result<ApiResponse, ApiError> {
        self.resource
            .get(&["email".to_string(), encode_segment(email)], params)
            .await
    }

    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn create(&self, data: Value) -> Result<ApiResponse, ApiError> {
        self.resource.post(&[], data).await
    }

    /// Updates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update(&self, id: impl Display, data: Value) -> Result<ApiResponse, ApiError> {
        self.resource.put(&[id.to_string()], data).await
    }

    /// Deletes a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn delete(&self, id: impl Display) -> Result<ApiResponse, ApiError> {
        self.resource.delete(&[id.to_string()], None).await
    }

    /// Counts customers.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn count(&self, params: Option<ParameterSet>) -> Result<ApiResponse, ApiError> {
        self.resource.get(&["count".to_string()], params).await
    }

    /// Lists the orders of a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn orders(
        &self,
        id: impl Display,
        params: Option<ParameterSet>,
    ) -> Result<ApiResponse, ApiError> {
        self.resource
            .get(&[id.to_string(), "orders".to_string()], params)
            .await
    }

    /// Lists the downloads available to a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn downloads(
        &self,
        id: impl Display,
        params: Option<ParameterSet>,
    ) -> Result<ApiResponse, ApiError> {
        self.resource
            .get(&[id.to_string(), "downloads".to_string()], params)
            .await
    }
}
