//! Orders endpoint (`orders`).
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::clients::ParameterSet;
//!
//! let order = client.orders.get(Some(166), None).await?;
//!
//! let params = ParameterSet::new().with_nested("filter", "limit", "5");
//! let recent = client.orders.get(None::<u64>, Some(params)).await?;
//!
//! client.orders.update_status(166, "completed").await?;
//! ```

use std::fmt::Display;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::clients::{ApiClient, ApiError, ApiResponse, ParameterSet};
use crate::rest::{force_param, segment, Resource};

/// Builder for the `orders` endpoint; bodies are wrapped under `order`.
#[derive(Clone, Debug)]
pub struct Orders {
    resource: Resource,
}

impl Orders {
    /// Creates the builder.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            resource: Resource::new("orders", "order", client),
        }
    }

    /// Gets one order, or lists orders when `id` is `None`.
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

    /// Creates an order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn create(&self, data: Value) -> Result<ApiResponse, ApiError> {
        self.resource.post(&[], data).await
    }

    /// Updates an order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update(&self, id: impl Display, data: Value) -> Result<ApiResponse, ApiError> {
        self.resource.put(&[id.to_string()], data).await
    }

    /// Deletes an order; `force` skips the trash.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn delete(&self, id: impl Display, force: bool) -> Result<ApiResponse, ApiError> {
        self.resource
            .delete(&[id.to_string()], Some(force_param(force)))
            .await
    }

    /// Counts orders.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn count(&self, params: Option<ParameterSet>) -> Result<ApiResponse, ApiError> {
        self.resource.get(&["count".to_string()], params).await
    }

    /// Lists the order statuses the store knows.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn statuses(&self) -> Result<ApiResponse, ApiError> {
        self.resource.get(&["statuses".to_string()], None).await
    }

    /// Sets the status of an order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update_status(
        &self,
        id: impl Display,
        status: &str,
    ) -> Result<ApiResponse, ApiError> {
        self.update(id, json!({ "status": status })).await
    }
}
