//! Products endpoint (`products`).
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! let product = client.products.get_by_sku("WOO-HOODIE", None).await?;
//! client.products.update_stock(99, 12).await?;
//! client.products.create(json!({"title": "Hoodie", "type": "simple"})).await?;
//! ```

use std::fmt::Display;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::clients::{ApiClient, ApiError, ApiResponse, ParameterSet};
use crate::rest::{encode_segment, force_param, segment, Resource};

/// Builder for the `products` endpoint; bodies are wrapped under `product`.
#[derive(Clone, Debug)]
pub struct Products {
    resource: Resource,
}

impl Products {
    /// Creates the builder.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            resource: Resource::new("products", "product", client),
        }
    }

    /// Gets one product, or lists products when `id` is `None`.
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

    /// Gets a product by SKU. The SKU is percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_by_sku(
        &self,
        sku: &str,
        params: Option<ParameterSet>,
    ) -> Result<ApiResponse, ApiError> {
        self.resource
            .get(&["sku".to_string(), encode_segment(sku)], params)
            .await
    }

    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn create(&self, data: Value) -> Result<ApiResponse, ApiError> {
        self.resource.post(&[], data).await
    }

    /// Updates a product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update(&self, id: impl Display, data: Value) -> Result<ApiResponse, ApiError> {
        self.resource.put(&[id.to_string()], data).await
    }

    /// Deletes a product; `force` skips the trash.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn delete(&self, id: impl Display, force: bool) -> Result<ApiResponse, ApiError> {
        self.resource
            .delete(&[id.to_string()], Some(force_param(force)))
            .await
    }

    /// Counts products.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn count(&self, params: Option<ParameterSet>) -> Result<ApiResponse, ApiError> {
        self.resource.get(&["count".to_string()], params).await
    }

    /// Lists the reviews of a product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn reviews(
        &self,
        id: impl Display,
        params: Option<ParameterSet>,
    ) -> Result<ApiResponse, ApiError> {
        self.resource
            .get(&[id.to_string(), "reviews".to_string()], params)
            .await
    }

    /// Gets one product category, or lists them when `id` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn categories(
        &self,
        id: Option<impl Display>,
        params: Option<ParameterSet>,
    ) -> Result<ApiResponse, ApiError> {
        self.resource
            .get(&["categories".to_string(), segment(id)], params)
            .await
    }

    /// Sets the stock quantity of a product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update_stock(
        &self,
        id: impl Display,
        quantity: i64,
    ) -> Result<ApiResponse, ApiError> {
        self.update(id, json!({ "stock_quantity": quantity })).await
    }
}
