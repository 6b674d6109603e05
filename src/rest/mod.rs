//! Endpoint builders and the [`WooCommerceClient`] composition.
//!
//! This module provides:
//!
//! - **[`WooCommerceClient`]**: one typed field per resource, all sharing one [`ApiClient`]
//! - **[`Resource`]**: the shared base every builder wraps
//! - **Path building**: [`build_path`], [`segment`] and [`encode_segment`]
//! - **[`resources`]**: version-specific builders (Orders, Products, ...)
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::{ClientConfig, WooCommerceClient};
//! use serde_json::json;
//!
//! let config = ClientConfig::from_parts(
//!     "http://example.com",
//!     "ck_abc",
//!     "cs_abc",
//!     json!({"debug": true, "validate_url": true}),
//! )?;
//! let client = WooCommerceClient::connect(config).await?;
//!
//! let order = client.orders.get(Some(166), None).await?;
//! client.orders.update(166, json!({"status": "completed"})).await?;
//! client.products.delete(99, true).await?;
//! ```

mod path;
mod resource;

pub mod resources;

use std::sync::Arc;

pub use path::{build_path, encode_segment, segment};
pub use resource::{force_param, Resource};

use crate::clients::{ApiClient, ApiError};
use crate::config::ClientConfig;
use resources::{
    Bulk, Coupons, Custom, Customers, Index, OrderNotes, OrderRefunds, Orders, Products, Reports,
    Webhooks,
};

/// A client with one builder per WooCommerce resource.
///
/// Cloning is cheap; every builder holds the same `Arc<ApiClient>`.
#[derive(Clone, Debug)]
pub struct WooCommerceClient {
    client: Arc<ApiClient>,
    /// The API index.
    pub index: Index,
    /// Orders.
    pub orders: Orders,
    /// Order notes.
    pub order_notes: OrderNotes,
    /// Order refunds.
    pub order_refunds: OrderRefunds,
    /// Coupons.
    pub coupons: Coupons,
    /// Customers.
    pub customers: Customers,
    /// Products.
    pub products: Products,
    /// Reports.
    pub reports: Reports,
    /// Webhooks.
    pub webhooks: Webhooks,
    /// Bulk product updates.
    pub bulk: Bulk,
}

// Verify WooCommerceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WooCommerceClient>();
};

impl WooCommerceClient {
    /// Builds the builders around an existing client.
    #[must_use]
    pub fn from_client(client: ApiClient) -> Self {
        let client = Arc::new(client);
        Self {
            index: Index::new(Arc::clone(&client)),
            orders: Orders::new(Arc::clone(&client)),
            order_notes: OrderNotes::new(Arc::clone(&client)),
            order_refunds: OrderRefunds::new(Arc::clone(&client)),
            coupons: Coupons::new(Arc::clone(&client)),
            customers: Customers::new(Arc::clone(&client)),
            products: Products::new(Arc::clone(&client)),
            reports: Reports::new(Arc::clone(&client)),
            webhooks: Webhooks::new(Arc::clone(&client)),
            bulk: Bulk::new(Arc::clone(&client)),
            client,
        }
    }

    /// Creates a client without probing the API.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::from_client(ApiClient::new(config))
    }

    /// Creates a client, probing the API first when `validate_url` is set.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if the probe fails.
    pub async fn connect(config: ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::from_client(ApiClient::connect(config).await?))
    }

    /// Returns the shared client.
    #[must_use]
    pub fn api_client(&self) -> &ApiClient {
        &self.client
    }

    /// Returns a builder for an endpoint without a dedicated one.
    #[must_use]
    pub fn custom(&self, endpoint: impl Into<String>, namespace: impl Into<String>) -> Custom {
        Custom::new(Arc::clone(&self.client), endpoint, namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_share_one_client() {
        let config =
            ClientConfig::from_parts("https://example.com", "ck_x", "cs_y", serde_json::Value::Null)
                .unwrap();
        let client = WooCommerceClient::new(config);

        // the composition holds one reference, plus one per builder
        assert_eq!(Arc::strong_count(&client.client), 11);
        assert_eq!(client.api_client().api_url(), "https://example.com/wc-api/v2/");
    }

    #[test]
    fn test_custom_builder_uses_shared_client() {
        let config =
            ClientConfig::from_parts("https://example.com", "ck_x", "cs_y", serde_json::Value::Null)
                .unwrap();
        let client = WooCommerceClient::new(config);
        let _tags = client.custom("products/tags", "product_tag");
        assert_eq!(Arc::strong_count(&client.client), 12);
    }
}
