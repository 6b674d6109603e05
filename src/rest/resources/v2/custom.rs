//! Calls to endpoints without a dedicated builder.
//!
//! ```rust,ignore
//! use woocommerce_api::rest::resources::Custom;
//! use serde_json::json;
//!
//! let tags = Custom::new(client.clone(), "products/tags", "product_tag");
//! tags.post("", json!({"name": "sale"}), None).await?;
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::clients::{ApiClient, ApiError, ApiResponse, HttpMethod, ParameterSet};
use crate::rest::Resource;

/// Builder for a caller-chosen endpoint and object namespace.
///
/// Unlike the dedicated builders, POST and PUT calls may carry query
/// parameters alongside the body.
#[derive(Clone, Debug)]
pub struct Custom {
    resource: Resource,
}

impl Custom {
    /// Creates a builder for `endpoint`; an empty `namespace` sends bodies as given.
    #[must_use]
    pub fn new(
        client: Arc<ApiClient>,
        endpoint: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            resource: Resource::new(endpoint, namespace, client),
        }
    }

    /// Returns a builder for another endpoint on the same client.
    #[must_use]
    pub fn setup(&self, endpoint: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self::new(Arc::clone(self.resource.client()), endpoint, namespace)
    }

    fn segments(path: &str) -> Vec<String> {
        path.split('/').map(str::to_string).collect()
    }

    /// Sends a GET request to `path` under the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get(
        &self,
        path: &str,
        params: Option<ParameterSet>,
    ) -> Result<ApiResponse, ApiError> {
        self.resource.get(&Self::segments(path), params).await
    }

    /// Sends a POST request to `path` under the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn post(
        &self,
        path: &str,
        data: Value,
        params: Option<ParameterSet>,
    ) -> Result<ApiResponse, ApiError> {
        self.resource
            .send(HttpMethod::Post, &Self::segments(path), params, Some(data))
            .await
    }

    /// Sends a PUT request to `path` under the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn put(
        &self,
        path: &str,
        data: Value,
        params: Option<ParameterSet>,
    ) -> Result<ApiResponse, ApiError> {
        self.resource
            .send(HttpMethod::Put, &Self::segments(path), params, Some(data))
            .await
    }

    /// Sends a DELETE request to `path` under the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn delete(
        &self,
        path: &str,
        params: Option<ParameterSet>,
    ) -> Result<ApiResponse, ApiError> {
        self.resource.delete(&Self::segments(path), params).await
    }
}
