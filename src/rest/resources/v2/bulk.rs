//! Bulk product updates (`products/bulk`).
//!
//! One PUT request carrying a collection. The server applies each entry and
//! reports per-item results in the response body.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::{ApiClient, ApiError, ApiResponse};
use crate::rest::Resource;

/// Builder for `products/bulk`; bodies are wrapped under `products`.
#[derive(Clone, Debug)]
pub struct Bulk {
    resource: Resource,
}

impl Bulk {
    /// Creates the builder.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            resource: Resource::new("products", "products", client),
        }
    }

    /// Sends a collection of product updates.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn send(&self, data: Value) -> Result<ApiResponse, ApiError> {
        self.resource.put(&["bulk".to_string()], data).await
    }
}
