//! The API index (`/`).

use std::sync::Arc;

use crate::clients::{ApiClient, ApiError, ApiResponse};
use crate::rest::Resource;

/// Builder for the API index, which describes the store and its routes.
#[derive(Clone, Debug)]
pub struct Index {
    resource: Resource,
}

impl Index {
    /// Creates the builder.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            resource: Resource::new("", "", client),
        }
    }

    /// Gets the index.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get(&self) -> Result<ApiResponse, ApiError> {
        self.resource.get(&[], None).await
    }
}
