//! Reports endpoint (`reports`). Read-only.

use std::sync::Arc;

use crate::clients::{ApiClient, ApiError, ApiResponse, ParameterSet};
use crate::rest::Resource;

/// Builder for the `reports` endpoint.
#[derive(Clone, Debug)]
pub struct Reports {
    resource: Resource,
}

impl Reports {
    /// Creates the builder.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            resource: Resource::new("reports", "", client),
        }
    }

    /// Lists the available reports.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn list(&self) -> Result<ApiResponse, ApiError> {
        self.resource.get(&[], None).await
    }

    /// Gets the sales report, e.g. with `filter[period]=week`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn sales(&self, params: Option<ParameterSet>) -> Result<ApiResponse, ApiError> {
        self.resource.get(&["sales".to_string()], params).await
    }

    /// Gets the top sellers report.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn top_sellers(
        &self,
        params: Option<ParameterSet>,
    ) -> Result<ApiResponse, ApiError> {
        self.resource
            .get(&["sales".to_string(), "top_sellers".to_string()], params)
            .await
    }
}
