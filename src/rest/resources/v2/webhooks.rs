//! Webhooks endpoint (`webhooks`).

use std::fmt::Display;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::{ApiClient, ApiError, ApiResponse, ParameterSet};
use crate::rest::{segment, Resource};

/// Builder for the `webhooks` endpoint; bodies are wrapped under `webhook`.
#[derive(Clone, Debug)]
pub struct Webhooks {
    resource: Resource,
}

impl Webhooks {
    /// Creates the builder.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            resource: Resource::new("webhooks", "webhook", client),
        }
    }

    /// Gets one webhook, or lists webhooks when `id` is `None`.
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

    /// Creates a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn create(&self, data: Value) -> Result<ApiResponse, ApiError> {
        self.resource.post(&[], data).await
    }

    /// Updates a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update(&self, id: impl Display, data: Value) -> Result<ApiResponse, ApiError> {
        self.resource.put(&[id.to_string()], data).await
    }

    /// Deletes a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn delete(&self, id: impl Display) -> Result<ApiResponse, ApiError> {
        self.resource.delete(&[id.to_string()], None).await
    }

    /// Counts webhooks.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn count(&self, params: Option<ParameterSet>) -> Result<ApiResponse, ApiError> {
        self.resource.get(&["count".to_string()], params).await
    }

    /// Lists the deliveries of a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn deliveries(
        &self,
        id: impl Display,
        params: Option<ParameterSet>,
    ) -> Result<ApiResponse, ApiError> {
        self.resource
            .get(&[id.to_string(), "deliveries".to_string()], params)
            .await
    }

    /// Gets one delivery of a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn delivery(
        &self,
        webhook_id: impl Display,
        id: impl Display,
        params: Option<ParameterSet>,
    ) -> Result<ApiResponse, ApiError> {
        self.resource
            .get(
                &[
                    webhook_id.to_string(),
                    "deliveries".to_string(),
                    id.to_string(),
                ],
                params,
            )
            .await
    }
}
