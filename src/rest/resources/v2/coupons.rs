//! Coupons endpoint (`coupons`).

use std::fmt::Display;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::{ApiClient, ApiError, ApiResponse, ParameterSet};
use crate::rest::{encode_segment, force_param, segment, Resource};

/// Builder for the `coupons` endpoint; bodies are wrapped under `coupon`.
#[derive(Clone, Debug)]
pub struct Coupons {
    resource: Resource,
}

impl Coupons {
    /// Creates the builder.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            resource: Resource::new("coupons", "coupon", client),
        }
    }

    /// Gets one coupon, or lists coupons when `id` is `None`.
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

    /// Gets a coupon by its code. The code is percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_by_code(
        &self,
        code: &str,
        params: Option<ParameterSet>,
    ) -> Result<ApiResponse, ApiError> {
        self.resource
            .get(&["code".to_string(), encode_segment(code)], params)
            .await
    }

    /// Creates a coupon.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn create(&self, data: Value) -> Result<ApiResponse, ApiError> {
        self.resource.post(&[], data).await
    }

    /// Updates a coupon.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update(&self, id: impl Display, data: Value) -> Result<ApiResponse, ApiError> {
        self.resource.put(&[id.to_string()], data).await
    }

    /// Deletes a coupon; `force` skips the trash.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn delete(&self, id: impl Display, force: bool) -> Result<ApiResponse, ApiError> {
        self.resource
            .delete(&[id.to_string()], Some(force_param(force)))
            .await
    }

    /// Counts coupons.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn count(&self, params: Option<ParameterSet>) -> Result<ApiResponse, ApiError> {
        self.resource.get(&["count".to_string()], params).await
    }
}
