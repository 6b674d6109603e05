//! Order notes endpoint (`orders/<order_id>/notes`).

use std::fmt::Display;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::{ApiClient, ApiError, ApiResponse, ParameterSet};
use crate::rest::{segment, Resource};

/// Builder for notes on an order; bodies are wrapped under `order_note`.
#[derive(Clone, Debug)]
pub struct OrderNotes {
    resource: Resource,
}

impl OrderNotes {
    /// Creates the builder.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            resource: Resource::new("orders", "order_note", client),
        }
    }

    fn segments(order_id: impl Display, id: String) -> [String; 3] {
        [order_id.to_string(), "notes".to_string(), id]
    }

    /// Gets one note, or lists the notes of the order when `id` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get(
        &self,
        order_id: impl Display,
        id: Option<impl Display>,
        params: Option<ParameterSet>,
    ) -> Result<ApiResponse, ApiError> {
        self.resource
            .get(&Self::segments(order_id, segment(id)), params)
            .await
    }

    /// Adds a note to an order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn create(
        &self,
        order_id: impl Display,
        data: Value,
    ) -> Result<ApiResponse, ApiError> {
        self.resource
            .post(&Self::segments(order_id, String::new()), data)
            .await
    }

    /// Updates a note.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update(
        &self,
        order_id: impl Display,
        id: impl Display,
        data: Value,
    ) -> Result<ApiResponse, ApiError> {
        self.resource
            .put(&Self::segments(order_id, id.to_string()), data)
            .await
    }

    /// Deletes a note.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn delete(
        &self,
        order_id: impl Display,
        id: impl Display,
    ) -> Result<ApiResponse, ApiError> {
        self.resource
            .delete(&Self::segments(order_id, id.to_string()), None)
            .await
    }
}
