//! Shared base for endpoint builders.
//!
//! Every builder wraps a [`Resource`]: an endpoint (such as `orders`), the
//! object namespace its create and update bodies are nested under (such as
//! `order`), and the shared [`ApiClient`].
//!
//! # Conventions
//!
//! - Bodies are wrapped as `{"<namespace>": body}` unless the namespace is
//!   empty, the body already has the namespace key, or the body is empty.
//! - GET and DELETE calls send parameters only; POST and PUT send the body
//!   and any parameters.
//! - A `force` flag is sent as the string `true` or `false`.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::{ApiClient, ApiError, ApiResponse, HttpMethod, ParameterSet, RequestData};
use crate::rest::build_path;

/// An endpoint and object namespace bound to a client.
#[derive(Clone, Debug)]
pub struct Resource {
    endpoint: String,
    namespace: String,
    client: Arc<ApiClient>,
}

impl Resource {
    /// Creates a resource for `endpoint`, wrapping bodies under `namespace`.
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        namespace: impl Into<String>,
        client: Arc<ApiClient>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            namespace: namespace.into(),
            client,
        }
    }

    /// Returns the endpoint, e.g. `orders`.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the object namespace, e.g. `order`.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the shared client.
    #[must_use]
    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// Returns the path for `segments` under this endpoint.
    #[must_use]
    pub fn path(&self, segments: &[String]) -> String {
        build_path(&self.endpoint, segments)
    }

    /// Nests `body` under the object namespace.
    #[must_use]
    pub fn wrap_body(&self, body: Value) -> Value {
        if self.namespace.is_empty() || is_empty_body(&body) {
            return body;
        }
        if body.get(&self.namespace).is_some() {
            return body;
        }
        let mut wrapped = serde_json::Map::new();
        wrapped.insert(self.namespace.clone(), body);
        Value::Object(wrapped)
    }

    /// Sends a request to a path under this endpoint.
    ///
    /// # Errors
    ///
    /// Returns any [`ApiError`] from [`ApiClient::make_api_call`].
    pub async fn send(
        &self,
        method: HttpMethod,
        segments: &[String],
        params: Option<ParameterSet>,
        body: Option<Value>,
    ) -> Result<ApiResponse, ApiError> {
        let data = RequestData {
            params: params.unwrap_or_default(),
            body: if method.has_body() {
                body.map(|body| self.wrap_body(body))
            } else {
                None
            },
        };
        self.client
            .make_api_call(method, &self.path(segments), data)
            .await
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns any [`ApiError`] from [`ApiClient::make_api_call`].
    pub async fn get(
        &self,
        segments: &[String],
        params: Option<ParameterSet>,
    ) -> Result<ApiResponse, ApiError> {
        self.send(HttpMethod::Get, segments, params, None).await
    }

    /// Sends a POST request with a namespaced body.
    ///
    /// # Errors
    ///
    /// Returns any [`ApiError`] from [`ApiClient::make_api_call`].
    pub async fn post(&self, segments: &[String], body: Value) -> Result<ApiResponse, ApiError> {
        self.send(HttpMethod::Post, segments, None, Some(body)).await
    }

    /// Sends a PUT request with a namespaced body.
    ///
    /// # Errors
    ///
    /// Returns any [`ApiError`] from [`ApiClient::make_api_call`].
    pub async fn put(&self, segments: &[String], body: Value) -> Result<ApiResponse, ApiError> {
        self.send(HttpMethod::Put, segments, None, Some(body)).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns any [`ApiError`] from [`ApiClient::make_api_call`].
    pub async fn delete(
        &self,
        segments: &[String],
        params: Option<ParameterSet>,
    ) -> Result<ApiResponse, ApiError> {
        self.send(HttpMethod::Delete, segments, params, None).await
    }
}

/// Returns the `force` parameter for DELETE calls.
///
/// `false` is sent as the string `false`; WooCommerce reads it as falsy.
#[must_use]
pub fn force_param(force: bool) -> ParameterSet {
    ParameterSet::new().with("force", force)
}

fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
