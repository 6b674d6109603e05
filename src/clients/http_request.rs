//! HTTP request types for the WooCommerce API client.
//!
//! This module provides [`HttpMethod`], the [`ParameterSet`] used for query
//! parameters, the [`RequestData`] passed by endpoint builders, and the
//! [`HttpRequest`] built for each dispatched call.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the WooCommerce API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire, e.g. `GET`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` for methods that carry a JSON body.
    #[must_use]
    pub const fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query parameter value.
///
/// `Nested` values are sent as `key[sub]=value` pairs, which is how the API
/// expects `filter` arguments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A plain string value.
    Single(String),
    /// A mapping of sub-keys to values.
    Nested(BTreeMap<String, String>),
}

impl ParamValue {
    /// Returns the value if it is a plain string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Nested(_) => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Single(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Single(if value { "true" } else { "false" }.to_string())
    }
}

impl From<BTreeMap<String, String>> for ParamValue {
    fn from(value: BTreeMap<String, String>) -> Self {
        Self::Nested(value)
    }
}

macro_rules! impl_param_value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Single(value.to_string())
                }
            }
        )*
    };
}

impl_param_value_from_int!(u32, u64, i32, i64, usize);

/// An insertion-ordered set of query parameters.
///
/// Inserting an existing key replaces its value in place.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::ParameterSet;
///
/// let params = ParameterSet::new()
///     .with("status", "processing")
///     .with_nested("filter", "limit", "10");
///
/// assert_eq!(
///     params.flatten(),
///     vec![
///         ("status".to_string(), "processing".to_string()),
///         ("filter[limit]".to_string(), "10".to_string()),
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: Vec<(String, ParamValue)>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a parameter, returning the previous value for the key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.entries.push((key, value));
        None
    }

    /// Adds a parameter and returns the set.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts `key[sub] = value`, turning `key` into a nested value if needed.
    pub fn insert_nested(
        &mut self,
        key: impl Into<String>,
        sub: impl Into<String>,
        value: impl Into<String>,
    ) {
        let key = key.into();
        let (sub, value) = (sub.into(), value.into());
        if let Some((_, ParamValue::Nested(map))) = self.entries.iter_mut().find(|(k, _)| *k == key)
        {
            map.insert(sub, value);
            return;
        }
        self.insert(key, ParamValue::Nested(BTreeMap::from([(sub, value)])));
    }

    /// Adds `key[sub] = value` and returns the set.
    #[must_use]
    pub fn with_nested(
        mut self,
        key: impl Into<String>,
        sub: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert_nested(key, sub, value);
        self
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the plain string value for `key`.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_str)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Merges `other` into this set; keys from `other` win.
    pub fn merge(&mut self, other: Self) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    /// Returns the number of top-level parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the top-level parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Flattens nested values into `key[sub]` pairs.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            match value {
                ParamValue::Single(value) => pairs.push((key.clone(), value.clone())),
                ParamValue::Nested(map) => {
                    for (sub, value) in map {
                        pairs.push((format!("{key}[{sub}]"), value.clone()));
                    }
                }
            }
        }
        pairs
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl Serialize for ParameterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Data passed by endpoint builders: query parameters and an optional JSON body.
///
/// GET and DELETE calls carry only parameters. POST and PUT calls carry a
/// body and may still carry parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestData {
    /// Query parameters.
    pub params: ParameterSet,
    /// JSON body for POST/PUT.
    pub body: Option<serde_json::Value>,
}

impl RequestData {
    /// No parameters and no body.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Query parameters only.
    #[must_use]
    pub fn params(params: ParameterSet) -> Self {
        Self { params, body: None }
    }

    /// A JSON body only.
    #[must_use]
    pub fn body(body: impl Into<serde_json::Value>) -> Self {
        Self {
            params: ParameterSet::new(),
            body: Some(body.into()),
        }
    }

    /// Replaces the query parameters.
    #[must_use]
    pub fn with_params(mut self, params: ParameterSet) -> Self {
        self.params = params;
        self
    }
}

/// A request to be dispatched to the WooCommerce API.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// ```rust
/// use woocommerce_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Put, "https://example.com/wc-api/v2/orders/1/")
///     .body(json!({"order": {"status": "completed"}}))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.url, "https://example.com/wc-api/v2/orders/1");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The endpoint URL, without trailing slashes or query string.
    pub url: String,
    /// Query parameters, before authentication parameters are added.
    pub params: ParameterSet,
    /// The JSON body, if any.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Creates a new builder for the given method and endpoint URL.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    /// - `http_method` is `Get` or `Delete` but `body` is `Some`
    /// - `url` is empty
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.url.is_empty() {
            return Err(InvalidHttpRequestError::InvalidUrl {
                url: self.url.clone(),
            });
        }

        match (self.http_method.has_body(), self.body.is_some()) {
            (true, false) => Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            }),
            (false, true) => Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    params: ParameterSet,
    body: Option<serde_json::Value>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            params: ParameterSet::new(),
            body: None,
        }
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn params(mut self, params: ParameterSet) -> Self {
        self.params = params;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets parameters and body from endpoint builder data.
    #[must_use]
    pub fn data(mut self, data: RequestData) -> Self {
        self.params = data.params;
        self.body = data.body;
        self
    }

    /// Builds the [`HttpRequest`], stripping trailing slashes from the URL.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url.trim_end_matches('/').to_string(),
            params: self.params,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://example.com/wc-api/v2/orders";

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = ParameterSet::new().with("a", "1").with("b", "2");
        let previous = params.insert("a", "3");

        assert_eq!(previous, Some(ParamValue::from("1")));
        assert_eq!(
            params.flatten(),
            vec![
                ("a".to_string(), "3".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_nested_values_flatten_with_brackets() {
        let params = ParameterSet::new()
            .with_nested("filter", "created_at_min", "2024-01-01")
            .with_nested("filter", "limit", "5");

        assert_eq!(params.len(), 1);
        assert_eq!(
            params.flatten(),
            vec![
                ("filter[created_at_min]".to_string(), "2024-01-01".to_string()),
                ("filter[limit]".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut params = ParameterSet::new().with("force", "false");
        params.merge(ParameterSet::new().with("force", "true").with("x", 1_u64));
        assert_eq!(params.get_str("force"), Some("true"));
        assert_eq!(params.get_str("x"), Some("1"));
    }

    #[test]
    fn test_from_iterator_and_bool_values() {
        let params: ParameterSet = [("force", true), ("dry_run", false)].into_iter().collect();
        assert_eq!(params.get_str("force"), Some("true"));
        assert_eq!(params.get_str("dry_run"), Some("false"));
    }

    #[test]
    fn test_parameter_set_serializes_as_map() {
        let params = ParameterSet::new()
            .with("a", "1")
            .with_nested("filter", "q", "x");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"a": "1", "filter": {"q": "x"}})
        );
    }

    #[test]
    fn test_builder_strips_trailing_slashes() {
        let request = HttpRequest::builder(HttpMethod::Get, format!("{URL}//"))
            .build()
            .unwrap();
        assert_eq!(request.url, URL);
    }

    #[test]
    fn test_verify_requires_body_for_post() {
        let result = HttpRequest::builder(HttpMethod::Post, URL).build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "POST"
        ));
    }

    #[test]
    fn test_verify_rejects_body_for_get() {
        let result = HttpRequest::builder(HttpMethod::Get, URL)
            .body(json!({"a": 1}))
            .build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::UnexpectedBody { method }) if method == "GET"
        ));
    }

    #[test]
    fn test_delete_may_carry_params() {
        let request = HttpRequest::builder(HttpMethod::Delete, format!("{URL}/1"))
            .param("force", true)
            .build()
            .unwrap();
        assert_eq!(request.params.get_str("force"), Some("true"));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_builder_accepts_request_data() {
        let data = RequestData::body(json!({"order": {}})).with_params(ParameterSet::new().with("a", "b"));
        let request = HttpRequest::builder(HttpMethod::Put, URL)
            .data(data)
            .build()
            .unwrap();
        assert!(request.body.is_some());
        assert_eq!(request.params.get_str("a"), Some("b"));
    }
}
