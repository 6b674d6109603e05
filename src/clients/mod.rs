//! HTTP client types for WooCommerce API communication.
//!
//! This module provides the request, dispatch and error layer that every
//! endpoint builder goes through.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiClient`]: The facade holding the store configuration
//! - [`HttpClient`]: The dispatcher that authenticates, sends and decodes
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response captured from the transport
//! - [`ApiResponse`]: A decoded success, with the [`HttpExchange`] in debug mode
//! - [`ParameterSet`]: Query parameters, including nested `filter` values
//! - [`ApiError`]: Every failure, by variant
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::{ApiClient, ClientConfig};
//! use woocommerce_api::clients::{HttpMethod, RequestData};
//!
//! let config = ClientConfig::from_parts("https://example.com", "ck_abc", "cs_abc", serde_json::Value::Null)?;
//! let client = ApiClient::new(config);
//!
//! let response = client
//!     .make_api_call(HttpMethod::Get, "orders/166", RequestData::none())
//!     .await?;
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Each call is one request; errors go straight back to the
//! caller.

mod api_client;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use api_client::ApiClient;
pub use errors::{
    ApiError, ApplicationError, InvalidHttpRequestError, ParseError, ParseErrorKind,
    ValidationError,
};
pub use http_client::{
    build_url, default_headers, ApiResponse, HttpClient, HttpExchange, RequestSnapshot,
    SDK_VERSION,
};
pub use http_request::{
    HttpMethod, HttpRequest, HttpRequestBuilder, ParamValue, ParameterSet, RequestData,
};
pub use http_response::{extract_json_object, HeaderValue, HttpResponse, ResponseHeaders};
