//! HTTP-specific error types for the WooCommerce API client.
//!
//! Every failure of [`ApiClient::make_api_call`](crate::clients::ApiClient::make_api_call)
//! is an [`ApiError`]. Discriminate by variant:
//!
//! - [`ApiError::Config`]: the client configuration is invalid
//! - [`ApiError::Validation`]: the startup probe found no usable API
//! - [`ApiError::Parse`]: the response body is not JSON, even after repair
//! - [`ApiError::Application`]: a non-success status with a decodable `errors` payload
//! - [`ApiError::InvalidRequest`]: the request failed validation before sending
//! - [`ApiError::Network`]: the transport failed (connection, TLS, timeout)
//!
//! # Example
//!
//! ```rust,ignore
//! match client.orders.get(Some(123), None).await {
//!     Ok(response) => println!("Order: {}", response.data),
//!     Err(ApiError::Application(e)) => println!("API error {}: {}", e.status, e),
//!     Err(ApiError::Parse(e)) => println!("Bad body from {}", e.url),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::http_client::HttpExchange;
use crate::error::ConfigError;

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not take a body.
        method: String,
    },

    /// The request URL could not be parsed.
    #[error("Invalid request URL '{url}'.")]
    InvalidUrl {
        /// The URL that was rejected.
        url: String,
    },
}

/// Error returned when the startup probe of the API index fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing that looks like the API answered at the URL.
    #[error("Invalid URL, no WC API found at {url} -- ensure your store URL is correct and pretty permalinks are enabled.")]
    NotFound {
        /// The API URL that was probed.
        url: String,
    },

    /// The store runs a WooCommerce version without this API.
    #[error("Please upgrade the WooCommerce version on {url} to v2.2 or greater.")]
    UnsupportedVersion {
        /// The API URL that was probed.
        url: String,
    },

    /// The index responded but its body is not JSON.
    #[error("WC API found, but JSON is corrupt -- ensure the index at {url} is valid JSON.")]
    CorruptIndex {
        /// The API URL that was probed.
        url: String,
    },
}

impl ValidationError {
    /// Returns the HTTP-like status code associated with the failure.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::UnsupportedVersion { .. } | Self::CorruptIndex { .. } => 0,
        }
    }
}

/// Why a response body could not be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No JSON object could be recovered from the body.
    InvalidJson,
    /// The body is an error response without a readable `errors` field.
    MissingErrors,
}

impl ParseErrorKind {
    const fn description(self) -> &'static str {
        match self {
            Self::InvalidJson => "Invalid JSON",
            Self::MissingErrors => "Unreadable error response",
        }
    }
}

/// Error returned when a response body is not recoverable as JSON.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{} returned for {url}.", .kind.description())]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// The request URL, without the query string.
    pub url: String,
    /// The HTTP status code reported by the transport.
    pub status: u16,
    /// The raw response body.
    pub raw_body: String,
}

/// Error returned for a non-success status with a decodable error payload.
///
/// The display form is `Error: <message> [<code>]`.
#[derive(Debug, Error, Clone)]
#[error("Error: {message} [{code}]")]
pub struct ApplicationError {
    /// The `message` field of the error payload.
    pub message: String,
    /// The `code` field of the error payload.
    pub code: String,
    /// The HTTP status code.
    pub status: u16,
    /// The request/response exchange that produced the error.
    pub context: Option<Box<HttpExchange>>,
}

/// Unified error type for API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid client configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The startup probe failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The response body could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The API reported an error.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Returns the HTTP status code attached to the error, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Parse(e) => Some(e.status),
            Self::Application(e) => Some(e.status),
            Self::Validation(e) => Some(e.status_code()),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::Config(_) | Self::InvalidRequest(_) => None,
        }
    }
}
