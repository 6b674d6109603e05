//! HTTP dispatcher for WooCommerce API communication.
//!
//! This module provides the [`HttpClient`] type, which authenticates a
//! request, sends it, and turns the response into an [`ApiResponse`] or an
//! [`ApiError`].

use std::time::{Duration, Instant};

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::oauth::OAuthSigner;
use crate::auth::{AuthMode, Credentials};
use crate::clients::errors::{
    ApiError, ApplicationError, InvalidHttpRequestError, ParseError, ParseErrorKind,
};
use crate::clients::http_request::{HttpMethod, HttpRequest, ParameterSet};
use crate::clients::http_response::{HttpResponse, ResponseHeaders};
use crate::config::ClientOptions;

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the fixed headers sent with every request.
#[must_use]
pub fn default_headers(version: &str) -> Vec<(String, String)> {
    vec![
        ("Accept".to_string(), "application/json".to_string()),
        ("Content-Type".to_string(), "application/json".to_string()),
        (
            "User-Agent".to_string(),
            format!("WooCommerce API Client-Rust/{version}"),
        ),
    ]
}

/// The outgoing side of an exchange, as sent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RequestSnapshot {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The full URL, including authentication parameters.
    pub url: String,
    /// Request headers as `Name: value` lines.
    pub headers: Vec<String>,
    /// Query parameters, including authentication parameters.
    pub params: ParameterSet,
    /// The JSON encoded body, if any.
    pub body: Option<String>,
    /// Wall-clock time around the request, in seconds.
    pub duration: f64,
}

/// A full request/response pair, attached to debug results and API errors.
///
/// In https mode the URL and parameters include the consumer secret.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HttpExchange {
    /// The request that was sent.
    pub request: RequestSnapshot,
    /// The response that came back.
    pub response: HttpResponse,
}

/// A successful API result.
///
/// `http` is only set when the client runs in debug mode.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApiResponse {
    /// The decoded response body.
    pub data: serde_json::Value,
    /// The request/response envelope, in debug mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpExchange>,
}

impl ApiResponse {
    /// Returns a top-level field of the response body.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Deserializes the response body into `T`.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body does not match `T`.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data)
    }
}

/// Authenticates and dispatches requests.
///
/// A fresh transport is built for every call and dropped when the call
/// returns; nothing is pooled between calls.
#[derive(Clone, Debug)]
pub struct HttpClient {
    credentials: Credentials,
    options: ClientOptions,
    default_headers: Vec<(String, String)>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a dispatcher for the given credentials and options.
    #[must_use]
    pub fn new(credentials: Credentials, options: ClientOptions) -> Self {
        Self {
            credentials,
            options,
            default_headers: default_headers(SDK_VERSION),
        }
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    /// Returns the client options.
    #[must_use]
    pub const fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Returns the request parameters merged with authentication parameters.
    ///
    /// Over https the consumer key and secret are appended as plain
    /// parameters; otherwise the OAuth 1.0a parameters and signature are.
    #[must_use]
    pub fn authenticated_params(&self, request: &HttpRequest) -> ParameterSet {
        let mode = AuthMode::for_url(&request.url);
        tracing::debug!("Authenticating {} request with {:?}", request.http_method, mode);

        match mode {
            AuthMode::QueryParams => {
                let mut params = request.params.clone();
                params.insert("consumer_key", self.credentials.consumer_key().as_str());
                params.insert(
                    "consumer_secret",
                    self.credentials.consumer_secret().as_str(),
                );
                params
            }
            AuthMode::OAuthSigned => {
                OAuthSigner::new(&request.url, &self.credentials, self.options.hash_algorithm)
                    .oauth_params(&request.params, request.http_method)
            }
        }
    }

    /// Sends a request and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - The URL cannot be parsed (`InvalidRequest`)
    /// - The transport fails or times out (`Network`, with the query string
    ///   removed from the error's URL)
    /// - The body is not JSON after repair (`Parse`)
    /// - The status is not 200, 201 or 202 (`Application`, or `Parse` when
    ///   the error payload is unreadable)
    pub async fn dispatch(&self, request: HttpRequest) -> Result<ApiResponse, ApiError> {
        request.verify()?;

        let params = self.authenticated_params(&request);
        let url = build_url(&request.url, &params)?;
        let body = request.body.as_ref().map(ToString::to_string);

        let transport = self.transport()?;
        let mut req_builder = match request.http_method {
            HttpMethod::Get => transport.get(url.as_str()),
            HttpMethod::Post => transport.post(url.as_str()),
            HttpMethod::Put => transport.put(url.as_str()),
            HttpMethod::Delete => transport.delete(url.as_str()),
        };
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = &body {
            req_builder = req_builder.body(body.clone());
        }

        let start = Instant::now();
        let res = req_builder.send().await.map_err(redact_url)?;
        let code = res.status().as_u16();
        let headers = ResponseHeaders::from_header_map(res.headers());
        let raw_body = res.text().await.map_err(redact_url)?;
        let duration = round_duration(start.elapsed());
        drop(transport);

        tracing::debug!(
            "{} {} returned {} in {:.5}s",
            request.http_method,
            request.url,
            code,
            duration
        );

        let response = HttpResponse::new(code, headers, raw_body, duration);
        let Some(parsed) = response.parsed_body() else {
            return Err(ParseError {
                kind: ParseErrorKind::InvalidJson,
                url: request.url,
                status: code,
                raw_body: response.body,
            }
            .into());
        };

        let exchange = || HttpExchange {
            request: RequestSnapshot {
                method: request.http_method,
                url: url.to_string(),
                headers: self
                    .default_headers
                    .iter()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect(),
                params: params.clone(),
                body: body.clone(),
                duration,
            },
            response: response.clone(),
        };

        if !response.is_ok() {
            return Err(decode_error(&parsed, &request.url, &response, exchange()));
        }

        Ok(ApiResponse {
            data: parsed,
            http: self.options.debug.then(exchange),
        })
    }

    /// Fetches `url` without authentication, returning the raw response.
    ///
    /// Used to probe the API index.
    ///
    /// # Errors
    ///
    /// Returns a [`reqwest::Error`] if the transport fails. The error's URL
    /// has its query string removed.
    pub async fn fetch(&self, url: &str) -> Result<HttpResponse, reqwest::Error> {
        let transport = self.transport()?;
        let mut req_builder = transport.get(url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let start = Instant::now();
        let res = req_builder.send().await.map_err(redact_url)?;
        let code = res.status().as_u16();
        let headers = ResponseHeaders::from_header_map(res.headers());
        let body = res.text().await.map_err(redact_url)?;

        Ok(HttpResponse::new(
            code,
            headers,
            body,
            round_duration(start.elapsed()),
        ))
    }

    /// Builds the per-call transport.
    fn transport(&self) -> Result<reqwest::Client, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(!self.options.ssl_verify)
            .pool_max_idle_per_host(0);

        if self.options.timeout > 0 {
            let timeout = Duration::from_secs(self.options.timeout);
            builder = builder.connect_timeout(timeout).timeout(timeout);
        }

        builder.build()
    }
}

/// Appends `params` to `url` as a form-encoded query string.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::InvalidUrl`] if `url` cannot be parsed.
///
/// ```rust
/// use woocommerce_api::clients::{build_url, ParameterSet};
///
/// let params = ParameterSet::new()
///     .with("consumer_key", "ck_x")
///     .with("consumer_secret", "cs_y");
/// let url = build_url("https://store.example/wc-api/v2/orders/166", &params).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://store.example/wc-api/v2/orders/166?consumer_key=ck_x&consumer_secret=cs_y"
/// );
/// ```
pub fn build_url(url: &str, params: &ParameterSet) -> Result<Url, InvalidHttpRequestError> {
    let mut parsed = Url::parse(url).map_err(|_| InvalidHttpRequestError::InvalidUrl {
        url: url.to_string(),
    })?;
    if !params.is_empty() {
        parsed.query_pairs_mut().extend_pairs(params.flatten());
    }
    Ok(parsed)
}

/// Turns a non-success response into an [`ApiError`].
///
/// Reads `errors` (or its first element when it is a list) and its
/// `message` and `code` fields.
fn decode_error(
    body: &serde_json::Value,
    url: &str,
    response: &HttpResponse,
    exchange: HttpExchange,
) -> ApiError {
    let error = match body.get("errors") {
        Some(serde_json::Value::Array(items)) => items.first(),
        other => other,
    };

    let Some(error) = error.filter(|e| e.is_object()) else {
        return ParseError {
            kind: ParseErrorKind::MissingErrors,
            url: url.to_string(),
            status: response.code,
            raw_body: response.body.clone(),
        }
        .into();
    };

    let field = |name: &str| match error.get(name) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };

    ApplicationError {
        message: field("message"),
        code: field("code"),
        status: response.code,
        context: Some(Box::new(exchange)),
    }
    .into()
}

/// Drops the query string from a transport error's URL.
///
/// Over https the query carries the consumer secret, and `reqwest::Error`
/// prints its URL.
fn redact_url(error: reqwest::Error) -> reqwest::Error {
    match error.url().cloned() {
        Some(mut url) => {
            url.set_query(None);
            error.with_url(url)
        }
        None => error,
    }
}

/// Rounds a duration to 5 decimal places of a second.
fn round_duration(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100_000.0).round() / 100_000.0
}
