//! HTTP response types for the WooCommerce API client.
//!
//! This module provides [`HttpResponse`], the raw response captured for each
//! call, together with header parsing and the JSON body repair applied
//! before decoding.

use std::collections::BTreeMap;

use serde::Serialize;

/// A response header value; repeated headers collapse into `Multiple`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HeaderValue {
    /// The header appeared once.
    Single(String),
    /// The header appeared more than once, in order of appearance.
    Multiple(Vec<String>),
}

impl HeaderValue {
    /// Returns the first value.
    #[must_use]
    pub fn first(&self) -> &str {
        match self {
            Self::Single(value) => value,
            Self::Multiple(values) => values.first().map_or("", String::as_str),
        }
    }

    /// Returns every value in order.
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => vec![value.as_str()],
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    fn push(&mut self, value: String) {
        match self {
            Self::Single(first) => {
                *self = Self::Multiple(vec![std::mem::take(first), value]);
            }
            Self::Multiple(values) => values.push(value),
        }
    }
}

/// Response headers keyed by name, as received (no case folding).
///
/// [`ResponseHeaders::parse_raw`] keeps names exactly as written. Headers
/// captured by the dispatcher come through `reqwest`, which lowercases
/// names, so the debug envelope shows `content-type`, not `Content-Type`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResponseHeaders(BTreeMap<String, HeaderValue>);

impl ResponseHeaders {
    /// Creates an empty header map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header value; a repeated name keeps every value.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let (name, value) = (name.into(), value.into());
        if let Some(existing) = self.0.get_mut(&name) {
            existing.push(value);
        } else {
            self.0.insert(name, HeaderValue::Single(value));
        }
    }

    /// Parses a raw header block.
    ///
    /// Lines are separated by `\n` or `\r\n`; folded continuation lines are
    /// joined. Status lines (`HTTP/...`) and lines without a colon are
    /// skipped. Each remaining line is split on its first colon and the
    /// value is trimmed.
    ///
    /// ```rust
    /// use woocommerce_api::clients::ResponseHeaders;
    ///
    /// let headers = ResponseHeaders::parse_raw(
    ///     "HTTP/1.1 200 OK\r\nSet-Cookie: a=1\r\nSet-Cookie: b=2\r\nX-WC-Total: 5\r\n\r\n",
    /// );
    /// assert_eq!(headers.get("X-WC-Total").unwrap().first(), "5");
    /// assert_eq!(headers.get("Set-Cookie").unwrap().values(), vec!["a=1", "b=2"]);
    /// ```
    #[must_use]
    pub fn parse_raw(raw: &str) -> Self {
        let unfolded = raw
            .replace("\r\n", "\n")
            .replace("\n ", " ")
            .replace("\n\t", " ");

        let mut headers = Self::new();
        for line in unfolded.split('\n').filter(|line| !line.is_empty()) {
            if line.starts_with("HTTP/") {
                continue;
            }
            if let Some((name, value)) = line.split_once(':') {
                headers.append(name, value.trim());
            }
        }
        headers
    }

    /// Collects headers from a transport header map.
    #[must_use]
    pub fn from_header_map(map: &reqwest::header::HeaderMap) -> Self {
        let mut headers = Self::new();
        for (name, value) in map {
            headers.append(
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }
        headers
    }

    /// Returns the value for a header name, matched exactly.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.0.get(name)
    }

    /// Returns the number of distinct header names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no headers were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A raw response captured from the transport.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers.
    pub headers: ResponseHeaders,
    /// The raw response body.
    pub body: String,
    /// Wall-clock time around the request, in seconds.
    #[serde(skip)]
    pub duration: f64,
}

impl HttpResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(code: u16, headers: ResponseHeaders, body: String, duration: f64) -> Self {
        Self {
            code,
            headers,
            body,
            duration,
        }
    }

    /// Returns `true` for the statuses treated as success: 200, 201 and 202.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.code, 200..=202)
    }

    /// Decodes the body after [`repair`](extract_json_object).
    #[must_use]
    pub fn parsed_body(&self) -> Option<serde_json::Value> {
        extract_json_object(&self.body)
    }
}

/// Decodes the substring between the first `{` and the last `}` of `raw`.
///
/// Plugins and caches sometimes print warnings or HTML comments around the
/// JSON payload; only the outermost object is decoded. Returns `None` when
/// no such substring decodes.
///
/// ```rust
/// use woocommerce_api::clients::extract_json_object;
///
/// let value = extract_json_object("<!-- cache notice -->{\"foo\":1}").unwrap();
/// assert_eq!(value, serde_json::json!({"foo": 1}));
/// assert!(extract_json_object("not json at all").is_none());
/// ```
#[must_use]
pub fn extract_json_object(raw: &str) -> Option<serde_json::Value> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&raw[start..=end]).ok()
}
