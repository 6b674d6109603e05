//! Path building for endpoint builders.
//!
//! Paths are relative to the API URL: an endpoint such as `orders` followed
//! by zero or more segments, joined with `/`. Empty segments are skipped, so
//! an absent ID does not leave a double or trailing slash.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::rest::{build_path, encode_segment, segment};
//!
//! assert_eq!(build_path("orders", &["166".to_string()]), "orders/166");
//! assert_eq!(build_path("orders", &[segment(None::<u64>)]), "orders");
//! assert_eq!(
//!     build_path("coupons", &["code".to_string(), encode_segment("10% OFF")]),
//!     "coupons/code/10%25%20OFF"
//! );
//! ```

use std::fmt::Display;

/// Joins `endpoint` and `segments` with `/`, skipping empty parts.
#[must_use]
pub fn build_path(endpoint: &str, segments: &[String]) -> String {
    std::iter::once(endpoint)
        .chain(segments.iter().map(String::as_str))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Formats an optional ID as a path segment; `None` becomes an empty segment.
#[must_use]
pub fn segment(id: Option<impl Display>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

/// Percent-encodes a free-form value (a coupon code, an email, a SKU) for
/// use as a single path segment.
#[must_use]
pub fn encode_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
