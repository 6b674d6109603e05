//! Authentication for WooCommerce API requests.
//!
//! Two schemes are supported, chosen per request from the endpoint URL:
//!
//! - Over https the consumer key and secret travel as plain `consumer_key`
//!   and `consumer_secret` query parameters. HTTP Basic Auth headers are
//!   dropped by some server and proxy setups, so they are not used.
//! - Over plain http the request is signed with OAuth 1.0a, see [`oauth`].
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::auth::AuthMode;
//!
//! assert_eq!(AuthMode::for_url("https://example.com/wc-api/v2/orders"), AuthMode::QueryParams);
//! assert_eq!(AuthMode::for_url("http://example.com/wc-api/v2/orders"), AuthMode::OAuthSigned);
//! ```

pub mod oauth;

use crate::config::{ConsumerKey, ConsumerSecret};

/// Consumer key and secret used to authenticate every request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
}

impl Credentials {
    /// Creates credentials from a validated key and secret.
    #[must_use]
    pub const fn new(consumer_key: ConsumerKey, consumer_secret: ConsumerSecret) -> Self {
        Self {
            consumer_key,
            consumer_secret,
        }
    }

    /// Returns the consumer key.
    #[must_use]
    pub const fn consumer_key(&self) -> &ConsumerKey {
        &self.consumer_key
    }

    /// Returns the consumer secret.
    #[must_use]
    pub const fn consumer_secret(&self) -> &ConsumerSecret {
        &self.consumer_secret
    }
}

/// How a request is authenticated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    /// Append `consumer_key` and `consumer_secret` as query parameters.
    QueryParams,
    /// Sign the request with OAuth 1.0a.
    OAuthSigned,
}

impl AuthMode {
    /// Picks the auth mode for an endpoint URL.
    ///
    /// The check is a case-sensitive `https` prefix match.
    #[must_use]
    pub fn for_url(url: &str) -> Self {
        if url.starts_with("https") {
            Self::QueryParams
        } else {
            Self::OAuthSigned
        }
    }
}
