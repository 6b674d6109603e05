//! Configuration types for the WooCommerce API client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: store URL, credentials and options for a client
//! - [`ClientConfigBuilder`]: a builder for constructing [`ClientConfig`] instances
//! - [`ClientOptions`]: debug, timeout, TLS and signing options
//! - [`ConsumerKey`], [`ConsumerSecret`], [`StoreUrl`]: validated newtypes
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::{ClientConfig, ConsumerKey, ConsumerSecret, StoreUrl};
//!
//! let config = ClientConfig::builder()
//!     .store_url(StoreUrl::new("https://example.com").unwrap())
//!     .consumer_key(ConsumerKey::new("ck_abc").unwrap())
//!     .consumer_secret(ConsumerSecret::new("cs_abc").unwrap())
//!     .timeout(10)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_url(), "https://example.com/wc-api/v2/");
//! ```

mod newtypes;
mod options;

pub use newtypes::{ConsumerKey, ConsumerSecret, StoreUrl, API_PATH};
pub use options::{ClientOptions, DEFAULT_TIMEOUT_SECS};

use crate::auth::oauth::HashAlgorithm;
use crate::auth::Credentials;
use crate::error::ConfigError;

/// Configuration for a WooCommerce API client.
///
/// Immutable once built; `Clone`, `Send` and `Sync`.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    store_url: StoreUrl,
    credentials: Credentials,
    options: ClientOptions,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Builds a configuration from raw strings and a JSON options object.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the URL or credentials are invalid, or
    /// if the options cannot be read.
    ///
    /// # Example
    ///
    /// ```rust
    /// use woocommerce_api::ClientConfig;
    ///
    /// let config = ClientConfig::from_parts(
    ///     "http://localhost/demo/",
    ///     "ck_abc",
    ///     "cs_abc",
    ///     serde_json::json!({"debug": true}),
    /// )
    /// .unwrap();
    /// assert!(config.options().debug);
    /// ```
    pub fn from_parts(
        store_url: &str,
        consumer_key: &str,
        consumer_secret: &str,
        options: serde_json::Value,
    ) -> Result<Self, ConfigError> {
        Self::builder()
            .store_url(StoreUrl::new(store_url)?)
            .consumer_key(ConsumerKey::new(consumer_key)?)
            .consumer_secret(ConsumerSecret::new(consumer_secret)?)
            .options(ClientOptions::from_value(options)?)
            .build()
    }

    /// Returns the store URL.
    #[must_use]
    pub const fn store_url(&self) -> &StoreUrl {
        &self.store_url
    }

    /// Returns the API credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the client options.
    #[must_use]
    pub const fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Returns the API URL derived from the store URL.
    #[must_use]
    pub fn api_url(&self) -> String {
        self.store_url.api_url()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// `store_url`, `consumer_key` and `consumer_secret` are required. Options
/// default to [`ClientOptions::default`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    store_url: Option<StoreUrl>,
    consumer_key: Option<ConsumerKey>,
    consumer_secret: Option<ConsumerSecret>,
    options: ClientOptions,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store URL (required).
    #[must_use]
    pub fn store_url(mut self, url: StoreUrl) -> Self {
        self.store_url = Some(url);
        self
    }

    /// Sets the consumer key (required).
    #[must_use]
    pub fn consumer_key(mut self, key: ConsumerKey) -> Self {
        self.consumer_key = Some(key);
        self
    }

    /// Sets the consumer secret (required).
    #[must_use]
    pub fn consumer_secret(mut self, secret: ConsumerSecret) -> Self {
        self.consumer_secret = Some(secret);
        self
    }

    /// Replaces all options at once.
    #[must_use]
    pub fn options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    /// Includes the request/response envelope in successful results.
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.options.debug = debug;
        self
    }

    /// Sets the associative decode mode.
    #[must_use]
    pub const fn return_as_array(mut self, as_array: bool) -> Self {
        self.options.return_as_array = as_array;
        self
    }

    /// Probes the API index when connecting.
    #[must_use]
    pub const fn validate_url(mut self, validate: bool) -> Self {
        self.options.validate_url = validate;
        self
    }

    /// Sets the connect/read timeout in seconds. `0` disables it.
    #[must_use]
    pub const fn timeout(mut self, seconds: u64) -> Self {
        self.options.timeout = seconds;
        self
    }

    /// Enables or disables TLS certificate verification.
    #[must_use]
    pub const fn ssl_verify(mut self, verify: bool) -> Self {
        self.options.ssl_verify = verify;
        self
    }

    /// Sets the OAuth signature hash.
    #[must_use]
    pub const fn hash_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.options.hash_algorithm = algorithm;
        self
    }

    /// Builds the [`ClientConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if the store URL or
    /// either credential is missing.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let store_url = self
            .store_url
            .ok_or(ConfigError::MissingRequiredField { field: "store_url" })?;
        let consumer_key = self.consumer_key.ok_or(ConfigError::MissingRequiredField {
            field: "consumer_key",
        })?;
        let consumer_secret = self
            .consumer_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_secret",
            })?;

        Ok(ClientConfig {
            store_url,
            credentials: Credentials::new(consumer_key, consumer_secret),
            options: self.options,
        })
    }
}
