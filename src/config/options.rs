//! Client options.
//!
//! Options can be set through [`ClientConfigBuilder`](super::ClientConfigBuilder)
//! or read from a JSON object with [`ClientOptions::from_value`]. Unknown keys
//! are ignored.

use serde::{Deserialize, Serialize};

use crate::auth::oauth::HashAlgorithm;
use crate::error::ConfigError;

/// Default connect/read timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Tunable client behavior.
///
/// # Defaults
///
/// - `debug`: `false`
/// - `return_as_array`: `false`
/// - `validate_url`: `false`
/// - `timeout`: 30 seconds (`0` disables the timeout)
/// - `ssl_verify`: `false`
/// - `hash_algorithm`: [`HashAlgorithm::Sha256`]
///
/// # Example
///
/// ```rust
/// use woocommerce_api::ClientOptions;
///
/// let options = ClientOptions::from_value(serde_json::json!({
///     "debug": true,
///     "timeout": 10,
///     "unknown_key": "ignored",
/// }))
/// .unwrap();
///
/// assert!(options.debug);
/// assert_eq!(options.timeout, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Include the request/response envelope in successful results.
    #[serde(alias = "verbose_mode")]
    pub debug: bool,
    /// Associative decode mode. Both modes decode to `serde_json::Value`.
    pub return_as_array: bool,
    /// Probe the API index when connecting.
    pub validate_url: bool,
    /// Connect and read timeout, in seconds.
    pub timeout: u64,
    /// Verify the remote TLS certificate.
    pub ssl_verify: bool,
    /// Hash used for OAuth 1.0a signatures.
    pub hash_algorithm: HashAlgorithm,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            debug: false,
            return_as_array: false,
            validate_url: false,
            timeout: DEFAULT_TIMEOUT_SECS,
            ssl_verify: false,
            hash_algorithm: HashAlgorithm::default(),
        }
    }
}

impl ClientOptions {
    /// Reads options from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOptions`] if a recognized key has a value
    /// of the wrong type, or if `value` is not an object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidOptions {
            reason: e.to_string(),
        })
    }
}
