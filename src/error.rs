//! Error types for the WooCommerce API client.
//!
//! This module contains the configuration error type raised while building
//! a client. Configuration errors are fatal: they are returned immediately
//! from constructors and never retried.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::{ConsumerKey, ConfigError};
//!
//! let result = ConsumerKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyConsumerKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Consumer key cannot be empty.
    #[error("Consumer key cannot be empty. Please provide a valid WooCommerce consumer key.")]
    EmptyConsumerKey,

    /// Consumer secret cannot be empty.
    #[error(
        "Consumer secret cannot be empty. Please provide a valid WooCommerce consumer secret."
    )]
    EmptyConsumerSecret,

    /// Store URL is invalid.
    #[error("Invalid store URL '{url}'. Expected a URL such as 'https://www.example.com'.")]
    InvalidStoreUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Client options could not be read.
    #[error("Invalid client options: {reason}")]
    InvalidOptions {
        /// The reason the options were rejected.
        reason: String,
    },
}
