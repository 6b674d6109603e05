//! # WooCommerce API Rust Client
//!
//! A Rust client for the WooCommerce REST API (`/wc-api/v2/`), handling
//! authentication, transport and error decoding so endpoint code only has to
//! say what it wants.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for the store URL and API credentials
//! - Per-request authentication: plain consumer key/secret query parameters
//!   over https, OAuth 1.0a one-legged signing over http ([`auth`])
//! - An async dispatcher with JSON body repair and typed errors ([`clients`])
//! - Endpoint builders for orders, products, customers and more ([`rest`])
//!
//! ## Quick Start
//!
//! ```rust
//! use woocommerce_api::{ClientConfig, ConsumerKey, ConsumerSecret, StoreUrl};
//!
//! let config = ClientConfig::builder()
//!     .store_url(StoreUrl::new("https://example.com").unwrap())
//!     .consumer_key(ConsumerKey::new("ck_abc").unwrap())
//!     .consumer_secret(ConsumerSecret::new("cs_abc").unwrap())
//!     .debug(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_url(), "https://example.com/wc-api/v2/");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use woocommerce_api::{ApiError, ClientConfig, WooCommerceClient};
//! use woocommerce_api::clients::ParameterSet;
//! use serde_json::json;
//!
//! let config = ClientConfig::from_parts(
//!     "http://example.com",
//!     "ck_abc",
//!     "cs_abc",
//!     json!({"validate_url": true, "timeout": 10}),
//! )?;
//! let client = WooCommerceClient::connect(config).await?;
//!
//! let params = ParameterSet::new().with_nested("filter", "limit", "5");
//! let orders = client.orders.get(None::<u64>, Some(params)).await?;
//!
//! match client.orders.get(Some(404), None).await {
//!     Ok(order) => println!("{}", order.data),
//!     Err(ApiError::Application(e)) => println!("{} ({})", e, e.status),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden retries**: One request per call; errors go straight to the caller

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::oauth::HashAlgorithm;
pub use auth::{AuthMode, Credentials};
pub use config::{
    ClientConfig, ClientConfigBuilder, ClientOptions, ConsumerKey, ConsumerSecret, StoreUrl,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiClient, ApiError, ApiResponse, ApplicationError, HttpExchange, HttpMethod, ParameterSet,
    ParseError, RequestData, ValidationError,
};

pub use rest::WooCommerceClient;
