//! The API client facade used by every endpoint builder.
//!
//! This module provides [`ApiClient`], which holds the store configuration,
//! joins endpoint paths onto the API URL and hands requests to the
//! [`HttpClient`] dispatcher.

use crate::clients::errors::{ApiError, ValidationError};
use crate::clients::http_client::{ApiResponse, HttpClient};
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestData};
use crate::clients::http_response::extract_json_object;
use crate::config::ClientConfig;

/// Client for the WooCommerce REST API.
///
/// Endpoint builders call [`make_api_call`](Self::make_api_call) with a
/// method, a path relative to the API URL, and the request data.
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync`. Each call builds and drops its own
/// transport, so calls share nothing but the immutable configuration.
///
/// # Example
///
/// ```rust,ignore
/// use woocommerce_api::{ApiClient, ClientConfig};
/// use woocommerce_api::clients::{HttpMethod, ParameterSet, RequestData};
///
/// let config = ClientConfig::from_parts("http://example.com", "ck_abc", "cs_abc", serde_json::Value::Null)?;
/// let client = ApiClient::new(config);
///
/// let params = ParameterSet::new().with("status", "processing");
/// let response = client
///     .make_api_call(HttpMethod::Get, "orders", RequestData::params(params))
///     .await?;
/// println!("{}", response.data);
/// ```
#[derive(Debug)]
pub struct ApiClient {
    config: ClientConfig,
    api_url: String,
    http_client: HttpClient,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a client from a configuration.
    ///
    /// The API URL is derived from the store URL once, here. The
    /// `validate_url` option is not acted on; call
    /// [`validate_api_url`](Self::validate_api_url) to run the probe.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        if !config.options().ssl_verify {
            tracing::warn!(
                "TLS certificate verification is disabled for {}. Set ssl_verify to true for production stores.",
                config.store_url()
            );
        }

        let api_url = config.api_url();
        let http_client = HttpClient::new(config.credentials().clone(), config.options().clone());

        Self {
            config,
            api_url,
            http_client,
        }
    }

    /// Creates a client and runs the validation probe if `validate_url` is set.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if the probe fails.
    pub async fn connect(config: ClientConfig) -> Result<Self, ApiError> {
        let mut client = Self::new(config);
        if client.config.options().validate_url {
            client.validate_api_url().await?;
        }
        Ok(client)
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the API URL, e.g. `https://example.com/wc-api/v2/`.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Sends a request to `path`, relative to the API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request cannot be built, the transport
    /// fails, or the API answers with an error.
    pub async fn make_api_call(
        &self,
        method: HttpMethod,
        path: &str,
        data: RequestData,
    ) -> Result<ApiResponse, ApiError> {
        let endpoint = format!("{}{path}", self.api_url);
        let request = HttpRequest::builder(method, endpoint).data(data).build()?;
        self.http_client.dispatch(request).await
    }

    /// Probes the API index.
    ///
    /// If the index reports an https store URL while the configured API URL
    /// is plain http, the API URL is switched to https for the lifetime of
    /// the client.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if:
    /// - Nothing answered at the API URL with a success status (`NotFound`)
    /// - The server answered `1`, as WooCommerce 2.0 and older do (`UnsupportedVersion`)
    /// - The index is not JSON (`CorruptIndex`)
    pub async fn validate_api_url(&mut self) -> Result<(), ValidationError> {
        let not_found = || ValidationError::NotFound {
            url: self.api_url.clone(),
        };

        let response = self
            .http_client
            .fetch(&self.api_url)
            .await
            .map_err(|_| not_found())?;
        if !(200..300).contains(&response.code) {
            return Err(not_found());
        }

        if response.body == "1" {
            return Err(ValidationError::UnsupportedVersion {
                url: self.api_url.clone(),
            });
        }

        let Some(index) = extract_json_object(&response.body) else {
            return Err(ValidationError::CorruptIndex {
                url: self.api_url.clone(),
            });
        };

        let reported = index
            .pointer("/store/URL")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        if reported.starts_with("https://") && self.api_url.starts_with("http://") {
            let upgraded = self.api_url.replacen("http://", "https://", 1);
            tracing::debug!("Upgrading API URL {} to {}", self.api_url, upgraded);
            self.api_url = upgraded;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn config(url: &str) -> ClientConfig {
        ClientConfig::from_parts(url, "ck_x", "cs_y", serde_json::Value::Null).unwrap()
    }

    #[test]
    fn test_api_url_built_once_from_store_url() {
        let client = ApiClient::new(config("https://example.com/shop/"));
        assert_eq!(client.api_url(), "https://example.com/shop/wc-api/v2/");
    }

    #[tokio::test]
    async fn test_make_api_call_rejects_post_without_body() {
        let client = ApiClient::new(config("http://127.0.0.1:9"));
        let result = client
            .make_api_call(HttpMethod::Post, "orders", RequestData::none())
            .await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_network_error_omits_credentials() {
        let client = ApiClient::new(config("https://127.0.0.1:9"));
        let error = client
            .make_api_call(HttpMethod::Get, "orders", RequestData::none())
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::Network(_)));
        assert!(!error.to_string().contains("cs_y"));
    }

    #[tokio::test]
    async fn test_validate_unreachable_is_not_found() {
        let mut client = ApiClient::new(config("http://127.0.0.1:9"));
        let result = client.validate_api_url().await;
        assert!(matches!(result, Err(ValidationError::NotFound { .. })));
    }
}
