//! OAuth 1.0a one-legged request signing.
//!
//! The signature must match the server-side verifier byte for byte:
//!
//! 1. The request URL is percent-encoded (RFC 3986).
//! 2. Nested parameters such as `filter` are flattened to `filter[<key>]`.
//! 3. Keys and values are normalized, then every `%` is escaped to `%25`.
//! 4. Entries are sorted by key using byte-wise comparison.
//! 5. Pairs are joined with `%3D`, and all pairs with `%26`.
//! 6. The base string is `METHOD&<encoded url>&<query string>`.
//! 7. The base string is signed with HMAC using the consumer secret as key,
//!    and the raw digest is base64 encoded.

use base64::prelude::*;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use sha2::Sha256;
use std::fmt;

use crate::auth::oauth::normalize::{escape_percent, normalize_parameters};
use crate::auth::Credentials;
use crate::clients::{HttpMethod, ParameterSet};

type HmacSha256 = Hmac<Sha256>;
type HmacSha1 = Hmac<Sha1>;

/// Hash function used for HMAC signatures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// HMAC-SHA256, the default.
    #[default]
    #[serde(rename = "SHA256", alias = "sha256")]
    Sha256,
    /// HMAC-SHA1, accepted for older servers.
    #[serde(rename = "SHA1", alias = "sha1")]
    Sha1,
}

impl HashAlgorithm {
    /// Returns the `oauth_signature_method` value, e.g. `HMAC-SHA256`.
    #[must_use]
    pub const fn signature_method(self) -> &'static str {
        match self {
            Self::Sha256 => "HMAC-SHA256",
            Self::Sha1 => "HMAC-SHA1",
        }
    }

    /// Computes the raw HMAC digest of `message`.
    #[must_use]
    #[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
    pub fn hmac(self, key: &[u8], message: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => {
                let mut mac =
                    HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
                mac.update(message);
                mac.finalize().into_bytes().to_vec()
            }
            Self::Sha1 => {
                let mut mac =
                    HmacSha1::new_from_slice(key).expect("HMAC can take key of any size");
                mac.update(message);
                mac.finalize().into_bytes().to_vec()
            }
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha256 => f.write_str("SHA256"),
            Self::Sha1 => f.write_str("SHA1"),
        }
    }
}

/// Builds the signature base string for a request.
#[must_use]
pub fn signature_base_string(url: &str, http_method: HttpMethod, params: &ParameterSet) -> String {
    let base_request_uri = urlencoding::encode(url);

    let mut normalized: Vec<(String, String)> = normalize_parameters(&params.flatten())
        .into_iter()
        .map(|(key, value)| (escape_percent(&key), escape_percent(&value)))
        .collect();
    normalized.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    let query_string = normalized
        .iter()
        .map(|(key, value)| format!("{key}%3D{value}"))
        .collect::<Vec<_>>()
        .join("%26");

    format!("{}&{base_request_uri}&{query_string}", http_method.as_str())
}

/// Computes the base64 encoded OAuth signature for a request.
///
/// `params` must already contain every `oauth_*` parameter except
/// `oauth_signature`.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::auth::oauth::{generate_signature, HashAlgorithm};
/// use woocommerce_api::clients::{HttpMethod, ParameterSet};
///
/// let url = "http://example.com/wc-api/v2/orders";
/// let params = ParameterSet::new().with("oauth_nonce", "abc");
/// let a = generate_signature(url, HttpMethod::Get, "cs", &params, HashAlgorithm::Sha256);
/// let b = generate_signature(url, HttpMethod::Get, "cs", &params, HashAlgorithm::Sha256);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 44);
/// ```
#[must_use]
pub fn generate_signature(
    url: &str,
    http_method: HttpMethod,
    consumer_secret: &str,
    params: &ParameterSet,
    algorithm: HashAlgorithm,
) -> String {
    let base = signature_base_string(url, http_method, params);
    BASE64_STANDARD.encode(algorithm.hmac(consumer_secret.as_bytes(), base.as_bytes()))
}

/// Generates an `oauth_nonce` from the current time.
///
/// This is the hex SHA-1 of a microtime-style string (`"<fraction> <seconds>"`),
/// which keeps parity with existing server deployments. It is not a
/// cryptographically strong nonce: two calls within the same microsecond
/// produce the same value.
#[must_use]
pub fn time_based_nonce() -> String {
    let now = Utc::now();
    let micros = now.timestamp_subsec_micros();
    let microtime = format!("0.{micros:06}00 {}", now.timestamp());
    hex::encode(Sha1::digest(microtime.as_bytes()))
}

/// Signs requests for one endpoint URL with a consumer key and secret.
#[derive(Clone, Debug)]
pub struct OAuthSigner<'a> {
    url: &'a str,
    credentials: &'a Credentials,
    algorithm: HashAlgorithm,
}

impl<'a> OAuthSigner<'a> {
    /// Creates a signer for the given endpoint URL.
    #[must_use]
    pub const fn new(url: &'a str, credentials: &'a Credentials, algorithm: HashAlgorithm) -> Self {
        Self {
            url,
            credentials,
            algorithm,
        }
    }

    /// Returns `params` merged with the `oauth_*` parameters and signature,
    /// using the current time and a time-based nonce.
    #[must_use]
    pub fn oauth_params(&self, params: &ParameterSet, http_method: HttpMethod) -> ParameterSet {
        self.oauth_params_with(
            params,
            http_method,
            Utc::now().timestamp(),
            &time_based_nonce(),
        )
    }

    /// Like [`oauth_params`](Self::oauth_params) with a fixed timestamp and nonce.
    #[must_use]
    pub fn oauth_params_with(
        &self,
        params: &ParameterSet,
        http_method: HttpMethod,
        timestamp: i64,
        nonce: &str,
    ) -> ParameterSet {
        let mut signed = params.clone();
        signed.insert("oauth_consumer_key", self.credentials.consumer_key().as_str());
        signed.insert("oauth_timestamp", timestamp.to_string());
        signed.insert("oauth_nonce", nonce);
        signed.insert("oauth_signature_method", self.algorithm.signature_method());

        let signature = generate_signature(
            self.url,
            http_method,
            self.credentials.consumer_secret().as_str(),
            &signed,
            self.algorithm,
        );
        signed.insert("oauth_signature", signature);
        signed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConsumerKey, ConsumerSecret};

    const URL: &str = "http://example.com/wc-api/v2/orders";

    fn credentials() -> Credentials {
        Credentials::new(
            ConsumerKey::new("ck_test").unwrap(),
            ConsumerSecret::new("cs_test").unwrap(),
        )
    }

    fn fixed_params() -> ParameterSet {
        ParameterSet::new()
            .with("oauth_consumer_key", "ck_test")
            .with("oauth_timestamp", "1400000000")
            .with("oauth_nonce", "nonce")
            .with("oauth_signature_method", "HMAC-SHA256")
    }

    fn sign(params: &ParameterSet, method: HttpMethod) -> String {
        generate_signature(URL, method, "cs_test", params, HashAlgorithm::Sha256)
    }

    #[test]
    fn test_base_string_layout() {
        let params = ParameterSet::new().with("b", "2").with("a", "1");
        let base = signature_base_string(URL, HttpMethod::Get, &params);
        assert_eq!(
            base,
            "GET&http%3A%2F%2Fexample.com%2Fwc-api%2Fv2%2Forders&a%3D1%26b%3D2"
        );
    }

    #[test]
    fn test_base_string_sorts_bytewise() {
        let params = ParameterSet::new()
            .with("b", "1")
            .with("a", "1")
            .with("oauth_signature_method", "1")
            .with("A", "1");
        let base = signature_base_string(URL, HttpMethod::Get, &params);
        let query = base.rsplit('&').next().unwrap();
        assert_eq!(query, "A%3D1%26a%3D1%26b%3D1%26oauth_signature_method%3D1");
    }

    #[test]
    fn test_base_string_flattens_filter() {
        let params = ParameterSet::new()
            .with_nested("filter", "period", "week")
            .with("a", "1");
        let base = signature_base_string(URL, HttpMethod::Get, &params);
        assert!(base.ends_with("&a%3D1%26filter%255Bperiod%255D%3Dweek"));
    }

    #[test]
    fn test_base_string_double_encodes_percent_once() {
        let params = ParameterSet::new().with("discount", "100%");
        let base = signature_base_string(URL, HttpMethod::Get, &params);
        assert!(base.ends_with("&discount%3D100%2525"));
    }

    #[test]
    fn test_signature_is_deterministic() {
        let params = fixed_params();
        assert_eq!(sign(&params, HttpMethod::Get), sign(&params, HttpMethod::Get));
    }

    #[test]
    fn test_signature_matches_manual_hmac() {
        let params = ParameterSet::new().with("a", "1");
        let base = "GET&http%3A%2F%2Fexample.com%2Fwc-api%2Fv2%2Forders&a%3D1";
        let expected =
            BASE64_STANDARD.encode(HashAlgorithm::Sha256.hmac(b"secret", base.as_bytes()));
        assert_eq!(
            generate_signature(URL, HttpMethod::Get, "secret", &params, HashAlgorithm::Sha256),
            expected
        );
    }

    #[test]
    fn test_changing_any_value_changes_signature() {
        let base = fixed_params();
        let original = sign(&base, HttpMethod::Get);

        for key in ["oauth_consumer_key", "oauth_timestamp", "oauth_nonce"] {
            let changed = base.clone().with(key, "different");
            assert_ne!(
                sign(&changed, HttpMethod::Get),
                original,
                "changing {key} should change the signature"
            );
        }

        assert_ne!(sign(&base, HttpMethod::Post), original);
    }

    #[test]
    fn test_sha1_signatures_are_shorter() {
        let params = fixed_params();
        let sha256 = generate_signature(URL, HttpMethod::Get, "cs", &params, HashAlgorithm::Sha256);
        let sha1 = generate_signature(URL, HttpMethod::Get, "cs", &params, HashAlgorithm::Sha1);
        assert_eq!(sha256.len(), 44);
        assert_eq!(sha1.len(), 28);
    }

    #[test]
    fn test_signer_adds_oauth_params() {
        let credentials = credentials();
        let signer = OAuthSigner::new(URL, &credentials, HashAlgorithm::Sha256);
        let params = ParameterSet::new().with("status", "completed");

        let signed = signer.oauth_params_with(&params, HttpMethod::Get, 1_400_000_000, "abc");

        assert_eq!(signed.get_str("status"), Some("completed"));
        assert_eq!(signed.get_str("oauth_consumer_key"), Some("ck_test"));
        assert_eq!(signed.get_str("oauth_timestamp"), Some("1400000000"));
        assert_eq!(signed.get_str("oauth_nonce"), Some("abc"));
        assert_eq!(signed.get_str("oauth_signature_method"), Some("HMAC-SHA256"));

        let mut unsigned = signed.clone();
        let signature = unsigned.remove("oauth_signature").unwrap();
        assert_eq!(
            signature.as_str(),
            Some(sign(&unsigned, HttpMethod::Get).as_str())
        );
    }

    #[test]
    fn test_signer_uses_legacy_method_name() {
        let credentials = credentials();
        let signer = OAuthSigner::new(URL, &credentials, HashAlgorithm::Sha1);
        let signed = signer.oauth_params(&ParameterSet::new(), HttpMethod::Delete);
        assert_eq!(signed.get_str("oauth_signature_method"), Some("HMAC-SHA1"));
        assert_eq!(signed.len(), 5);
    }

    #[test]
    fn test_time_based_nonce_is_sha1_hex() {
        let nonce = time_based_nonce();
        assert_eq!(nonce.len(), 40);
        assert!(nonce.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_algorithm_display() {
        assert_eq!(HashAlgorithm::Sha256.to_string(), "SHA256");
        assert_eq!(HashAlgorithm::Sha1.to_string(), "SHA1");
    }
}
