//! OAuth 1.0a one-legged signing for requests over insecure transports.
//!
//! There is no token exchange: each request is signed directly with the
//! long-lived consumer secret.
//!
//! - [`normalize`]: RFC 3986 parameter normalization
//! - [`OAuthSigner`]: adds `oauth_*` parameters and the signature to a request
//! - [`generate_signature`]: the HMAC signature over the signature base string

pub mod normalize;
mod signature;

pub use signature::{
    generate_signature, signature_base_string, time_based_nonce, HashAlgorithm, OAuthSigner,
};
