//! Parameter normalization for OAuth 1.0a signatures.
//!
//! Every key and value is assumed to possibly be percent-encoded already, so it
//! is decoded first and then re-encoded according to RFC 3986 (`rawurlencode`
//! semantics: unreserved characters are kept, space becomes `%20`). The
//! result is idempotent: normalizing an already normalized string returns it
//! unchanged.
//!
//! The signature base string additionally requires every `%` produced by this
//! encoding to be escaped once more (`%` to `%25`); see [`escape_percent`].
//!
//! ```rust
//! use woocommerce_api::auth::oauth::normalize::{escape_percent, normalize};
//!
//! assert_eq!(normalize("filter[period]"), "filter%5Bperiod%5D");
//! assert_eq!(escape_percent(&normalize("a b")), "a%2520b");
//! ```

/// Decodes `input` and re-encodes it per RFC 3986.
///
/// Invalid escape sequences are kept literally on decode, so a bare `%`
/// becomes `%25`.
#[must_use]
pub fn normalize(input: &str) -> String {
    let decoded = urlencoding::decode_binary(input.as_bytes());
    urlencoding::encode_binary(&decoded).into_owned()
}

/// Escapes every `%` as `%25`.
#[must_use]
pub fn escape_percent(input: &str) -> String {
    input.replace('%', "%25")
}

/// Normalizes every key and value of a flattened parameter list.
///
/// Input order is preserved; callers sort afterwards.
#[must_use]
pub fn normalize_parameters(params: &[(String, String)]) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(key, value)| (normalize(key), normalize(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_space_is_encoded_as_percent_20() {
        assert_eq!(normalize("hello world"), "hello%20world");
        assert_eq!(normalize("a+b"), "a%2Bb");
    }

    #[test]
    fn test_unreserved_characters_are_kept() {
        assert_eq!(normalize("AZaz09-._~"), "AZaz09-._~");
    }

    #[test]
    fn test_existing_encoding_is_decoded_first() {
        assert_eq!(normalize("hello%20world"), "hello%20world");
        assert_eq!(normalize("filter%5Bperiod%5D"), "filter%5Bperiod%5D");
    }

    #[test]
    fn test_bare_percent_is_encoded_once() {
        assert_eq!(normalize("100%"), "100%25");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for input in ["100%", "a b", "filter[period]", "ü€", "x%2Fy", "50%off"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input}");
        }
    }

    #[test]
    fn test_escape_percent_applies_once() {
        assert_eq!(escape_percent(&normalize("100%")), "100%2525");
        assert_eq!(escape_percent("plain"), "plain");
    }

    #[test]
    fn test_multibyte_characters_are_encoded_as_utf8() {
        assert_eq!(normalize("é"), "%C3%A9");
    }

    #[test]
    fn test_normalize_parameters_covers_keys_and_values() {
        let normalized =
            normalize_parameters(&pairs(&[("filter[limit]", "10"), ("q", "red shirt")]));
        assert_eq!(
            normalized,
            pairs(&[("filter%5Blimit%5D", "10"), ("q", "red%20shirt")])
        );
    }
}
