//! Integration tests for request dispatch.
//!
//! These tests run against a local mock server over plain http, so every
//! request goes through the OAuth 1.0a signing path.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use woocommerce_api::auth::oauth::{generate_signature, HashAlgorithm};
use woocommerce_api::clients::{
    ApiClient, ApiError, HttpMethod, ParameterSet, ParseErrorKind, RequestData, SDK_VERSION,
};
use woocommerce_api::ClientConfig;

fn client(server: &MockServer, options: serde_json::Value) -> ApiClient {
    let config = ClientConfig::from_parts(&server.uri(), "ck_x", "cs_y", options).unwrap();
    ApiClient::new(config)
}

// ============================================================================
// Success Path
// ============================================================================

#[tokio::test]
async fn test_get_returns_decoded_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wc-api/v2/orders/166"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"order": {"id": 166}})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server, json!({}))
        .make_api_call(HttpMethod::Get, "orders/166", RequestData::none())
        .await
        .unwrap();

    assert_eq!(response.data["order"]["id"], 166);
    assert!(response.http.is_none());
}

#[tokio::test]
async fn test_created_and_accepted_are_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wc-api/v2/orders"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"order": {"id": 1}})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/wc-api/v2/products/bulk"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"products": []})))
        .mount(&server)
        .await;

    let client = client(&server, json!({}));
    let created = client
        .make_api_call(HttpMethod::Post, "orders", RequestData::body(json!({"order": {}})))
        .await
        .unwrap();
    let accepted = client
        .make_api_call(HttpMethod::Put, "products/bulk", RequestData::body(json!({"products": []})))
        .await
        .unwrap();

    assert_eq!(created.data["order"]["id"], 1);
    assert_eq!(accepted.data, json!({"products": []}));
}

#[tokio::test]
async fn test_sends_fixed_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .and(header(
            "User-Agent",
            format!("WooCommerce API Client-Rust/{SDK_VERSION}").as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server, json!({}))
        .make_api_call(HttpMethod::Get, "orders", RequestData::none())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_body_repair_strips_noise() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<!-- cache notice -->{\"foo\":1}\n<!-- end -->"),
        )
        .mount(&server)
        .await;

    let response = client(&server, json!({}))
        .make_api_call(HttpMethod::Get, "orders", RequestData::none())
        .await
        .unwrap();

    assert_eq!(response.data, json!({"foo": 1}));
}

// ============================================================================
// Debug Envelope
// ============================================================================

#[tokio::test]
async fn test_debug_mode_attaches_exchange() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-WC-Total", "3")
                .set_body_json(json!({"orders": []})),
        )
        .mount(&server)
        .await;

    let params = ParameterSet::new().with("status", "processing");
    let response = client(&server, json!({"debug": true}))
        .make_api_call(HttpMethod::Get, "orders", RequestData::params(params))
        .await
        .unwrap();

    let http = response.http.expect("debug envelope");
    assert_eq!(http.request.method, HttpMethod::Get);
    assert!(http.request.url.contains("status=processing"));
    assert!(http.request.url.contains("oauth_signature="));
    assert_eq!(http.request.params.get_str("status"), Some("processing"));
    assert!(http.request.body.is_none());
    assert!(http
        .request
        .headers
        .iter()
        .any(|h| h.starts_with("User-Agent: WooCommerce API Client-Rust/")));
    assert!(http.request.duration >= 0.0);
    assert_eq!(http.response.code, 200);
    assert_eq!(http.response.headers.get("x-wc-total").unwrap().first(), "3");

    let envelope = serde_json::to_value(&http).unwrap();
    assert_eq!(envelope["request"]["method"], "GET");
    assert_eq!(envelope["response"]["code"], 200);
}

#[tokio::test]
async fn test_verbose_mode_alias_enables_debug() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let response = client(&server, json!({"verbose_mode": true}))
        .make_api_call(HttpMethod::Get, "orders", RequestData::none())
        .await
        .unwrap();

    assert!(response.http.is_some());
}

// ============================================================================
// Error Decoding
// ============================================================================

#[tokio::test]
async fn test_not_found_is_application_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": {"message": "Not found", "code": "woocommerce_api_no_route"}
        })))
        .mount(&server)
        .await;

    let result = client(&server, json!({}))
        .make_api_call(HttpMethod::Get, "nope", RequestData::none())
        .await;

    let Err(ApiError::Application(error)) = result else {
        panic!("expected application error");
    };
    assert_eq!(error.status, 404);
    assert!(error.to_string().contains("Not found"));
    assert!(error.to_string().contains("woocommerce_api_no_route"));

    let context = error.context.expect("context");
    assert_eq!(context.response.code, 404);
    assert_eq!(context.request.method, HttpMethod::Get);
}

#[tokio::test]
async fn test_error_list_uses_first_entry() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [
                {"message": "Invalid order status", "code": "woocommerce_api_invalid_order_status"},
                {"message": "Other", "code": "other"}
            ]
        })))
        .mount(&server)
        .await;

    let error = client(&server, json!({}))
        .make_api_call(
            HttpMethod::Put,
            "orders/1",
            RequestData::body(json!({"order": {"status": "bogus"}})),
        )
        .await
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "Error: Invalid order status [woocommerce_api_invalid_order_status]"
    );
    assert_eq!(error.status_code(), Some(400));
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let error = client(&server, json!({}))
        .make_api_call(HttpMethod::Get, "orders", RequestData::none())
        .await
        .unwrap_err();

    let ApiError::Parse(error) = error else {
        panic!("expected parse error");
    };
    assert_eq!(error.kind, ParseErrorKind::InvalidJson);
    assert_eq!(error.status, 200);
    assert_eq!(error.raw_body, "not json at all");
    assert!(error.to_string().contains("/wc-api/v2/orders"));
}

#[tokio::test]
async fn test_error_without_errors_field_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;

    let error = client(&server, json!({}))
        .make_api_call(HttpMethod::Get, "orders", RequestData::none())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ApiError::Parse(ref e) if e.kind == ParseErrorKind::MissingErrors && e.status == 500
    ));
}

// ============================================================================
// OAuth Signing
// ============================================================================

#[tokio::test]
async fn test_signed_request_verifies_on_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wc-api/v2/orders"))
        .and(query_param("oauth_consumer_key", "ck_x"))
        .and(query_param("oauth_signature_method", "HMAC-SHA256"))
        .and(query_param("filter[limit]", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .expect(1)
        .mount(&server)
        .await;

    let params = ParameterSet::new()
        .with("status", "on hold")
        .with_nested("filter", "limit", "5");
    client(&server, json!({}))
        .make_api_call(HttpMethod::Get, "orders", RequestData::params(params))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let received = &requests[0];
    let mut params: ParameterSet = received.url.query_pairs().into_owned().collect();
    let signature = params.remove("oauth_signature").unwrap();

    assert!(!params.contains_key("consumer_secret"));
    assert_eq!(params.get_str("filter[limit]"), Some("5"));

    let url = format!("{}/wc-api/v2/orders", server.uri());
    let expected = generate_signature(&url, HttpMethod::Get, "cs_y", &params, HashAlgorithm::Sha256);
    assert_eq!(signature.as_str(), Some(expected.as_str()));
}

#[tokio::test]
async fn test_put_sends_json_body_and_only_oauth_query() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/wc-api/v2/orders/166"))
        .and(body_json(json!({"order": {"status": "completed"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"order": {"id": 166}})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server, json!({"hash_algorithm": "SHA1"}))
        .make_api_call(
            HttpMethod::Put,
            "orders/166",
            RequestData::body(json!({"order": {"status": "completed"}})),
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let mut keys: Vec<String> = requests[0]
        .url
        .query_pairs()
        .map(|(k, _)| k.into_owned())
        .collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "oauth_consumer_key",
            "oauth_nonce",
            "oauth_signature",
            "oauth_signature_method",
            "oauth_timestamp"
        ]
    );

    let method_param = requests[0]
        .url
        .query_pairs()
        .find(|(k, _)| k == "oauth_signature_method")
        .map(|(_, v)| v.into_owned());
    assert_eq!(method_param.as_deref(), Some("HMAC-SHA1"));
}

#[tokio::test]
async fn test_trailing_slash_is_stripped_before_signing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wc-api/v2/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server, json!({}))
        .make_api_call(HttpMethod::Get, "orders/", RequestData::none())
        .await
        .unwrap();
}

// ============================================================================
// Transport
// ============================================================================

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let error = client(&server, json!({"timeout": 1}))
        .make_api_call(HttpMethod::Get, "orders", RequestData::none())
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Network(ref e) if e.is_timeout()));
}
