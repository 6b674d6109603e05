//! Integration tests for the API index probe and client construction.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use woocommerce_api::clients::{ApiClient, ApiError, ValidationError};
use woocommerce_api::{ClientConfig, WooCommerceClient};

fn config(server: &MockServer, options: serde_json::Value) -> ClientConfig {
    ClientConfig::from_parts(&server.uri(), "ck_x", "cs_y", options).unwrap()
}

async fn mount_index(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/wc-api/v2/"))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_probe_accepts_valid_index() {
    let server = MockServer::start().await;
    mount_index(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "store": {"name": "Demo", "URL": "http://demo.example", "meta": {"ssl_enabled": false}}
        })),
    )
    .await;

    let mut client = ApiClient::new(config(&server, json!({})));
    client.validate_api_url().await.unwrap();

    assert_eq!(client.api_url(), format!("{}/wc-api/v2/", server.uri()));
}

#[tokio::test]
async fn test_probe_upgrades_to_https_when_store_reports_https() {
    let server = MockServer::start().await;
    mount_index(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "store": {"URL": "https://demo.example", "meta": {"ssl_enabled": true}}
        })),
    )
    .await;

    let mut client = ApiClient::new(config(&server, json!({})));
    client.validate_api_url().await.unwrap();

    assert!(client.api_url().starts_with("https://"));
    assert!(client.api_url().ends_with("/wc-api/v2/"));
}

#[tokio::test]
async fn test_probe_repairs_index_body() {
    let server = MockServer::start().await;
    mount_index(
        &server,
        ResponseTemplate::new(200)
            .set_body_string("{\"store\":{\"URL\":\"http://demo.example\"}}<!-- page cached -->"),
    )
    .await;

    let mut client = ApiClient::new(config(&server, json!({})));
    assert!(client.validate_api_url().await.is_ok());
}

#[tokio::test]
async fn test_probe_not_found() {
    let server = MockServer::start().await;
    mount_index(&server, ResponseTemplate::new(404)).await;

    let mut client = ApiClient::new(config(&server, json!({})));
    let error = client.validate_api_url().await.unwrap_err();

    assert!(matches!(error, ValidationError::NotFound { .. }));
    assert_eq!(error.status_code(), 404);
    assert!(error.to_string().contains("pretty permalinks"));
}

#[tokio::test]
async fn test_probe_legacy_server() {
    let server = MockServer::start().await;
    mount_index(&server, ResponseTemplate::new(200).set_body_string("1")).await;

    let mut client = ApiClient::new(config(&server, json!({})));
    let error = client.validate_api_url().await.unwrap_err();

    assert!(matches!(error, ValidationError::UnsupportedVersion { .. }));
}

#[tokio::test]
async fn test_probe_corrupt_index() {
    let server = MockServer::start().await;
    mount_index(
        &server,
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    let mut client = ApiClient::new(config(&server, json!({})));
    let error = client.validate_api_url().await.unwrap_err();

    assert!(matches!(error, ValidationError::CorruptIndex { .. }));
}

#[tokio::test]
async fn test_connect_runs_probe_when_enabled() {
    let server = MockServer::start().await;
    mount_index(&server, ResponseTemplate::new(404)).await;

    let result = WooCommerceClient::connect(config(&server, json!({"validate_url": true}))).await;

    assert!(matches!(
        result,
        Err(ApiError::Validation(ValidationError::NotFound { .. }))
    ));
}

#[tokio::test]
async fn test_connect_skips_probe_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = WooCommerceClient::connect(config(&server, json!({}))).await.unwrap();

    assert_eq!(
        client.api_client().api_url(),
        format!("{}/wc-api/v2/", server.uri())
    );
}
