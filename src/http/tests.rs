//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use crate::types::QueryMap;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri(), Credential::bearer("test-token"))
}

#[test]
fn test_api_config_defaults() {
    let config = ApiConfig::new("https://api.example.com");
    assert_eq!(config.base_url, "https://api.example.com");
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("sirenstream/"));
}

#[test]
fn test_api_config_builder() {
    let config = ApiConfig::builder("https://api.example.com")
        .timeout(Duration::from_secs(60))
        .header("X-Tenant", "acme")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.default_headers.get("X-Tenant"), Some(&"acme".to_string()));
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[tokio::test]
async fn test_bearer_credential_applied() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/community"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client
        .request_bytes(reqwest::Method::GET, "community", &QueryMap::new())
        .await
        .unwrap();

    assert!(!body.is_empty());
}

#[tokio::test]
async fn test_custom_header_credential_and_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/community"))
        .and(header("X-Api-Key", "secret"))
        .and(header("X-Tenant", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ApiConfig::builder(server.uri()).header("X-Tenant", "acme").build();
    let client = ApiClient::with_config(config, Credential::header("X-Api-Key", "secret"));

    client
        .request_bytes(reqwest::Method::GET, "community", &QueryMap::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_server_error_preserves_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/community/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"messages": ["no such community"]})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .request_bytes(reqwest::Method::GET, "community/missing", &QueryMap::new())
        .await
        .unwrap_err();

    match &err {
        Error::Server { status, body } => {
            assert_eq!(*status, 404);
            assert!(body.contains("no such community"));
        }
        other => panic!("expected Server error, got {other:?}"),
    }
    assert_eq!(err.server_messages().unwrap(), vec!["no such community"]);
}

#[tokio::test]
async fn test_get_entity_decodes_body() {
    #[derive(Debug, Deserialize)]
    struct Thing {
        id: String,
    }

    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/thing/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let thing: Thing = client.get_entity("thing/1", &QueryMap::new()).await.unwrap();
    assert_eq!(thing.id, "1");
}

#[tokio::test]
async fn test_get_entity_malformed_body_is_decode_error() {
    #[derive(Debug, Deserialize)]
    struct Thing {
        #[allow(dead_code)]
        id: String,
    }

    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/thing/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>surprise</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get_entity::<Thing>("thing/1", &QueryMap::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_post_sends_form_content_type_with_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/document"))
        .and(header(
            "Content-Type",
            "application/x-www-form-urlencoded;charset=utf-8",
        ))
        .and(query_param("title", "My API Test"))
        .and(query_param("locale_code", "en-US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accepted": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut query = QueryMap::new();
    query.insert("title".to_string(), "My API Test".to_string());
    query.insert("locale_code".to_string(), "en-US".to_string());

    client
        .request_bytes(reqwest::Method::POST, "document", &query)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_envelope_and_collection_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/community"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "properties": {"title": "Communities", "offset": 0, "total": 2, "limit": 2, "size": 2},
            "entities": [{"id": "a"}, {"id": "b"}],
            "links": [{"rel": ["self"], "href": "community?limit=2&offset=0"}]
        })))
        .mount(&server)
        .await;

    #[derive(Debug, Deserialize)]
    struct Slim {
        id: String,
    }

    let client = client_for(&server);
    let mut query = QueryMap::new();
    query.insert("offset".to_string(), "0".to_string());
    query.insert("limit".to_string(), "2".to_string());

    let envelope = client.get_envelope("community", &query).await.unwrap();
    assert_eq!(envelope.properties.size, 2);

    let slims: Vec<Slim> = client.collection_page("community", &query).await.unwrap();
    assert_eq!(slims.len(), 2);
    assert_eq!(slims[0].id, "a");
}

#[tokio::test]
async fn test_collection_page_without_entities_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/community"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "properties": {"size": 0},
            "links": []
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let slims: Vec<serde_json::Value> = client
        .collection_page("community", &QueryMap::new())
        .await
        .unwrap();
    assert!(slims.is_empty());
}

#[tokio::test]
async fn test_download_writes_body_and_counts_bytes() {
    let server = MockServer::start().await;
    let payload = vec![0x42u8; 4096];

    Mock::given(method("GET"))
        .and(path("/document/12345/content"))
        .and(query_param("locale_code", "es-ES"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut query = QueryMap::new();
    query.insert("locale_code".to_string(), "es-ES".to_string());

    let file = tempfile::NamedTempFile::new().unwrap();
    let mut writer = tokio::fs::File::create(file.path()).await.unwrap();
    let written = client
        .download("document/12345/content", &query, &mut writer)
        .await
        .unwrap();

    assert_eq!(written, 4096);
    let on_disk = std::fs::read(file.path()).unwrap();
    assert_eq!(on_disk, payload);
}

#[tokio::test]
async fn test_download_surfaces_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/document/12345/content"))
        .respond_with(ResponseTemplate::new(500).set_body_string("broken"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut writer = tokio::fs::File::create(file.path()).await.unwrap();
    let err = client
        .download("document/12345/content", &QueryMap::new(), &mut writer)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Server { status: 500, .. }));
}

#[tokio::test]
async fn test_base_url_joining_tolerates_slashes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/community"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let trailing = ApiClient::new(format!("{}/", server.uri()), Credential::None);
    trailing
        .request_bytes(reqwest::Method::GET, "/community", &QueryMap::new())
        .await
        .unwrap();

    let bare = ApiClient::new(server.uri(), Credential::None);
    bare.request_bytes(reqwest::Method::GET, "community", &QueryMap::new())
        .await
        .unwrap();
}
