//! API client
//!
//! A thin client over reqwest: joins paths onto the base URL, applies the
//! credential and default headers, and maps responses into envelopes,
//! entities, or errors. Statuses of 400 and above become [`Error::Server`]
//! with the body preserved.
//!
//! Write operations follow the API's wire format: parameters travel in the
//! query string with an empty body, under a form-encoded content type.

use super::credential::Credential;
use crate::decode::{decode_entities, decode_entity};
use crate::error::{Error, Result};
use crate::pagination::{CursorRequest, PageEnvelope};
use crate::types::QueryMap;
use bytes::Bytes;
use futures::StreamExt;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

/// Content type sent with write operations
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=utf-8";

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL all request paths are joined onto
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl ApiConfig {
    /// Create a config for the given API root
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("sirenstream/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Create a new config builder
    pub fn builder(base_url: impl Into<String>) -> ApiConfigBuilder {
        ApiConfigBuilder {
            config: Self::new(base_url),
        }
    }
}

/// Builder for API client config
pub struct ApiConfigBuilder {
    config: ApiConfig,
}

impl ApiConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ApiConfig {
        self.config
    }
}

/// Client for a Siren-style paginated API.
///
/// Cloning is cheap and clones share the underlying connection pool, so one
/// client can back any number of concurrent streams.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
    credential: Credential,
}

impl ApiClient {
    /// Create a client for the given API root
    pub fn new(base_url: impl Into<String>, credential: Credential) -> Self {
        Self::with_config(ApiConfig::new(base_url), credential)
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ApiConfig, credential: Credential) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            config,
            credential,
        }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Make a request and read the whole body.
    ///
    /// Statuses of 400 and above become [`Error::Server`] carrying the raw
    /// body, so server-supplied diagnostics survive.
    pub async fn request_bytes(
        &self,
        method: Method,
        path: &str,
        query: &QueryMap,
    ) -> Result<Bytes> {
        let response = self.send(method, path, query).await?;
        let status = response.status().as_u16();

        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            warn!("request to {path} failed with HTTP {status}");
            return Err(Error::Server { status, body });
        }

        Ok(response.bytes().await?)
    }

    /// Fetch and decode one page of a collection
    pub async fn get_envelope(&self, path: &str, query: &QueryMap) -> Result<PageEnvelope> {
        let body = self.request_bytes(Method::GET, path, query).await?;
        PageEnvelope::from_slice(&body)
    }

    /// Fetch the page a cursor request points at
    pub async fn fetch_page(&self, request: &CursorRequest) -> Result<PageEnvelope> {
        self.get_envelope(&request.path, &request.query).await
    }

    /// Fetch a single entity
    pub async fn get_entity<T: DeserializeOwned>(&self, path: &str, query: &QueryMap) -> Result<T> {
        let body = self.request_bytes(Method::GET, path, query).await?;
        decode_entity(&body)
    }

    /// Create an entity with a form-style POST
    pub async fn post_entity<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryMap,
    ) -> Result<T> {
        let body = self.request_bytes(Method::POST, path, query).await?;
        decode_entity(&body)
    }

    /// Fetch one page of a collection and decode its entity block.
    /// A page without an entity block decodes to an empty list.
    pub async fn collection_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryMap,
    ) -> Result<Vec<T>> {
        let envelope = self.get_envelope(path, query).await?;
        match &envelope.entities {
            Some(block) => decode_entities(block),
            None => Ok(Vec::new()),
        }
    }

    /// Stream a response body into `writer`, returning the bytes written
    pub async fn download<W>(&self, path: &str, query: &QueryMap, writer: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin,
    {
        let response = self.send(Method::GET, path, query).await?;
        let status = response.status().as_u16();

        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Server { status, body });
        }

        let mut written = 0u64;
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let chunk = chunk?;
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        writer.flush().await?;

        Ok(written)
    }

    /// Build and send a request without touching the response body
    async fn send(&self, method: Method, path: &str, query: &QueryMap) -> Result<Response> {
        let url = self.build_url(path);
        debug!("{} {}", method, url);

        let mut req = self.client.request(method.clone(), &url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        // Writes carry their parameters in the query string with an empty
        // body; the content type still marks them as form submissions.
        if method == Method::POST {
            req = req.header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE);
        }

        if !query.is_empty() {
            req = req.query(query);
        }

        req = self.credential.apply(req);

        Ok(req.send().await?)
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
