//! Firecrawl HTTP client.

use std::time::Duration;

use serde_json::{Map, Value};
use tracing::debug;

use crate::core::FirecrawlConfig;

use super::ClientError;

/// Timeout for scrape, crawl, and map requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for crawl status checks.
const STATUS_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Firecrawl REST API.
///
/// Holds the resolved base URL and a shared connection pool. One outbound
/// HTTP call per operation; responses are returned as raw JSON, unexamined.
#[derive(Debug, Clone)]
pub struct FirecrawlClient {
    base_url: String,
    http: reqwest::Client,
}

impl FirecrawlClient {
    /// Create a client for the configured Firecrawl instance.
    pub fn new(config: &FirecrawlConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            http: reqwest::Client::new(),
        }
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Scrape a single page. POST `/v0/scrape` with body `{url, ...options}`.
    pub async fn scrape(
        &self,
        url: &str,
        options: Map<String, Value>,
    ) -> Result<Value, ClientError> {
        self.post("Scrape", "/v0/scrape", url, options).await
    }

    /// Start a crawl job. POST `/v0/crawl` with body `{url, ...options}`.
    pub async fn crawl(
        &self,
        url: &str,
        options: Map<String, Value>,
    ) -> Result<Value, ClientError> {
        self.post("Crawl", "/v0/crawl", url, options).await
    }

    /// Check a crawl job. GET `/v0/crawl/status/{job_id}`.
    pub async fn crawl_status(&self, job_id: &str) -> Result<Value, ClientError> {
        const OPERATION: &str = "Get crawl status";

        let endpoint = format!("{}/v0/crawl/status/{}", self.base_url, job_id);
        debug!(%endpoint, "GET");

        let response = self
            .http
            .get(&endpoint)
            .timeout(STATUS_TIMEOUT)
            .send()
            .await
            .map_err(|e| ClientError::request(OPERATION, e))?;

        if !response.status().is_success() {
            return Err(ClientError::status(OPERATION, response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::request(OPERATION, e))
    }

    /// Map a site's URLs. POST `/v0/map` with body `{url, ...options}`.
    pub async fn map(&self, url: &str, options: Map<String, Value>) -> Result<Value, ClientError> {
        self.post("Map", "/v0/map", url, options).await
    }

    async fn post(
        &self,
        operation: &'static str,
        path: &str,
        url: &str,
        options: Map<String, Value>,
    ) -> Result<Value, ClientError> {
        let mut body = Map::with_capacity(options.len() + 1);
        body.insert("url".to_string(), Value::String(url.to_string()));
        body.extend(options);

        let endpoint = format!("{}{}", self.base_url, path);
        debug!(%endpoint, "POST");

        let response = self
            .http
            .post(&endpoint)
            .json(&Value::Object(body))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ClientError::request(operation, e))?;

        if !response.status().is_success() {
            return Err(ClientError::status(operation, response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::request(operation, e))
    }
}
