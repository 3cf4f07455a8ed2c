//! Marketplace API client.
//!
//! # Responsibilities
//! - Build endpoint URLs from the configured base URL
//! - Issue GET requests and decode JSON payloads into raw types
//! - Treat any non-2xx status as a failure
//! - Log and time every outbound call

use std::time::Instant;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::error::{UpstreamError, UpstreamResult};
use crate::upstream::types::{RawDescription, RawItemDetail, RawSearchResponse};

/// Site whose catalogue `/sites/MLA/search` proxies.
const SITE_ID: &str = "MLA";

/// Query parameters forwarded verbatim to the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub limit: Option<String>,
    pub q: Option<String>,
}

/// HTTP client for the marketplace API.
#[derive(Clone)]
pub struct MarketplaceClient {
    http: Client,
    base_url: Url,
}

impl MarketplaceClient {
    /// Create a client for the configured upstream.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::NotABase(config.base_url.clone()));
        }

        let mut builder = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build().map_err(UpstreamError::Transport)?;

        tracing::info!(base_url = %base_url, "Marketplace client initialized");

        Ok(Self { http, base_url })
    }

    /// `GET {base}/sites/MLA/search?limit=..&q=..`
    pub async fn search(&self, query: &SearchQuery) -> UpstreamResult<RawSearchResponse> {
        let url = self.search_url(query);
        self.get_json("search", url).await
    }

    fn search_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.endpoint(&["sites", SITE_ID, "search"]);
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(limit) = &query.limit {
                pairs.append_pair("limit", limit);
            }
            if let Some(q) = &query.q {
                pairs.append_pair("q", q);
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        url
    }

    /// `GET {base}/items/{id}`
    pub async fn item(&self, id: &str) -> UpstreamResult<RawItemDetail> {
        let url = self.endpoint(&["items", id]);
        self.get_json("item", url).await
    }

    /// `GET {base}/items/{id}/description`
    pub async fn description(&self, id: &str) -> UpstreamResult<RawDescription> {
        let url = self.endpoint(&["items", id, "description"]);
        self.get_json("description", url).await
    }

    /// Append path segments to the base URL. Each segment is percent-encoded on its own.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str, url: Url) -> UpstreamResult<T> {
        let start = Instant::now();
        tracing::debug!(endpoint, url = %url, "Fetching from upstream");

        let result = self.fetch(url.clone()).await;
        metrics::record_upstream(endpoint, result.is_ok(), start);

        if let Err(e) = &result {
            tracing::error!(endpoint, url = %url, error = %e, "Upstream request failed");
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> UpstreamResult<T> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.json().await.map_err(UpstreamError::Decode)
    }
}
