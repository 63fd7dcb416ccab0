//! # OMDb HTTP Client
//!
//! File: bot/src/omdb/client.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `OmdbClient` issues the two GET requests the bot needs against the
//! configured OMDb base URL:
//!
//! - search: `?apikey=..&s=<query>&page=<n>&type=movie`
//! - details: `?apikey=..&i=<imdb id>&plot=full` or `?apikey=..&t=<title>&plot=full`
//!
//! Every request is bounded by the configured timeout and is attempted
//! exactly once. Whatever happens, the caller gets a value back: failures are
//! classified into a [`LookupError`] instead of being propagated.
//!
//! The dispatcher talks to the client through the [`MovieProvider`] trait so
//! that tests can substitute a canned provider.
//!
use super::error::LookupError;
use super::models::{decode_details, decode_search, DetailResult, SearchResult};
use crate::core::config::OmdbConfig;
use crate::core::error::Result;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Read-only access to a movie-metadata source.
#[async_trait]
pub trait MovieProvider: Send + Sync {
    /// Searches movies by title. `page` is 1-based.
    async fn search(&self, query: &str, page: u32) -> SearchResult;

    /// Looks up a single movie by IMDb id or, failing that, by exact title.
    /// Blank arguments count as absent; the id wins when both are given.
    async fn details(&self, imdb_id: Option<&str>, title: Option<&str>) -> DetailResult;
}

/// OMDb REST client.
#[derive(Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmdbClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl OmdbClient {
    /// Builds a client with its own connection pool and request timeout.
    pub fn new(api_key: impl Into<String>, base_url: Url, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("moviebot/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Builds a client from the `[omdb]` configuration section.
    pub fn from_config(config: &OmdbConfig) -> Result<Self> {
        Self::new(
            config.api_key.expose(),
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends one GET with `apikey` plus `params` and returns the raw body.
    async fn fetch(&self, params: &[(&str, &str)]) -> std::result::Result<Vec<u8>, LookupError> {
        let response = self
            .http
            .get(self.base_url.clone())
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl MovieProvider for OmdbClient {
    async fn search(&self, query: &str, page: u32) -> SearchResult {
        debug!("OMDb: searching for '{}' (page {})", query, page);
        let page = page.max(1).to_string();
        let params = [("s", query), ("page", page.as_str()), ("type", "movie")];

        let result = match self.fetch(&params).await {
            Ok(body) => decode_search(&body),
            Err(e) => Err(e),
        };
        match &result {
            Ok(found) => info!(
                "OMDb: search '{}' returned {} results (total {:?})",
                query,
                found.items.len(),
                found.total_results
            ),
            Err(e) if e.is_no_match() => info!("OMDb: search '{}': {}", query, e),
            Err(e) if e.is_not_found() => warn!("OMDb refused search '{}': {}", query, e),
            Err(e) => warn!("OMDb: search '{}' failed: {}", query, e),
        }
        result
    }

    async fn details(&self, imdb_id: Option<&str>, title: Option<&str>) -> DetailResult {
        let key = match (non_blank(imdb_id), non_blank(title)) {
            (Some(id), _) => ("i", id),
            (None, Some(title)) => ("t", title),
            (None, None) => return Err(LookupError::MissingKey),
        };
        debug!("OMDb: fetching details for {}={}", key.0, key.1);
        let params = [key, ("plot", "full")];

        let result = match self.fetch(&params).await {
            Ok(body) => decode_details(&body),
            Err(e) => Err(e),
        };
        match &result {
            Ok(movie) => info!("OMDb: found '{}' ({})", movie.title, movie.year),
            Err(e) if e.is_no_match() => info!("OMDb: details {}={}: {}", key.0, key.1, e),
            Err(e) if e.is_not_found() => {
                warn!("OMDb refused details {}={}: {}", key.0, key.1, e)
            }
            Err(e) => warn!("OMDb: details {}={} failed: {}", key.0, key.1, e),
        }
        result
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
