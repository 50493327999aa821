//! Fetchers
//!
//! Byte-level access to the API, with and without the cache in front.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::cache::Cache;
use crate::error::{PokedexError, Result};

/// Source of raw response bodies keyed by URL.
pub trait Fetch {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

// == HTTP Fetcher ==
/// Fetches over HTTP with a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds a client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

// == Cached Fetcher ==
/// Cache-aside wrapper: reads go to the cache first and only successful
/// fetches are written back.
#[derive(Debug, Clone)]
pub struct CachedFetcher<F> {
    cache: Cache,
    inner: F,
}

impl<F> CachedFetcher<F> {
    pub fn new(cache: Cache, inner: F) -> Self {
        Self { cache, inner }
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }
}

impl<F: Fetch + Sync> Fetch for CachedFetcher<F> {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url) {
            debug!("Cache hit for {}", url);
            return Ok(body);
        }

        debug!("Cache miss for {}", url);
        let body = self.inner.fetch(url).await?;
        self.cache.add(url, body.clone());
        Ok(body)
    }
}
