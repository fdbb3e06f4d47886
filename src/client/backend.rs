//! Backend Client
//!
//! JSON GET client for the auto-parts backend that memoizes responses in a
//! shared TTL cache.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::cache::SharedCache;
use crate::config::Config;
use crate::error::{GatewayError, Result};

use super::request_key;

/// Whether a response came from the cache or from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "HIT",
            CacheStatus::Miss => "MISS",
        }
    }
}

/// A JSON body plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub value: Value,
    pub status: CacheStatus,
}

/// Client for GET endpoints of the backend, memoized per request signature.
///
/// The cache lock is never held across the HTTP request. Two concurrent
/// misses on the same key both reach the backend and the later write wins.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
    cache: SharedCache<Value>,
}

impl BackendClient {
    /// Create a client for `base_url` with a default HTTP client
    pub fn new(base_url: impl Into<String>, cache: SharedCache<Value>) -> Self {
        Self::with_client(Client::new(), base_url, cache)
    }

    /// Create a client with a custom HTTP client
    pub fn with_client(http: Client, base_url: impl Into<String>, cache: SharedCache<Value>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            cache,
        }
    }

    /// Create a client from gateway configuration, applying the upstream timeout.
    pub fn from_config(config: &Config, cache: SharedCache<Value>) -> Result<Self> {
        let http = Client::builder().timeout(config.upstream_timeout()).build()?;
        Ok(Self::with_client(http, config.backend_url.clone(), cache))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The cache this client reads and fills.
    pub fn cache(&self) -> &SharedCache<Value> {
        &self.cache
    }

    /// Fetch JSON from `path`, serving it from the cache while fresh.
    ///
    /// # Arguments
    /// * `path` - Endpoint path relative to the backend base URL
    /// * `query` - Query parameters, also part of the cache key
    /// * `ttl` - How long to keep a fetched body (cache default if `None`)
    ///
    /// # Returns
    /// * `Ok(Fetched)` - The body and whether it was a cache hit
    /// * `Err(GatewayError)` - Transport failure or non-2xx status; nothing is cached
    pub async fn get_json(
        &self,
        path: &str,
        query: &[(String, String)],
        ttl: Option<Duration>,
    ) -> Result<Fetched> {
        let key = request_key(path, query);

        let cached = self.cache.write().await.get(&key);
        if let Some(value) = cached {
            debug!(%key, "Cache hit");
            return Ok(Fetched {
                value,
                status: CacheStatus::Hit,
            });
        }

        let url = self.url_for(path);
        debug!(%key, %url, "Cache miss, fetching from backend");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Backend returned an error status");
            return Err(GatewayError::UpstreamStatus {
                status: status.as_u16(),
                path: path.trim_start_matches('/').to_string(),
            });
        }

        let value: Value = response.json().await?;
        self.cache.write().await.set(key, value.clone(), ttl);

        Ok(Fetched {
            value,
            status: CacheStatus::Miss,
        })
    }

    /// Drop every memoized response, e.g. after logout.
    ///
    /// Returns how many entries were dropped.
    pub async fn invalidate_all(&self) -> usize {
        let mut cache = self.cache.write().await;
        let dropped = cache.len();
        cache.clear();
        info!(dropped, "Response cache invalidated");
        dropped
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TtlCache;
    use serde_json::json;

    fn test_client(base_url: &str) -> BackendClient {
        let cache = TtlCache::new(Duration::from_secs(300)).into_shared();
        BackendClient::new(base_url, cache)
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = test_client("http://backend:8080/");
        assert_eq!(client.base_url(), "http://backend:8080");
        assert_eq!(client.url_for("/products"), "http://backend:8080/products");
        assert_eq!(client.url_for("products"), "http://backend:8080/products");
    }

    #[test]
    fn test_cache_status_str() {
        assert_eq!(CacheStatus::Hit.as_str(), "HIT");
        assert_eq!(CacheStatus::Miss.as_str(), "MISS");
        assert_eq!(serde_json::to_value(CacheStatus::Hit).unwrap(), json!("HIT"));
    }

    #[tokio::test]
    async fn test_cached_value_served_without_backend() {
        // Nothing listens on port 9; a hit must not try to connect.
        let client = test_client("http://127.0.0.1:9");
        client
            .cache()
            .write()
            .await
            .set("products:page=0", json!([{"sku": "BP-100"}]), None);

        let query = vec![("page".to_string(), "0".to_string())];
        let fetched = client.get_json("/products", &query, None).await.unwrap();

        assert_eq!(fetched.status, CacheStatus::Hit);
        assert_eq!(fetched.value, json!([{"sku": "BP-100"}]));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_upstream_error() {
        let client = test_client("http://127.0.0.1:9");

        let result = client.get_json("/products", &[], None).await;
        assert!(matches!(result, Err(GatewayError::Upstream(_))));
        assert!(client.cache().read().await.is_empty());
    }

    #[tokio::test]
    async fn test_invalidate_all() {
        let client = test_client("http://127.0.0.1:9");
        client.cache().write().await.set("brands", json!(["ACDelco"]), None);

        assert_eq!(client.invalidate_all().await, 1);
        assert!(client.cache().read().await.is_empty());
    }
}
