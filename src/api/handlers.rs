//! API Handlers
//!
//! HTTP request handlers for the gateway endpoints.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::cache::{saturating_millis, SharedCache};
use crate::client::BackendClient;
use crate::config::Config;
use crate::error::{GatewayError, Result};
use crate::models::{
    ClearResponse, CleanupResponse, EntryTtlResponse, HealthResponse, StatsResponse,
};

/// Header telling the caller whether the body came from the cache.
pub const CACHE_STATUS_HEADER: &str = "x-cache";

/// Application state shared across all handlers.
///
/// Holds the one process-wide response cache and the client that fills it.
#[derive(Clone)]
pub struct AppState {
    /// Shared response cache
    pub cache: SharedCache<Value>,
    /// Memoizing backend client over the same cache
    pub client: BackendClient,
}

impl AppState {
    /// Creates a new AppState around a backend client and its cache.
    pub fn new(client: BackendClient) -> Self {
        Self {
            cache: client.cache().clone(),
            client,
        }
    }

    /// Creates a new AppState from configuration over an existing cache.
    pub fn from_config(config: &Config, cache: SharedCache<Value>) -> Result<Self> {
        Ok(Self::new(BackendClient::from_config(config, cache)?))
    }
}

/// Handler for GET /api/*path
///
/// Forwards the request to the backend through the response cache.
pub async fn forward_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Response> {
    if path.split('/').any(|segment| segment == "..") {
        return Err(GatewayError::InvalidRequest(format!(
            "Path must not contain '..': {}",
            path
        )));
    }

    let fetched = state.client.get_json(&path, &query, None).await?;

    Ok((
        [(CACHE_STATUS_HEADER, fetched.status.as_str())],
        Json(fetched.value),
    )
        .into_response())
}

/// Handler for DELETE /cache
///
/// Drops every cached response.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let dropped = state.client.invalidate_all().await;
    Json(ClearResponse::new(dropped))
}

/// Handler for POST /cache/cleanup
///
/// Runs a sweep immediately instead of waiting for the background task.
pub async fn cleanup_handler(State(state): State<AppState>) -> Json<CleanupResponse> {
    let mut cache = state.cache.write().await;
    let removed = cache.cleanup();
    info!(removed, "On-demand TTL cleanup");

    Json(CleanupResponse {
        removed,
        remaining: cache.len(),
    })
}

/// Handler for GET /cache/entry/*key
///
/// Reports how long a cached entry has left.
pub async fn entry_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<EntryTtlResponse>> {
    // Write lock: a stale entry is evicted on lookup.
    let remaining = state.cache.write().await.ttl_remaining(&key);

    match remaining {
        Some(ttl) => Ok(Json(EntryTtlResponse {
            ttl_remaining_ms: saturating_millis(ttl),
            key,
        })),
        None => Err(GatewayError::NotFound(key)),
    }
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.read().await.stats();
    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TtlCache;
    use serde_json::json;
    use std::time::Duration;

    fn test_state() -> AppState {
        let cache = TtlCache::new(Duration::from_secs(300)).into_shared();
        AppState::new(BackendClient::new("http://127.0.0.1:9", cache))
    }

    #[tokio::test]
    async fn test_forward_rejects_parent_segments() {
        let state = test_state();

        let result = forward_handler(
            State(state),
            Path("products/../admin".to_string()),
            Query(Vec::new()),
        )
        .await;
        assert!(matches!(result, Err(GatewayError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_forward_serves_cached_body() {
        let state = test_state();
        state
            .cache
            .write()
            .await
            .set("categories", json!(["brakes", "filters"]), None);

        let response = forward_handler(State(state), Path("categories".to_string()), Query(Vec::new()))
            .await
            .unwrap();

        assert_eq!(response.headers()[CACHE_STATUS_HEADER], "HIT");
    }

    #[tokio::test]
    async fn test_clear_handler() {
        let state = test_state();
        state.cache.write().await.set("a", json!(1), None);
        state.cache.write().await.set("b", json!(2), None);

        let response = clear_handler(State(state.clone())).await;

        assert_eq!(response.dropped, 2);
        assert!(state.cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_cleanup_handler_keeps_live_entries() {
        let state = test_state();
        state.cache.write().await.set("live", json!(1), None);
        state
            .cache
            .write()
            .await
            .set("dead", json!(2), Some(Duration::ZERO));

        let response = cleanup_handler(State(state)).await;

        assert_eq!(response.removed, 1);
        assert_eq!(response.remaining, 1);
    }

    #[tokio::test]
    async fn test_entry_handler() {
        let state = test_state();
        state
            .cache
            .write()
            .await
            .set("products:page=0", json!([]), Some(Duration::from_secs(60)));

        let found = entry_handler(State(state.clone()), Path("products:page=0".to_string()))
            .await
            .unwrap();
        assert!(found.ttl_remaining_ms > 0 && found.ttl_remaining_ms <= 60_000);

        let missing = entry_handler(State(state), Path("nope".to_string())).await;
        assert!(matches!(missing, Err(GatewayError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_entry_handler_huge_ttl_does_not_wrap() {
        let state = test_state();
        state
            .cache
            .write()
            .await
            .set("brands", json!([]), Some(Duration::MAX));

        let found = entry_handler(State(state), Path("brands".to_string()))
            .await
            .unwrap();

        // Expiry saturates at u64::MAX ms, so the remainder is close to it.
        assert!(found.ttl_remaining_ms > u64::MAX / 2);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
