//! HTTP surface of the proxy: `GET /api/tweets/{handle}?max=<n>`.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::cache::{now_ms, FeedCache};
use crate::error::ProxyError;
use crate::types::FeedPage;
use crate::upstream::PostSource;

/// Posts returned when the caller does not pass `max`.
pub const DEFAULT_MAX_POSTS: u32 = 2;

/// Largest `max` honoured; larger requests share the capped cache entry.
pub const MAX_POSTS: u32 = 100;

/// Post count for a request, kept inside `1..=MAX_POSTS` so the cache key
/// space stays bounded.
pub fn post_count(requested: Option<u32>) -> u32 {
    requested.unwrap_or(DEFAULT_MAX_POSTS).clamp(1, MAX_POSTS)
}

pub struct AppState<S> {
    pub cache: FeedCache,
    pub source: S,
}

impl<S> AppState<S> {
    pub fn new(cache: FeedCache, source: S) -> Self {
        Self { cache, source }
    }
}

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub max: Option<u32>,
}

pub fn router<S: PostSource>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/api/tweets/{handle}", get(recent_posts::<S>))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn recent_posts<S: PostSource>(
    State(state): State<Arc<AppState<S>>>,
    Path(handle): Path<String>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<FeedPage>, ProxyError> {
    let max = post_count(query.max);
    let key = FeedCache::key(&handle, max);

    if let Some(page) = state.cache.get(&key, now_ms()).await {
        return Ok(Json(page));
    }

    match state.source.recent_posts(&handle, max).await {
        Ok(page) => {
            info!(handle = %handle, max, posts = page.data.len(), "refreshed feed cache");
            state.cache.insert(key, page.clone(), now_ms()).await;
            Ok(Json(page))
        }
        Err(err) => {
            error!(handle = %handle, "feed fetch failed: {err}");
            Err(err)
        }
    }
}
