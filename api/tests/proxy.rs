use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use api::cache::FeedCache;
use api::error::ProxyError;
use api::routes::{router, AppState, MAX_POSTS};
use api::upstream::PostSource;
use api::{ErrorBody, FeedPage, Post};

#[derive(Default)]
struct CountingSource {
    calls: AtomicUsize,
    fail: bool,
}

impl PostSource for CountingSource {
    async fn recent_posts(&self, handle: &str, max: u32) -> Result<FeedPage, ProxyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ProxyError::Upstream {
                status: 429,
                body: Some(serde_json::json!({ "title": "Too Many Requests" })),
            });
        }
        let data = (0..max)
            .map(|i| Post {
                id: format!("{handle}-{i}"),
                text: format!("post {i}"),
                created_at: Some("2024-12-06T10:00:00.000Z".into()),
            })
            .collect();
        Ok(FeedPage { data, meta: None })
    }
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, bytes)
}

#[tokio::test]
async fn second_request_is_served_from_cache() {
    let state = Arc::new(AppState::new(
        FeedCache::in_memory(Duration::from_secs(300)),
        CountingSource::default(),
    ));

    let (status, body) = get(router(state.clone()), "/api/tweets/Mayawati").await;
    assert_eq!(status, StatusCode::OK);
    let page: FeedPage = serde_json::from_slice(&body).unwrap();
    assert_eq!(page.data.len(), 2, "default max is 2");

    let (status, _) = get(router(state.clone()), "/api/tweets/Mayawati").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn different_max_is_a_different_cache_entry() {
    let state = Arc::new(AppState::new(
        FeedCache::in_memory(Duration::from_secs(300)),
        CountingSource::default(),
    ));

    get(router(state.clone()), "/api/tweets/Mayawati?max=2").await;
    let (_, body) = get(router(state.clone()), "/api/tweets/Mayawati?max=3").await;
    let page: FeedPage = serde_json::from_slice(&body).unwrap();

    assert_eq!(page.data.len(), 3);
    assert_eq!(state.source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn upstream_failure_is_a_500_with_details() {
    let state = Arc::new(AppState::new(
        FeedCache::in_memory(Duration::from_secs(300)),
        CountingSource {
            fail: true,
            ..Default::default()
        },
    ));

    let (status, body) = get(router(state.clone()), "/api/tweets/Mayawati").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let err: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert!(err.error.contains("429"));
    assert_eq!(err.details.unwrap()["title"], "Too Many Requests");
    assert!(state.cache.is_empty().await, "failures are not cached");
}

#[tokio::test]
async fn cache_survives_restart_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tweetCache.json");

    let first = Arc::new(AppState::new(
        FeedCache::load(&path, Duration::from_secs(300)).await,
        CountingSource::default(),
    ));
    get(router(first.clone()), "/api/tweets/Mayawati").await;
    assert!(path.exists());

    let second = Arc::new(AppState::new(
        FeedCache::load(&path, Duration::from_secs(300)).await,
        CountingSource::default(),
    ));
    let (status, _) = get(router(second.clone()), "/api/tweets/Mayawati").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second.source.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn oversized_max_is_capped_and_shares_one_entry() {
    let state = Arc::new(AppState::new(
        FeedCache::in_memory(Duration::from_secs(300)),
        CountingSource::default(),
    ));

    let (status, body) = get(router(state.clone()), "/api/tweets/Mayawati?max=500").await;
    assert_eq!(status, StatusCode::OK);
    let page: FeedPage = serde_json::from_slice(&body).unwrap();
    assert_eq!(page.data.len(), MAX_POSTS as usize);

    get(router(state.clone()), "/api/tweets/Mayawati?max=100000").await;
    get(router(state.clone()), "/api/tweets/Mayawati?max=0").await;

    assert_eq!(state.source.calls.load(Ordering::SeqCst), 2, "500 and 100000 share the capped entry");
    assert_eq!(state.cache.len().await, 2);
    assert!(state
        .cache
        .get(&FeedCache::key("Mayawati", MAX_POSTS), api::cache::now_ms())
        .await
        .is_some());
}
