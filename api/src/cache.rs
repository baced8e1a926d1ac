//! Flat TTL cache for feed responses, persisted to a single JSON file.
//!
//! File layout matches what the site has always written:
//! `{ "<handle>:<max>": { "data": <FeedPage>, "timestamp": <unix ms> } }`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use crate::types::FeedPage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub data: FeedPage,
    /// Unix epoch milliseconds at which `data` was fetched.
    pub timestamp: u64,
}

#[derive(Debug)]
pub struct FeedCache {
    path: Option<PathBuf>,
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl FeedCache {
    /// Cache that never touches disk.
    pub fn in_memory(ttl: Duration) -> Self {
        Self {
            path: None,
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Load previously persisted entries. A missing or corrupt file starts empty.
    pub async fn load(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        let path = path.into();
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<HashMap<String, CacheEntry>>(&raw) {
                Ok(entries) => {
                    debug!(entries = entries.len(), path = %path.display(), "loaded feed cache");
                    entries
                }
                Err(err) => {
                    error!(path = %path.display(), "failed to parse cache file: {err}");
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                error!(path = %path.display(), "failed to load cache file: {err}");
                HashMap::new()
            }
        };

        Self {
            path: Some(path),
            ttl,
            entries: RwLock::new(entries),
        }
    }

    pub fn key(handle: &str, max: u32) -> String {
        format!("{handle}:{max}")
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Fresh entry for `key` as of `now_ms`, if any.
    pub async fn get(&self, key: &str, now_ms: u64) -> Option<FeedPage> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        self.is_fresh(entry, now_ms).then(|| entry.data.clone())
    }

    fn is_fresh(&self, entry: &CacheEntry, now_ms: u64) -> bool {
        u128::from(now_ms.saturating_sub(entry.timestamp)) < self.ttl.as_millis()
    }

    /// Store `data` under `key`, drop expired entries and rewrite the cache file.
    pub async fn insert(&self, key: String, data: FeedPage, now_ms: u64) {
        let snapshot = {
            let mut entries = self.entries.write().await;
            let before = entries.len();
            entries.retain(|_, entry| self.is_fresh(entry, now_ms));
            if entries.len() < before {
                debug!(dropped = before - entries.len(), "pruned expired feed entries");
            }
            entries.insert(
                key,
                CacheEntry {
                    data,
                    timestamp: now_ms,
                },
            );
            self.path.as_ref().map(|_| entries.clone())
        };

        if let (Some(path), Some(snapshot)) = (self.path.as_ref(), snapshot) {
            persist(path, &snapshot).await;
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

async fn persist(path: &Path, entries: &HashMap<String, CacheEntry>) {
    let raw = match serde_json::to_string(entries) {
        Ok(raw) => raw,
        Err(err) => {
            error!("failed to serialise cache: {err}");
            return;
        }
    };
    if let Err(err) = tokio::fs::write(path, raw).await {
        warn!(path = %path.display(), "failed to save cache file: {err}");
    }
}

/// Current wall clock as unix epoch milliseconds.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Post;

    fn page(text: &str) -> FeedPage {
        FeedPage {
            data: vec![Post {
                id: "1".into(),
                text: text.into(),
                created_at: None,
            }],
            meta: None,
        }
    }

    #[tokio::test]
    async fn entries_expire_after_ttl() {
        let cache = FeedCache::in_memory(Duration::from_secs(300));
        cache.insert(FeedCache::key("Mayawati", 2), page("hi"), 1_000).await;

        assert!(cache.get("Mayawati:2", 1_000 + 299_999).await.is_some());
        assert!(cache.get("Mayawati:2", 1_000 + 300_000).await.is_none());
    }

    #[tokio::test]
    async fn key_includes_post_count() {
        let cache = FeedCache::in_memory(Duration::from_secs(300));
        cache.insert(FeedCache::key("Mayawati", 2), page("two"), 0).await;
        assert!(cache.get(&FeedCache::key("Mayawati", 5), 10).await.is_none());
    }

    #[tokio::test]
    async fn insert_drops_expired_entries() {
        let cache = FeedCache::in_memory(Duration::from_secs(300));
        cache.insert(FeedCache::key("Mayawati", 2), page("old"), 0).await;
        cache.insert(FeedCache::key("Mayawati", 3), page("recent"), 200_000).await;

        cache.insert(FeedCache::key("Mayawati", 4), page("new"), 350_000).await;

        assert_eq!(cache.len().await, 2);
        assert!(cache.get("Mayawati:2", 350_000).await.is_none());
        assert!(cache.get("Mayawati:3", 350_000).await.is_some());
    }

    #[tokio::test]
    async fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, "{not json").unwrap();

        let cache = FeedCache::load(&path, Duration::from_secs(300)).await;
        assert!(cache.is_empty().await);
    }
}
