//! Upstream timeline client.

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::ProxyError;
use crate::types::FeedPage;

/// Smallest and largest page the upstream timeline endpoint accepts.
const UPSTREAM_MIN_RESULTS: u32 = 5;
const UPSTREAM_MAX_RESULTS: u32 = 100;

/// Source of recent posts for a handle.
pub trait PostSource: Send + Sync + 'static {
    fn recent_posts(
        &self,
        handle: &str,
        max: u32,
    ) -> impl Future<Output = Result<FeedPage, ProxyError>> + Send;
}

#[derive(Debug, Clone)]
pub struct TwitterClient {
    http: reqwest::Client,
    base: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct UserLookup {
    data: UserData,
}

#[derive(Deserialize)]
struct UserData {
    id: String,
}

impl TwitterClient {
    pub fn new(
        base: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("bsp-feed-proxy/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base: base.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ProxyError> {
        let token = self.token.as_deref().ok_or(ProxyError::MissingToken)?;
        let resp = self.http.get(url).bearer_auth(token).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.json::<serde_json::Value>().await.ok();
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| ProxyError::Decode(e.to_string()))
    }

    async fn user_id(&self, handle: &str) -> Result<String, ProxyError> {
        let url = format!("{}/users/by/username/{handle}", self.base);
        let lookup: UserLookup = self.get_json(&url).await?;
        Ok(lookup.data.id)
    }
}

impl PostSource for TwitterClient {
    async fn recent_posts(&self, handle: &str, max: u32) -> Result<FeedPage, ProxyError> {
        let user_id = self.user_id(handle).await?;
        let page_size = upstream_page_size(max);
        debug!(handle, user_id, page_size, "fetching recent posts");

        let url = format!(
            "{}/users/{user_id}/tweets?max_results={page_size}&tweet.fields=created_at,text",
            self.base
        );
        let page: FeedPage = self.get_json(&url).await?;
        Ok(page.truncated(max as usize))
    }
}

/// The upstream rejects page sizes outside 5..=100; ask for the nearest valid
/// size and trim locally.
pub fn upstream_page_size(max: u32) -> u32 {
    max.clamp(UPSTREAM_MIN_RESULTS, UPSTREAM_MAX_RESULTS)
}
