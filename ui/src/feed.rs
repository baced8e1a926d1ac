//! Client for the feed proxy and the view model of the updates section.

use api::{ErrorBody, FeedPage};
use thiserror::Error;

use crate::core::format;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("{0}")]
    Request(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("malformed feed payload: {0}")]
    Decode(String),
}

#[derive(Debug, Clone)]
pub struct FeedClient {
    base: String,
    client: reqwest::Client,
}

impl FeedClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, handle: &str, max: u32) -> String {
        format!("{}/api/tweets/{handle}?max={max}", self.base)
    }

    /// One request, no retry.
    pub async fn recent_posts(&self, handle: &str, max: u32) -> Result<FeedPage, FeedError> {
        let url = self.url(handle, max);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| FeedError::Request(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| FeedError::Request(err.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| format!("HTTP {}", status.as_u16()));
            return Err(FeedError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|err| FeedError::Decode(err.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostView {
    pub text: String,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedView {
    Loading,
    Posts(Vec<PostView>),
    Empty(String),
    Failed(String),
}

/// Turn a fetch result into what the updates section shows.
pub fn feed_view(result: Result<FeedPage, FeedError>, max: usize, empty_text: &str) -> FeedView {
    match result {
        Ok(page) if page.is_empty() => FeedView::Empty(empty_text.to_string()),
        Ok(page) => FeedView::Posts(
            page.data
                .into_iter()
                .take(max)
                .map(|post| PostView {
                    date: format::post_date(post.created_at.as_deref()),
                    text: post.text,
                })
                .collect(),
        ),
        Err(err) => {
            tracing::error!(%err, "feed request failed");
            FeedView::Failed(format::feed_error(&err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use api::Post;

    use super::*;

    fn post(id: &str, text: &str, created_at: Option<&str>) -> Post {
        Post {
            id: id.into(),
            text: text.into(),
            created_at: created_at.map(str::to_string),
        }
    }

    #[test]
    fn url_targets_proxy_route() {
        let client = FeedClient::new("http://localhost:3000/");
        assert_eq!(
            client.url("Mayawati", 2),
            "http://localhost:3000/api/tweets/Mayawati?max=2"
        );
    }

    #[test]
    fn renders_at_most_max_posts_with_long_dates() {
        let page = FeedPage {
            data: vec![
                post("1", "first", Some("2024-12-06T09:00:00Z")),
                post("2", "second", None),
                post("3", "third", None),
            ],
            meta: None,
        };
        let FeedView::Posts(posts) = feed_view(Ok(page), 2, "No posts found.") else {
            panic!("expected posts");
        };
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].date.as_deref(), Some("December 6, 2024"));
        assert_eq!(posts[1].date, None);
    }

    #[test]
    fn empty_feed_shows_notice() {
        let page = FeedPage {
            data: Vec::new(),
            meta: None,
        };
        assert_eq!(
            feed_view(Ok(page), 2, "No posts found."),
            FeedView::Empty("No posts found.".into())
        );
    }

    #[test]
    fn failures_show_literal_error_text() {
        let err = FeedError::Status {
            status: 500,
            message: "Failed to fetch tweets".into(),
        };
        assert_eq!(
            feed_view(Err(err), 2, ""),
            FeedView::Failed("Error: Failed to fetch tweets".into())
        );
    }
}
