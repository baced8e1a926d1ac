//! Build-time site settings.
//!
//! Defaults can be overridden when compiling the web bundle:
//! `BSP_FEED_BASE`, `BSP_FEED_HANDLE`, `BSP_CONTENT_BASE`.

use crate::core::platform;

const DEFAULT_FEED_BASE: &str = "http://localhost:3000";
const DEFAULT_FEED_HANDLE: &str = "Mayawati";
pub const DEFAULT_FEED_POSTS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Origin of the feed proxy.
    pub feed_base: String,
    pub feed_handle: String,
    pub feed_posts: u32,
    /// Origin serving the non-default content modules; the page origin when unset.
    pub content_base: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            feed_base: option_env!("BSP_FEED_BASE")
                .unwrap_or(DEFAULT_FEED_BASE)
                .to_string(),
            feed_handle: option_env!("BSP_FEED_HANDLE")
                .unwrap_or(DEFAULT_FEED_HANDLE)
                .to_string(),
            feed_posts: DEFAULT_FEED_POSTS,
            content_base: option_env!("BSP_CONTENT_BASE").map(str::to_string),
        }
    }
}

impl SiteConfig {
    pub fn content_origin(&self) -> String {
        self.content_base
            .clone()
            .or_else(platform::origin)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_ask_for_two_posts() {
        let config = SiteConfig::default();
        assert_eq!(config.feed_posts, 2);
        assert!(!config.feed_handle.is_empty());
    }

    #[test]
    fn explicit_content_base_wins() {
        let config = SiteConfig {
            content_base: Some("https://cdn.example".into()),
            ..SiteConfig::default()
        };
        assert_eq!(config.content_origin(), "https://cdn.example");
    }
}
