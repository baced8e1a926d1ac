//! Command-line and environment configuration for the feed proxy.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Social feed proxy for the BSP site
#[derive(Parser, Debug, Clone)]
#[command(name = "feed-proxy")]
#[command(about = "Fetches and caches recent posts for the site's updates section")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "0.0.0.0:3000")]
    pub listen: SocketAddr,

    /// Bearer token for the upstream API
    #[arg(long, env = "TWITTER_BEARER_TOKEN", hide_env_values = true)]
    pub bearer_token: Option<String>,

    /// Upstream API base URL
    #[arg(long, env = "UPSTREAM_BASE", default_value = "https://api.twitter.com/2")]
    pub upstream_base: String,

    /// Flat JSON file the response cache is persisted to
    #[arg(long, env = "CACHE_FILE", default_value = "tweetCache.json")]
    pub cache_file: PathBuf,

    /// Seconds a cached response stays fresh
    #[arg(long, env = "CACHE_TTL_SECS", default_value_t = 300)]
    pub cache_ttl_secs: u64,

    /// Upstream request timeout in milliseconds
    #[arg(long, env = "REQUEST_TIMEOUT_MS", default_value_t = 10_000)]
    pub request_timeout_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Reject settings the proxy cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.cache_ttl_secs == 0 {
            return Err("CACHE_TTL_SECS must be greater than zero".to_string());
        }
        if !self.upstream_base.starts_with("http://") && !self.upstream_base.starts_with("https://")
        {
            return Err(format!(
                "UPSTREAM_BASE must be an http(s) URL, got {}",
                self.upstream_base
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_deployment() {
        let args = Args::parse_from(["feed-proxy"]);
        assert_eq!(args.listen.port(), 3000);
        assert_eq!(args.cache_ttl(), Duration::from_secs(300));
        assert_eq!(args.cache_file, PathBuf::from("tweetCache.json"));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn zero_ttl_is_rejected() {
        let args = Args::parse_from(["feed-proxy", "--cache-ttl-secs", "0"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn non_http_upstream_is_rejected() {
        let args = Args::parse_from(["feed-proxy", "--upstream-base", "ftp://example"]);
        assert!(args.validate().is_err());
    }
}
