//! Feed proxy binary.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::cache::FeedCache;
use api::config::Args;
use api::routes::{router, AppState};
use api::upstream::TwitterClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    format!("api={level},feed_proxy={level},info", level = args.log_level).into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    args.validate().map_err(anyhow::Error::msg)?;
    if args.bearer_token.is_none() {
        warn!("TWITTER_BEARER_TOKEN not set; every cache miss will fail");
    }

    let cache = FeedCache::load(&args.cache_file, args.cache_ttl()).await;
    info!(
        entries = cache.len().await,
        file = %args.cache_file.display(),
        ttl_secs = args.cache_ttl_secs,
        "feed cache ready"
    );

    let client = TwitterClient::new(
        args.upstream_base.clone(),
        args.bearer_token.clone(),
        args.request_timeout(),
    )
    .context("building upstream client")?;

    let app = router(Arc::new(AppState::new(cache, client)));

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("binding {}", args.listen))?;
    info!("feed proxy running on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
