use anyhow::Result;
use chainscan_viewer::{Viewer, ViewerOptions};
use clap::Parser;
use dotenv::dotenv;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut opts = ViewerOptions::parse();

    if let Ok(url) = env::var("INDEXER_URL") {
        opts.indexer_url = url;
    }

    if let Ok(chain_id) = env::var("CHAIN_ID") {
        if let Ok(id) = chain_id.parse::<i32>() {
            opts.chain_id = id;
        }
    }

    if let Ok(poll_interval) = env::var("POLL_INTERVAL_MS") {
        if let Ok(interval) = poll_interval.parse::<u64>() {
            opts.poll_interval_ms = interval;
        }
    }

    tracing::info!("Configuration:");
    tracing::info!("  Indexer URL: {}", opts.indexer_url);
    tracing::info!("  Chain ID: {}", opts.chain_id);
    tracing::info!("  Page Size: {}", opts.page_size);
    tracing::info!("  Poll Interval (ms): {}", opts.poll_interval_ms);

    let viewer = Viewer::new(opts);
    viewer.run().await?;

    Ok(())
}
