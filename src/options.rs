use clap::Parser;

#[derive(Parser, Clone, Debug)]
#[command(version, about = "Chainscan Viewer")]
pub struct ViewerOptions {
    /// The base URL of the indexer API
    #[arg(
        short = 'u',
        long,
        default_value = "http://localhost:1337",
        env = "CHAINSCAN_INDEXER_URL"
    )]
    pub indexer_url: String,

    /// The surrogate id of the chain to watch
    #[arg(long, default_value = "1", env = "CHAINSCAN_CHAIN_ID")]
    pub chain_id: i32,

    /// The number of blocks per list window
    #[arg(long, default_value = "10", env = "CHAINSCAN_PAGE_SIZE")]
    pub page_size: i64,

    /// The interval in milliseconds to poll the indexer for fresh data
    #[arg(long, default_value = "2500", env = "CHAINSCAN_POLL_INTERVAL_MS")]
    pub poll_interval_ms: u64,
}
