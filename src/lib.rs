pub mod client;
pub mod entities;
pub mod format;
pub mod options;
pub mod polling;

pub use options::ViewerOptions;

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio_stream::StreamExt;
use tracing::{error, info, warn};

use crate::client::IndexerClient;
use crate::entities::ListBlock;
use crate::polling::{PollingBinding, ViewState};

pub struct Viewer {
    options: ViewerOptions,
}

impl Viewer {
    pub fn new(options: ViewerOptions) -> Self {
        Self { options }
    }

    /// Watch the configured chain: bind a recent-blocks query to the polling
    /// layer and log every new tip (with its transactions) until ctrl-c.
    pub async fn run(&self) -> Result<()> {
        let client = Arc::new(IndexerClient::new(&self.options.indexer_url));

        let chains = client
            .all_chains()
            .await
            .context("Failed to load the chain registry from the indexer")?;
        let chain = chains
            .iter()
            .find(|c| c.id == self.options.chain_id)
            .with_context(|| {
                format!(
                    "Chain {} is not registered with the indexer",
                    self.options.chain_id
                )
            })?;
        info!("Watching {} ({})", chain.chain_name, chain.chain_id);

        let blocks = {
            let client = client.clone();
            let page_size = self.options.page_size;
            PollingBinding::spawn(
                self.options.chain_id,
                Duration::from_millis(self.options.poll_interval_ms),
                move |chain_id| {
                    let client = client.clone();
                    async move { client.list_blocks(chain_id, page_size, 0).await }
                },
            )
        };

        let mut updates = blocks.updates();
        let mut shown_tip: Option<i64> = None;

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutting down");
                    break;
                }
                update = updates.next() => {
                    match update {
                        Some(state) => self.show(&client, &state, &mut shown_tip).await,
                        None => break,
                    }
                }
            }
        }

        blocks.deactivate();

        Ok(())
    }

    async fn show(
        &self,
        client: &IndexerClient,
        state: &ViewState<ListBlock>,
        shown_tip: &mut Option<i64>,
    ) {
        match state {
            ViewState::Pending => info!("Loading recent blocks..."),
            ViewState::Refreshing(_) => {}
            ViewState::Failed(err) => error!("Failed to load blocks: {err}"),
            ViewState::Ready(list) => {
                let Some(tip) = list.blocks.first() else {
                    info!("No blocks indexed yet");
                    return;
                };
                if *shown_tip == Some(tip.height) {
                    return;
                }
                *shown_tip = Some(tip.height);

                info!(
                    "Block {} {} proposed by {} at {} ({} blocks total)",
                    tip.height,
                    format::shorten(&tip.block_hash, 16),
                    format::shorten(&tip.proposer_address, 16),
                    tip.block_time,
                    list.total
                );

                match client
                    .list_transactions(self.options.chain_id, tip.height)
                    .await
                {
                    Ok(txs) if txs.is_empty() => info!("  no transactions in this block"),
                    Ok(txs) => {
                        for tx in &txs {
                            info!(
                                "  tx {} code={} gas {}/{}",
                                format::shorten(&tx.transaction_hash, 16),
                                tx.code,
                                tx.gas_used,
                                tx.gas_wanted
                            );
                        }
                    }
                    Err(err) => {
                        warn!("Failed to load transactions for block {}: {err}", tip.height);
                    }
                }
            }
        }
    }
}
