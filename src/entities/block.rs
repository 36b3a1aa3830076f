use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A committed block as served by the indexer.
///
/// Write-once: once ingested the indexer never mutates a block, so repeated
/// lookups at the same height return identical values. Heights are strictly
/// increasing per chain and `prev_hash` chains back to the previous height's
/// `block_hash` everywhere except the genesis height. The digest fields are
/// opaque, chain-defined hex strings and are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: i32,
    pub chain_id: i32,
    pub height: i64,
    pub block_hash: String,
    pub prev_hash: String,
    pub proposer_address: String,
    pub last_commit_hash: String,
    pub data_hash: String,
    pub validator_hash: String,
    pub next_validator_hash: String,
    pub consensus_hash: String,
    pub app_hash: String,
    pub last_results_hash: String,
    pub evidence_hash: String,
    pub block_time: NaiveDateTime,
    pub inserted_at: NaiveDateTime,
}

/// One window of a chain's blocks, most recent first.
///
/// `total` counts every block the indexer holds for the chain, independent of
/// the requested window, so pagination controls can be rendered from any page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBlock {
    pub total: i64,
    pub blocks: Vec<Block>,
}
