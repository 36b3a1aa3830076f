pub mod error;

pub use error::ClientError;

use hyper::client::HttpConnector;
use hyper::{Body, Client, Request, StatusCode};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use serde::de::DeserializeOwned;

use crate::entities::{Block, Chain, ListBlock, Transaction, TransactionDetail};

/// Read-only client for the chainscan indexer API.
///
/// Every operation is a single request/response round trip: no caching, no
/// retries, no shared state between calls. Staleness handling belongs to the
/// polling layer, not here.
#[allow(clippy::module_name_repetitions)]
pub struct IndexerClient {
    client: Client<HttpsConnector<HttpConnector>>,
    base_url: String,
}

impl IndexerClient {
    /// Create a client against the given base address, e.g.
    /// `http://localhost:1337` or an https deployment URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let https = HttpsConnectorBuilder::new()
            .with_native_roots()
            .https_or_http()
            .enable_http1()
            .enable_http2()
            .build();

        let client = Client::builder().build(https);
        let base_url = base_url.trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    /// Returns every chain registered with the indexer.
    ///
    /// # Errors
    /// Returns an error if the request fails or the response deviates from
    /// the wire contract.
    pub async fn all_chains(&self) -> Result<Vec<Chain>, ClientError> {
        self.get_json("/api/chains/all").await
    }

    /// Returns the most recent block the indexer holds for the chain.
    ///
    /// # Errors
    /// `NotFound` if the chain is unregistered or has no blocks yet.
    pub async fn latest_block(&self, chain_id: i32) -> Result<Block, ClientError> {
        self.get_json(&format!("/api/block/latest_block/{chain_id}"))
            .await
    }

    /// Returns one window of the chain's blocks, most recent first.
    ///
    /// `limit` must be positive and `offset` non-negative; the indexer
    /// rejects anything else. `total` in the result counts the whole chain,
    /// not the window.
    ///
    /// # Errors
    /// `NotFound` if the chain is unregistered.
    pub async fn list_blocks(
        &self,
        chain_id: i32,
        limit: i64,
        offset: i64,
    ) -> Result<ListBlock, ClientError> {
        self.get_json(&format!(
            "/api/block/list/{chain_id}?limit={limit}&offset={offset}"
        ))
        .await
    }

    /// Returns a block by height.
    ///
    /// # Errors
    /// A height beyond the chain's current tip is `NotFound`, never a
    /// zero-valued block.
    pub async fn get_block(&self, chain_id: i32, height: i64) -> Result<Block, ClientError> {
        self.get_json(&format!("/api/block/{chain_id}/{height}"))
            .await
    }

    /// Returns all transactions included in the given block, in execution
    /// order. A block without transactions yields an empty vec, not an error.
    ///
    /// # Errors
    /// `NotFound` if the chain or the block does not exist.
    pub async fn list_transactions(
        &self,
        chain_id: i32,
        height: i64,
    ) -> Result<Vec<Transaction>, ClientError> {
        self.get_json(&format!("/api/tx/list/{chain_id}/{height}"))
            .await
    }

    /// Returns a transaction by hash, together with its events and messages.
    ///
    /// # Errors
    /// `NotFound` if no transaction with that hash has been indexed.
    pub async fn get_transaction(&self, tx_hash: &str) -> Result<TransactionDetail, ClientError> {
        self.get_json(&format!("/api/tx/{tx_hash}")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let uri = format!("{}{}", self.base_url, path);
        let req = Request::builder()
            .method("GET")
            .uri(uri.as_str())
            .header("accept", "application/json")
            .body(Body::empty())
            .map_err(|e| ClientError::Transient(format!("{uri}: {e}")))?;

        let resp = self
            .client
            .request(req)
            .await
            .map_err(|e| ClientError::Transient(format!("{uri}: {e}")))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(path.to_string()));
        }
        if status.is_server_error() {
            return Err(ClientError::Transient(format!("{path}: HTTP {status}")));
        }
        if !status.is_success() {
            return Err(ClientError::Malformed(format!(
                "{path}: unexpected HTTP {status}"
            )));
        }

        let body = hyper::body::to_bytes(resp.into_body())
            .await
            .map_err(|e| ClientError::Transient(format!("{path}: {e}")))?;

        serde_json::from_slice(&body).map_err(|e| ClientError::Malformed(format!("{path}: {e}")))
    }
}
