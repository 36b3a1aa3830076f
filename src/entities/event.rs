use serde::{Deserialize, Serialize};

pub const TX_TYPE_TRANSACTION: i16 = 1;
pub const TX_TYPE_BEGIN_BLOCK: i16 = 2;
pub const TX_TYPE_END_BLOCK: i16 = 3;

/// A key/value attribute emitted during transaction execution.
///
/// Events belong to a transaction and are ordered by `event_seq`, which is
/// unique within the owning `tx_hash`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub tx_hash: String,
    pub tx_type: i16,
    pub event_seq: i32,
    pub event_type: String,
    pub event_key: String,
    pub event_value: String,
    pub indexed: bool,
}
