use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Event, Message};

/// A transaction included in a block.
///
/// `code` 0 means the transaction succeeded; any other value is a
/// chain-defined failure code namespaced by `code_space`. `gas_wanted` and
/// `gas_used` carry no ordering guarantee (used can exceed wanted on failure
/// paths) and are passed through without interpretation, as is `tx_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i32,
    pub chain_id: i32,
    pub transaction_hash: String,
    pub height: i64,
    pub code: i32,
    pub code_space: String,
    pub tx_data: String,
    pub raw_log: String,
    pub info: String,
    #[serde(default)]
    pub memo: String,
    pub gas_wanted: i64,
    pub gas_used: i64,
    pub tx_timestamp: NaiveDateTime,
    pub inserted_at: NaiveDateTime,
}

/// One window of a chain's transactions, newest block first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListTransaction {
    pub total: i64,
    pub transactions: Vec<Transaction>,
}

/// The aggregate served for a single-transaction lookup: the transaction
/// together with its events (ordered by `event_seq`) and its messages in
/// execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetail {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub events: Vec<Event>,
    pub messages: Vec<Message>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Message;
    use serde_json::json;

    fn tx_json() -> serde_json::Value {
        json!({
            "id": 7,
            "chain_id": 1,
            "transaction_hash": "A54541906F4A716726DDF6F3A11467D0D5918FD17C808B48C5C8E1EEE7AAC385",
            "height": 500,
            "code": 0,
            "code_space": "",
            "tx_data": "CpMBCpABChwvY29zbW9zLmJhbmsudjFiZXRhMS5Nc2dTZW5k",
            "raw_log": "[]",
            "info": "",
            "memo": "ibc transfer",
            "gas_wanted": 200000,
            "gas_used": 81342,
            "tx_timestamp": "2023-06-01T12:00:00",
            "inserted_at": "2023-06-01T12:00:03"
        })
    }

    #[test]
    fn test_transaction_deserializes_wire_fields() {
        let tx: Transaction = serde_json::from_value(tx_json()).unwrap();

        assert_eq!(tx.height, 500);
        assert_eq!(tx.code, 0);
        assert_eq!(tx.memo, "ibc transfer");
        assert_eq!(tx.gas_wanted, 200000);
    }

    #[test]
    fn test_transaction_memo_defaults_to_empty_when_absent() {
        let mut value = tx_json();
        value.as_object_mut().unwrap().remove("memo");

        let tx: Transaction = serde_json::from_value(value).unwrap();
        assert_eq!(tx.memo, "");
    }

    #[test]
    fn test_list_transaction_total_is_independent_of_window() {
        let list: ListTransaction = serde_json::from_value(json!({
            "total": 120,
            "transactions": [tx_json()]
        }))
        .unwrap();

        assert_eq!(list.total, 120);
        assert_eq!(list.transactions.len(), 1);
    }

    #[test]
    fn test_transaction_detail_flattens_transaction_fields() {
        let mut value = tx_json();
        let obj = value.as_object_mut().unwrap();
        obj.insert(
            "events".to_string(),
            json!([{
                "tx_hash": "A54541906F4A716726DDF6F3A11467D0D5918FD17C808B48C5C8E1EEE7AAC385",
                "tx_type": 1,
                "event_seq": 0,
                "event_type": "transfer",
                "event_key": "amount",
                "event_value": "1000uatom",
                "indexed": true
            }]),
        );
        obj.insert(
            "messages".to_string(),
            json!([{
                "type": "/cosmos.bank.v1beta1.MsgSend",
                "from_address": "cosmos1aaa",
                "to_address": "cosmos1bbb",
                "amount": [{"denom": "uatom", "amount": "1000"}]
            }]),
        );

        let detail: TransactionDetail = serde_json::from_value(value).unwrap();

        assert_eq!(detail.transaction.height, 500);
        assert_eq!(detail.events.len(), 1);
        assert_eq!(detail.events[0].event_seq, 0);
        assert!(matches!(detail.messages[0], Message::Send(_)));

        // flatten puts the transaction fields back at the top level
        let back = serde_json::to_value(&detail).unwrap();
        assert_eq!(back["height"], 500);
        assert_eq!(back["events"][0]["event_type"], "transfer");
    }
}
