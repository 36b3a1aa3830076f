use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

pub const MSG_SEND: &str = "/cosmos.bank.v1beta1.MsgSend";
pub const MSG_DELEGATE: &str = "/cosmos.staking.v1beta1.MsgDelegate";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSend {
    pub from_address: String,
    pub to_address: String,
    pub amount: Vec<Coin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgDelegate {
    pub delegator_address: String,
    pub validator_address: String,
    pub amount: Coin,
}

/// A message carried by a transaction, discriminated by its `type` tag.
///
/// New on-chain message types appear faster than this model can learn them,
/// so anything without a typed variant lands in [`Message::Unknown`] with the
/// raw record preserved verbatim. Serializing an Unknown message emits that
/// record back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Send(MsgSend),
    Delegate(MsgDelegate),
    Unknown { type_url: String, body: Value },
}

impl Message {
    pub fn type_url(&self) -> &str {
        match self {
            Message::Send(_) => MSG_SEND,
            Message::Delegate(_) => MSG_DELEGATE,
            Message::Unknown { type_url, .. } => type_url,
        }
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let type_url = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| D::Error::custom("message is missing its type tag"))?
            .to_string();

        match type_url.as_str() {
            MSG_SEND => serde_json::from_value(value)
                .map(Message::Send)
                .map_err(D::Error::custom),
            MSG_DELEGATE => serde_json::from_value(value)
                .map(Message::Delegate)
                .map_err(D::Error::custom),
            _ => Ok(Message::Unknown {
                type_url,
                body: value,
            }),
        }
    }
}

impl Serialize for Message {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = match self {
            Message::Send(msg) => tagged(MSG_SEND, msg).map_err(S::Error::custom)?,
            Message::Delegate(msg) => tagged(MSG_DELEGATE, msg).map_err(S::Error::custom)?,
            Message::Unknown { type_url, body } => {
                let mut value = body.clone();
                if let Some(obj) = value.as_object_mut() {
                    obj.entry("type")
                        .or_insert_with(|| Value::String(type_url.clone()));
                }
                value
            }
        };

        value.serialize(serializer)
    }
}

fn tagged<T: Serialize>(type_url: &str, msg: &T) -> Result<Value, serde_json::Error> {
    let mut value = serde_json::to_value(msg)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("type".to_string(), Value::String(type_url.to_string()));
    }
    Ok(value)
}
