pub mod block;
pub mod chain;
pub mod event;
pub mod message;
pub mod transaction;

pub use block::{Block, ListBlock};
pub use chain::Chain;
pub use event::{Event, TX_TYPE_BEGIN_BLOCK, TX_TYPE_END_BLOCK, TX_TYPE_TRANSACTION};
pub use message::{Coin, Message, MsgDelegate, MsgSend};
pub use transaction::{ListTransaction, Transaction, TransactionDetail};
