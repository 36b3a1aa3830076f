use thiserror::Error;

/// Everything the indexer can do wrong, from the caller's point of view.
///
/// The client never recovers locally; each failure surfaces as one of these
/// three kinds so a caller can tell "empty by design" apart from "request
/// failed". Retrying a [`ClientError::Transient`] is the caller's choice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The resource does not exist at the current chain state.
    #[error("not found: {0}")]
    NotFound(String),

    /// Network failure, timeout, or a 5xx from the indexer.
    #[error("indexer unavailable: {0}")]
    Transient(String),

    /// The response deviates from the wire contract: an unexpected status or
    /// a body that does not decode into the entity model.
    #[error("malformed response: {0}")]
    Malformed(String),
}
