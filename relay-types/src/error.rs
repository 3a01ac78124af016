//! Error types for the relay.

use std::time::Duration;

use serde_json::Value;

/// Domain-level errors (the transaction record could not be interpreted).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("transactions list is empty")]
    EmptyTransactions,

    #[error("transactions must be a list")]
    TransactionsNotAList,

    #[error("transaction must be an object")]
    TransactionNotAnObject,

    #[error("could not convert amount to float: {0}")]
    InvalidAmount(String),

    #[error("source_name must be text, got {0}")]
    InvalidSourceName(String),
}

/// Errors raised while handing a bill to the downstream service.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid response from IHM (status {status}): {message}")]
    InvalidResponse { status: u16, message: String },
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to the relay's response taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Body is not valid JSON. The parser message is kept for the caller.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Parsed body lacks `content.transactions`.
    #[error("Invalid structure")]
    InvalidStructure,

    /// Relayable transaction whose payer could not be identified.
    #[error("Unknown payer for source '{source_name}'")]
    UnknownPayer { source_name: String },

    /// Any failure after the body was parsed. `raw` is the parsed payload.
    #[error("{message}")]
    Failed { message: String, raw: Value },
}

impl RelayError {
    /// Wraps a post-parse failure together with the payload it happened on.
    pub fn failed(err: impl std::fmt::Display, raw: Value) -> Self {
        RelayError::Failed {
            message: err.to_string(),
            raw,
        }
    }
}
