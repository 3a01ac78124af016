//! Navigation of the untyped Firefly III webhook body.
//!
//! The body is kept as a `serde_json::Value` rather than a typed struct:
//! only key presence is checked, and the parsed value is echoed back to the
//! caller when processing fails.

use serde_json::Value;

use crate::error::DomainError;

/// Returns `content.transactions`, or `None` when either key is missing.
pub fn transactions(notification: &Value) -> Option<&Value> {
    notification.get("content")?.get("transactions")
}

/// First transaction of the list. Further transactions are ignored.
pub fn first_transaction(transactions: &Value) -> Result<&Value, DomainError> {
    transactions
        .as_array()
        .ok_or(DomainError::TransactionsNotAList)?
        .first()
        .ok_or(DomainError::EmptyTransactions)
}
