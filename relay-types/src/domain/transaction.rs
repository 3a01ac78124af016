//! Transaction record as read from a Firefly III notification.

use serde::Serialize;
use serde_json::Value;

use crate::error::DomainError;

/// Description used when the transaction carries none.
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// Only transactions whose source mentions this are relayed.
pub const RELAYED_SOURCE: &str = "sodexo";

/// The fields of a Firefly transaction the relay cares about.
///
/// Built from one element of `content.transactions`; every other field of
/// the element is ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub description: String,
    /// Absolute value of the transaction amount.
    pub amount: f64,
    /// Lower-cased source account name.
    pub source_name: String,
}

impl TransactionRecord {
    /// Reads a record from a JSON transaction object, applying defaults for
    /// missing fields.
    pub fn from_value(value: &Value) -> Result<Self, DomainError> {
        let fields = value.as_object().ok_or(DomainError::TransactionNotAnObject)?;

        let description = match fields.get("description") {
            None | Some(Value::Null) => DEFAULT_DESCRIPTION.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };

        let amount = match fields.get("amount") {
            None => 0.0,
            Some(v) => parse_amount(v)?,
        };

        let source_name = match fields.get("source_name") {
            None => String::new(),
            Some(Value::String(s)) => s.to_lowercase(),
            Some(other) => return Err(DomainError::InvalidSourceName(kind(other).into())),
        };

        Ok(Self {
            description,
            amount: amount.abs(),
            source_name,
        })
    }

    /// Whether this transaction should be forwarded at all.
    pub fn is_relayable(&self) -> bool {
        self.source_name.contains(RELAYED_SOURCE)
    }
}

/// Amounts arrive either as JSON numbers or as numeric strings ("-12.30").
fn parse_amount(value: &Value) -> Result<f64, DomainError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| DomainError::InvalidAmount(n.to_string())),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| DomainError::InvalidAmount(format!("'{}'", s))),
        other => Err(DomainError::InvalidAmount(kind(other).into())),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
