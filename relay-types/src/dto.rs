//! Response bodies of the relay endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Reason reported for transactions that are not relayed.
pub const SKIP_REASON: &str = "Not a Sodexo transaction";

/// Body returned after the bill was handed to IHM.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RelayedResponse {
    /// HTTP status IHM answered with
    #[schema(example = 201)]
    pub status: u16,
    /// IHM's JSON body, verbatim
    #[schema(value_type = Object)]
    pub ihm_response: Value,
}

/// Body returned when the transaction is filtered out.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SkippedResponse {
    #[schema(example = "skipped")]
    pub status: String,
    #[schema(example = "Not a Sodexo transaction")]
    pub reason: String,
}

impl SkippedResponse {
    pub fn not_relayed() -> Self {
        Self {
            status: "skipped".into(),
            reason: SKIP_REASON.into(),
        }
    }
}

/// Error body. Only the fields relevant to the failure are present.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Invalid structure")]
    pub error: String,
    /// Parser message for bodies that are not JSON
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Parsed inbound payload, echoed on processing failures
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub raw: Option<Value>,
    /// Lower-cased source account of a transaction with no known payer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            raw: None,
            source_name: None,
        }
    }
}
