//! Bill sink port.
//!
//! Where relayed bills go. The production adapter is the IHM HTTP client;
//! tests plug in recording sinks.

use serde_json::Value;

use crate::domain::Bill;
use crate::error::SinkError;

/// What the downstream service answered.
#[derive(Debug, Clone, PartialEq)]
pub struct DownstreamReply {
    /// HTTP status code, reported back as-is even when it is not 2xx.
    pub status: u16,
    /// Parsed JSON body.
    pub body: Value,
}

/// Port trait for bill destinations.
#[async_trait::async_trait]
pub trait BillSink: Send + Sync + 'static {
    /// Submits one bill and returns the downstream's answer.
    async fn submit(&self, bill: &Bill) -> Result<DownstreamReply, SinkError>;
}
