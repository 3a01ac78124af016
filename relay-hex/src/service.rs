//! Relay Application Service
//!
//! Runs the notification pipeline: parse, validate, filter, derive, send.
//! Contains NO transport logic - the bill leaves through the `BillSink` port.

use serde_json::Value;
use tracing::{info, warn};

use relay_types::domain::notification;
use relay_types::{Bill, BillSink, DownstreamReply, Payer, RelayError, TransactionRecord};

/// Result of a notification that made it through validation.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayOutcome {
    /// The bill was sent; carries IHM's answer whatever its status.
    Relayed(DownstreamReply),
    /// The transaction is not from a relayed source. Nothing was sent.
    Skipped,
}

/// Decodes a webhook body. The raw body is only logged, never returned.
pub fn parse_notification(body: &[u8]) -> Result<Value, RelayError> {
    match serde_json::from_slice(body) {
        Ok(value) => {
            info!("JSON successfully parsed");
            Ok(value)
        }
        Err(e) => {
            warn!(error = %e, "Failed to parse JSON");
            info!("Raw body was:\n{}", String::from_utf8_lossy(body));
            Err(RelayError::InvalidJson(e.to_string()))
        }
    }
}

/// Application service for relaying Firefly transactions to IHM.
///
/// Generic over `S: BillSink` - the outbound adapter is injected at
/// compile time, so tests can swap in a recording sink.
pub struct RelayService<S: BillSink> {
    sink: S,
    reject_unknown_payer: bool,
}

impl<S: BillSink> RelayService<S> {
    /// Creates a relay service that forwards bills with unknown payers.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            reject_unknown_payer: false,
        }
    }

    /// Refuse bills whose payer cannot be derived instead of forwarding them.
    pub fn reject_unknown_payer(mut self, reject: bool) -> Self {
        self.reject_unknown_payer = reject;
        self
    }

    /// Returns a reference to the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Relays one parsed notification.
    ///
    /// Only the first transaction is considered. Any failure after the
    /// structure check is returned as `RelayError::Failed` carrying the
    /// notification, so the caller can echo it.
    #[tracing::instrument(skip_all)]
    pub async fn relay(&self, payload: Value) -> Result<RelayOutcome, RelayError> {
        let Some(transactions) = notification::transactions(&payload) else {
            info!("Missing expected 'content.transactions' structure");
            return Err(RelayError::InvalidStructure);
        };

        let record = match notification::first_transaction(transactions)
            .and_then(TransactionRecord::from_value)
        {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "Error while processing webhook");
                return Err(RelayError::failed(e, payload));
            }
        };

        if !record.is_relayable() {
            info!(source_name = %record.source_name, "Transaction skipped. Not a Sodexo transaction");
            return Ok(RelayOutcome::Skipped);
        }

        let bill = Bill::from_record(&record);
        if bill.payer == Payer::Unknown {
            if self.reject_unknown_payer {
                warn!(source_name = %record.source_name, "Rejecting bill with unknown payer");
                return Err(RelayError::UnknownPayer {
                    source_name: record.source_name,
                });
            }
            warn!(source_name = %record.source_name, "No payer matched, forwarding as Unknown");
        }

        info!(
            "Sending payload to IHM:\n{}",
            serde_json::to_string_pretty(&bill).unwrap_or_default()
        );

        match self.sink.submit(&bill).await {
            Ok(reply) => {
                info!(status = reply.status, "IHM answered");
                Ok(RelayOutcome::Relayed(reply))
            }
            Err(e) => {
                warn!(error = %e, "Error while sending bill to IHM");
                Err(RelayError::failed(e, payload))
            }
        }
    }
}
