//! # Relay Types
//!
//! Domain types and port traits for the Firefly III to IHateMoney bill relay.
//! This crate has ZERO IO dependencies - only data structures, business
//! rules, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Transaction record, payer rules, bill payload
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Response bodies of the HTTP endpoint
//! - `error/` - Domain, sink and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Bill, Payer, TransactionRecord};
pub use dto::*;
pub use error::{DomainError, RelayError, SinkError};
pub use ports::{BillSink, DownstreamReply};
