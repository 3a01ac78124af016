//! # Relay Hex
//!
//! Application service layer and HTTP adapter for the bill relay.
//!
//! ## Architecture
//!
//! - `service/` - Relay pipeline (parse, validate, filter, derive, send)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served by the adapter
//!
//! The service is generic over `S: BillSink`, allowing different outbound
//! implementations to be injected.

pub mod inbound;
mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use openapi::ApiDoc;
pub use service::{RelayOutcome, RelayService, parse_notification};
