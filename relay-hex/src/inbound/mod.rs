//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that receives Firefly III webhooks.

pub(crate) mod handlers;
mod server;

pub use server::HttpServer;
