//! Port traits (interfaces for adapters).
//!
//! The relay service depends on these traits, not on concrete clients.

mod bill_sink;

pub use bill_sink::{BillSink, DownstreamReply};
