//! Domain model of the relay.

pub mod bill;
pub mod notification;
pub mod transaction;

pub use bill::{Bill, PAYED_FOR, Payer, format_amount};
pub use transaction::{DEFAULT_DESCRIPTION, RELAYED_SOURCE, TransactionRecord};
