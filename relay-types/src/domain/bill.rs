//! Bill payload sent to IHateMoney.

use serde::{Serialize, Serializer};
use std::fmt;

use super::transaction::TransactionRecord;

/// Who paid for a bill, as known to the IHM project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Payer {
    Matteo,
    Giulia,
    /// Neither name appears in the source account. Forwarded as the literal
    /// `"Unknown"` unless the relay is configured to reject it.
    Unknown,
}

impl Payer {
    /// Derives the payer from a lower-cased source account name.
    ///
    /// "matteo" wins over "giulia" when both appear.
    pub fn from_source_name(source_name: &str) -> Self {
        if source_name.contains("matteo") {
            Payer::Matteo
        } else if source_name.contains("giulia") {
            Payer::Giulia
        } else {
            Payer::Unknown
        }
    }

    /// IHM member id, if the payer is a known member.
    pub fn id(&self) -> Option<u32> {
        match self {
            Payer::Matteo => Some(5),
            Payer::Giulia => Some(6),
            Payer::Unknown => None,
        }
    }

    /// Value as it appears in the form body.
    pub fn form_value(&self) -> String {
        match self.id() {
            Some(id) => id.to_string(),
            None => "Unknown".to_string(),
        }
    }
}

impl fmt::Display for Payer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.form_value())
    }
}

impl Serialize for Payer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.id() {
            Some(id) => serializer.serialize_u32(id),
            None => serializer.serialize_str("Unknown"),
        }
    }
}

/// Every bill is split between both members, whoever paid.
pub const PAYED_FOR: [Payer; 2] = [Payer::Matteo, Payer::Giulia];

/// Outbound bill. Built once per relayed transaction and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bill {
    pub what: String,
    pub amount: f64,
    pub payer: Payer,
    pub payed_for: Vec<Payer>,
}

impl Bill {
    pub fn from_record(record: &TransactionRecord) -> Self {
        Self {
            what: record.description.clone(),
            amount: record.amount,
            payer: Payer::from_source_name(&record.source_name),
            payed_for: PAYED_FOR.to_vec(),
        }
    }

    /// Flattens the bill into ordered form pairs. List fields become one
    /// pair per element, all sharing the field name.
    pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("what", self.what.clone()),
            ("amount", format_amount(self.amount)),
            ("payer", self.payer.form_value()),
        ];
        pairs.extend(self.payed_for.iter().map(|p| ("payed_for", p.form_value())));
        pairs
    }
}

/// Renders an amount the way IHM has always received it: integral values
/// keep one decimal ("42.0"), others use the shortest exact form ("12.3").
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 && amount.abs() < 1e16 {
        format!("{:.1}", amount)
    } else {
        amount.to_string()
    }
}
