use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

/// unique identifier for a payment record
pub type PaymentId = Uuid;

/// bucket key for records whose building code is blank
pub const UNKNOWN_BUILDING: &str = "unknown";

/// how the rent was received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Upi,
    BankTransfer,
    Cheque,
}

/// settlement state, recomputed on every pass and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementState {
    /// nothing received and a balance remains
    Unpaid,
    /// something received, less than the total owed
    PartiallyPaid,
    /// balance cleared (or overpaid, signalled by a negative balance)
    Settled,
}

/// collection urgency tier, ordered from none to critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Urgency {
    /// not overdue
    None,
    Low,
    Medium,
    High,
    Critical,
}

/// a record excluded from a batch pass, with the reason it was rejected
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    pub payment_id: PaymentId,
    pub student_id: String,
    pub reason: LedgerError,
}
