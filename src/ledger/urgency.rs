use chrono::NaiveDate;
use serde::Serialize;

use crate::ledger::{EnrichedPayment, LedgerEngine};
use crate::record::PaymentRecord;
use crate::types::SkippedRecord;

/// the overdue collection queue operators work from, most urgent first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrgencyQueue {
    /// overdue payments sorted by urgency tier, then days overdue, then
    /// balance, all descending
    pub entries: Vec<EnrichedPayment>,
    pub skipped: Vec<SkippedRecord>,
}

impl UrgencyQueue {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub(crate) fn build_queue(
    engine: &LedgerEngine,
    records: &[PaymentRecord],
    evaluation_date: NaiveDate,
) -> UrgencyQueue {
    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    for record in records {
        match engine.compute(record, evaluation_date) {
            Ok(enriched) if enriched.is_overdue => entries.push(enriched),
            Ok(_) => {}
            Err(reason) => skipped.push(SkippedRecord {
                payment_id: record.payment_id,
                student_id: record.student_id.clone(),
                reason,
            }),
        }
    }

    // largest debts surface first among equally stale payments
    entries.sort_by(|a, b| {
        b.urgency
            .cmp(&a.urgency)
            .then(b.days_overdue.cmp(&a.days_overdue))
            .then(b.balance.cmp(&a.balance))
    });

    UrgencyQueue { entries, skipped }
}
