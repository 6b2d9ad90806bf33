use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::period::Period;
use crate::types::{PaymentId, PaymentMethod};

/// one rent cycle for one student, as loaded from the data store
///
/// at most one record should exist per (student_id, period) pair;
/// see [`duplicate_periods`] for checking a batch before persisting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub payment_id: PaymentId,
    pub student_id: String,
    pub building_code: String,
    pub period: Period,
    pub amount_due: Money,
    pub amount_paid: Money,
    pub late_fee: Money,
    /// date the payment was recorded; absent when nothing has been received.
    /// overdue status is judged from the period's due date, never from this
    pub payment_date: Option<NaiveDate>,
    pub method: PaymentMethod,
    pub notes: Option<String>,
    /// display label carried over from the admin ui; never fed into arithmetic
    pub status_label: Option<String>,
}

impl PaymentRecord {
    /// create a fresh, unpaid record for a rent cycle
    pub fn new(
        student_id: impl Into<String>,
        building_code: impl Into<String>,
        period: Period,
        amount_due: Money,
        method: PaymentMethod,
    ) -> Self {
        Self {
            payment_id: Uuid::new_v4(),
            student_id: student_id.into(),
            building_code: building_code.into(),
            period,
            amount_due,
            amount_paid: Money::ZERO,
            late_fee: Money::ZERO,
            payment_date: None,
            method,
            notes: None,
            status_label: None,
        }
    }

    /// reject negative monetary fields rather than silently clamping them
    pub fn validate(&self) -> Result<()> {
        for (field, amount) in [
            ("amount_due", self.amount_due),
            ("amount_paid", self.amount_paid),
            ("late_fee", self.late_fee),
        ] {
            if amount.is_negative() {
                return Err(LedgerError::NegativeAmount { field, amount });
            }
        }
        Ok(())
    }

    /// rent plus late fee for the cycle
    pub fn total_owed(&self) -> Money {
        self.amount_due + self.late_fee
    }
}

/// find (student_id, period) pairs billed more than once in a batch
pub fn duplicate_periods(records: &[PaymentRecord]) -> Vec<(String, Period)> {
    let mut counts: BTreeMap<(&str, Period), u32> = BTreeMap::new();
    for record in records {
        *counts
            .entry((record.student_id.as_str(), record.period))
            .or_insert(0) += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|((student_id, period), _)| (student_id.to_string(), period))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(student: &str, period: &str) -> PaymentRecord {
        PaymentRecord::new(
            student,
            "A",
            period.parse().unwrap(),
            Money::from_major(7_000),
            PaymentMethod::Upi,
        )
    }

    #[test]
    fn test_new_record_is_unpaid() {
        let r = record("S001", "2024-03");
        assert_eq!(r.amount_paid, Money::ZERO);
        assert_eq!(r.late_fee, Money::ZERO);
        assert!(r.payment_date.is_none());
        assert_eq!(r.total_owed(), Money::from_major(7_000));
    }

    #[test]
    fn test_validate_rejects_negative_amounts() {
        let mut r = record("S001", "2024-03");
        r.amount_paid = Money::from_major(-500);

        assert_eq!(
            r.validate(),
            Err(LedgerError::NegativeAmount {
                field: "amount_paid",
                amount: Money::from_major(-500),
            })
        );

        r.amount_paid = Money::ZERO;
        assert!(r.validate().is_ok());
    }

    #[test]
    fn test_duplicate_periods() {
        let records = vec![
            record("S001", "2024-03"),
            record("S002", "2024-03"),
            record("S001", "2024-03"), // double billed
            record("S001", "2024-04"),
        ];

        let dupes = duplicate_periods(&records);
        assert_eq!(dupes.len(), 1);
        assert_eq!(dupes[0].0, "S001");
        assert_eq!(dupes[0].1.to_string(), "2024-03");
    }

    #[test]
    fn test_serde_round_trip() {
        let mut r = record("S001", "2024-03");
        r.amount_paid = Money::from_major(3_000);
        r.payment_date = NaiveDate::from_ymd_opt(2024, 3, 5);
        r.notes = Some("paid at front desk".to_string());

        let json = serde_json::to_string(&r).unwrap();
        let back: PaymentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
