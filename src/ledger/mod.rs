pub mod summary;
pub mod urgency;

use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::config::UrgencyBands;
use crate::decimal::Money;
use crate::errors::Result;
use crate::record::PaymentRecord;
use crate::types::{SettlementState, Urgency};

pub use summary::{BuildingLedger, BuildingSummary, LedgerSummary, PeriodLedger, PeriodSummary};
pub use urgency::UrgencyQueue;

/// pure reconciliation engine over payment records
///
/// every derived field is recomputed from the money fields, the period,
/// and an explicit evaluation date; nothing is read back from stored
/// status columns, so callers can never observe drift between pages
#[derive(Debug, Clone, Copy, Default)]
pub struct LedgerEngine {
    pub bands: UrgencyBands,
}

/// a payment record plus everything derived from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedPayment {
    pub record: PaymentRecord,
    pub total_owed: Money,
    pub balance: Money,
    pub due_date: NaiveDate,
    pub settlement_state: SettlementState,
    pub is_overdue: bool,
    pub days_overdue: u32,
    pub urgency: Urgency,
}

impl EnrichedPayment {
    /// negative balance; display layers may label this "Overpaid"
    pub fn is_overpaid(&self) -> bool {
        self.balance.is_negative()
    }
}

impl LedgerEngine {
    pub fn new(bands: UrgencyBands) -> Self {
        Self { bands }
    }

    /// enrich a single record as of the given date
    ///
    /// rejects negative monetary fields; valid inputs never fail
    pub fn compute(
        &self,
        record: &PaymentRecord,
        evaluation_date: NaiveDate,
    ) -> Result<EnrichedPayment> {
        record.validate()?;

        let total_owed = record.total_owed();
        let balance = total_owed - record.amount_paid;

        let settlement_state = if balance <= Money::ZERO {
            SettlementState::Settled
        } else if record.amount_paid.is_zero() {
            SettlementState::Unpaid
        } else {
            SettlementState::PartiallyPaid
        };

        // overdue is judged purely against the period's month-end due date;
        // payment_date plays no part
        let due_date = record.period.due_date();
        let days_overdue = (evaluation_date - due_date).num_days().max(0) as u32;
        let is_overdue = balance > Money::ZERO && evaluation_date > due_date;
        let urgency = if is_overdue {
            self.bands.classify(days_overdue)
        } else {
            Urgency::None
        };

        Ok(EnrichedPayment {
            record: record.clone(),
            total_owed,
            balance,
            due_date,
            settlement_state,
            is_overdue,
            days_overdue,
            urgency,
        })
    }

    /// enrich a single record as of the provider's current date
    pub fn compute_now(
        &self,
        record: &PaymentRecord,
        time: &SafeTimeProvider,
    ) -> Result<EnrichedPayment> {
        self.compute(record, time.now().date_naive())
    }

    /// aggregate a batch into per-building summaries; invalid records are
    /// skipped and reported, never fatal
    pub fn summarize_by_building(
        &self,
        records: &[PaymentRecord],
        evaluation_date: NaiveDate,
    ) -> BuildingLedger {
        summary::by_building(self, records, evaluation_date)
    }

    pub fn summarize_by_building_now(
        &self,
        records: &[PaymentRecord],
        time: &SafeTimeProvider,
    ) -> BuildingLedger {
        self.summarize_by_building(records, time.now().date_naive())
    }

    /// aggregate a batch into per-cycle summaries for month-over-month trends
    pub fn summarize_by_period(
        &self,
        records: &[PaymentRecord],
        evaluation_date: NaiveDate,
    ) -> PeriodLedger {
        summary::by_period(self, records, evaluation_date)
    }

    pub fn summarize_by_period_now(
        &self,
        records: &[PaymentRecord],
        time: &SafeTimeProvider,
    ) -> PeriodLedger {
        self.summarize_by_period(records, time.now().date_naive())
    }

    /// build the overdue collection queue, most urgent first
    pub fn classify_urgency(
        &self,
        records: &[PaymentRecord],
        evaluation_date: NaiveDate,
    ) -> UrgencyQueue {
        urgency::build_queue(self, records, evaluation_date)
    }

    pub fn classify_urgency_now(
        &self,
        records: &[PaymentRecord],
        time: &SafeTimeProvider,
    ) -> UrgencyQueue {
        self.classify_urgency(records, time.now().date_naive())
    }
}
