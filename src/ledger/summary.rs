use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::decimal::{Money, Rate};
use crate::ledger::{EnrichedPayment, LedgerEngine};
use crate::period::Period;
use crate::record::PaymentRecord;
use crate::types::{SkippedRecord, UNKNOWN_BUILDING};

/// aggregate figures for one bucket of payment records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub record_count: u32,
    /// sum of amount_paid
    pub collected: Money,
    /// sum of amount_due + late_fee
    pub total_owed: Money,
    /// sum of positive balances only; overpayments do not offset other debts
    pub pending_total: Money,
    pub late_fee_count: u32,
    pub late_fee_total: Money,
    /// collected / total_owed; a bucket with nothing owed counts as 100%
    pub collection_rate: Rate,
}

impl LedgerSummary {
    /// zero-valued summary; nothing owed, so fully collected
    pub fn empty() -> Self {
        Self {
            record_count: 0,
            collected: Money::ZERO,
            total_owed: Money::ZERO,
            pending_total: Money::ZERO,
            late_fee_count: 0,
            late_fee_total: Money::ZERO,
            collection_rate: Rate::ONE,
        }
    }

    fn push(&mut self, enriched: &EnrichedPayment) {
        self.record_count += 1;
        self.collected += enriched.record.amount_paid;
        self.total_owed += enriched.total_owed;
        if enriched.balance > Money::ZERO {
            self.pending_total += enriched.balance;
        }
        if enriched.record.late_fee > Money::ZERO {
            self.late_fee_count += 1;
            self.late_fee_total += enriched.record.late_fee;
        }
        self.collection_rate = Rate::ratio_or_full(self.collected, self.total_owed);
    }
}

impl Default for LedgerSummary {
    fn default() -> Self {
        Self::empty()
    }
}

/// same aggregation shape whether bucketed by building or by rent cycle
pub type BuildingSummary = LedgerSummary;
pub type PeriodSummary = LedgerSummary;

/// building-wise collection report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingLedger {
    pub buildings: BTreeMap<String, BuildingSummary>,
    /// grand totals across every valid record
    pub totals: LedgerSummary,
    pub skipped: Vec<SkippedRecord>,
}

/// month-wise collection report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodLedger {
    pub periods: BTreeMap<Period, PeriodSummary>,
    pub totals: LedgerSummary,
    pub skipped: Vec<SkippedRecord>,
}

impl PeriodLedger {
    /// month-over-month growth of collections, oldest first, starting from
    /// the second cycle present; growth over a zero base is reported as 0
    pub fn growth_rates(&self) -> Vec<(Period, Rate)> {
        let mut rates = Vec::new();
        let mut previous: Option<&PeriodSummary> = None;
        for (period, summary) in &self.periods {
            if let Some(prev) = previous {
                let rate = if prev.collected.is_zero() {
                    Rate::ZERO
                } else {
                    Rate::from_decimal(
                        (summary.collected - prev.collected).as_decimal()
                            / prev.collected.as_decimal(),
                    )
                };
                rates.push((*period, rate));
            }
            previous = Some(summary);
        }
        rates
    }
}

fn aggregate<K, F>(
    engine: &LedgerEngine,
    records: &[PaymentRecord],
    evaluation_date: NaiveDate,
    key_of: F,
) -> (BTreeMap<K, LedgerSummary>, LedgerSummary, Vec<SkippedRecord>)
where
    K: Ord,
    F: Fn(&PaymentRecord) -> K,
{
    let mut buckets: BTreeMap<K, LedgerSummary> = BTreeMap::new();
    let mut totals = LedgerSummary::empty();
    let mut skipped = Vec::new();

    for record in records {
        match engine.compute(record, evaluation_date) {
            Ok(enriched) => {
                buckets
                    .entry(key_of(record))
                    .or_default()
                    .push(&enriched);
                totals.push(&enriched);
            }
            Err(reason) => skipped.push(SkippedRecord {
                payment_id: record.payment_id,
                student_id: record.student_id.clone(),
                reason,
            }),
        }
    }

    (buckets, totals, skipped)
}

pub(crate) fn by_building(
    engine: &LedgerEngine,
    records: &[PaymentRecord],
    evaluation_date: NaiveDate,
) -> BuildingLedger {
    let (buildings, totals, skipped) = aggregate(engine, records, evaluation_date, |record| {
        let code = record.building_code.trim();
        if code.is_empty() {
            UNKNOWN_BUILDING.to_string()
        } else {
            code.to_string()
        }
    });

    BuildingLedger {
        buildings,
        totals,
        skipped,
    }
}

pub(crate) fn by_period(
    engine: &LedgerEngine,
    records: &[PaymentRecord],
    evaluation_date: NaiveDate,
) -> PeriodLedger {
    let (periods, totals, skipped) = aggregate(engine, records, evaluation_date, |record| {
        record.period
    });

    PeriodLedger {
        periods,
        totals,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentMethod;
    use rust_decimal_macros::dec;

    fn record(building: &str, period: &str, due: i64, paid: i64, late_fee: i64) -> PaymentRecord {
        let mut r = PaymentRecord::new(
            "S001",
            building,
            period.parse().unwrap(),
            Money::from_major(due),
            PaymentMethod::BankTransfer,
        );
        r.amount_paid = Money::from_major(paid);
        r.late_fee = Money::from_major(late_fee);
        r
    }

    fn eval() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 15).unwrap()
    }

    #[test]
    fn test_building_buckets_partition_records() {
        let engine = LedgerEngine::default();
        let records = vec![
            record("A", "2024-03", 7_000, 6_000, 0),
            record("A", "2024-03", 7_000, 7_000, 0),
            record("B", "2024-03", 5_000, 5_000, 0),
        ];

        let ledger = engine.summarize_by_building(&records, eval());

        let bucket_total: u32 = ledger.buildings.values().map(|s| s.record_count).sum();
        assert_eq!(bucket_total, records.len() as u32);
        assert_eq!(ledger.totals.record_count, 3);

        let a = &ledger.buildings["A"];
        assert_eq!(a.record_count, 2);
        assert_eq!(a.collected, Money::from_major(13_000));
        assert_eq!(a.pending_total, Money::from_major(1_000));

        let b = &ledger.buildings["B"];
        assert_eq!(b.pending_total, Money::ZERO);
        assert_eq!(b.collection_rate, Rate::ONE);
    }

    #[test]
    fn test_blank_building_codes_bucket_as_unknown() {
        let engine = LedgerEngine::default();
        let records = vec![
            record("", "2024-03", 7_000, 0, 0),
            record("  ", "2024-03", 5_000, 5_000, 0),
        ];

        let ledger = engine.summarize_by_building(&records, eval());
        assert_eq!(ledger.buildings.len(), 1);
        assert_eq!(ledger.buildings[UNKNOWN_BUILDING].record_count, 2);
    }

    #[test]
    fn test_invalid_records_skipped_not_fatal() {
        let engine = LedgerEngine::default();
        let mut bad = record("A", "2024-03", 7_000, 0, 0);
        bad.late_fee = Money::from_major(-50);

        let records = vec![
            record("A", "2024-03", 7_000, 7_000, 0),
            bad,
            record("B", "2024-03", 5_000, 2_000, 0),
        ];

        let ledger = engine.summarize_by_building(&records, eval());
        assert_eq!(ledger.skipped.len(), 1);
        assert_eq!(ledger.skipped[0].student_id, "S001");
        assert_eq!(ledger.totals.record_count, 2);
        assert_eq!(ledger.buildings["A"].record_count, 1);
    }

    #[test]
    fn test_empty_input_is_a_zero_summary() {
        let engine = LedgerEngine::default();
        let ledger = engine.summarize_by_building(&[], eval());

        assert!(ledger.buildings.is_empty());
        assert!(ledger.skipped.is_empty());
        assert_eq!(ledger.totals, LedgerSummary::empty());
        assert_eq!(ledger.totals.collection_rate, Rate::ONE);
    }

    #[test]
    fn test_late_fees_counted_and_summed() {
        let engine = LedgerEngine::default();
        let records = vec![
            record("A", "2024-02", 7_000, 7_200, 200),
            record("A", "2024-03", 7_000, 0, 150),
            record("A", "2024-03", 7_000, 7_000, 0),
        ];

        let ledger = engine.summarize_by_building(&records, eval());
        let a = &ledger.buildings["A"];
        assert_eq!(a.late_fee_count, 2);
        assert_eq!(a.late_fee_total, Money::from_major(350));
    }

    #[test]
    fn test_overpayment_does_not_offset_pending() {
        let engine = LedgerEngine::default();
        let records = vec![
            record("A", "2024-03", 5_000, 5_500, 0), // overpaid by 500
            record("A", "2024-03", 5_000, 4_000, 0), // pending 1000
        ];

        let ledger = engine.summarize_by_building(&records, eval());
        assert_eq!(ledger.buildings["A"].pending_total, Money::from_major(1_000));
    }

    #[test]
    fn test_period_buckets_sort_chronologically() {
        let engine = LedgerEngine::default();
        let records = vec![
            record("A", "2024-03", 7_000, 7_000, 0),
            record("A", "2024-01", 7_000, 5_000, 0),
            record("A", "2024-02", 7_000, 6_000, 0),
        ];

        let ledger = engine.summarize_by_period(&records, eval());
        let order: Vec<String> = ledger.periods.keys().map(Period::to_string).collect();
        assert_eq!(order, ["2024-01", "2024-02", "2024-03"]);
    }

    #[test]
    fn test_growth_rates() {
        let engine = LedgerEngine::default();
        let records = vec![
            record("A", "2024-01", 7_000, 4_000, 0),
            record("A", "2024-02", 7_000, 6_000, 0),
            record("A", "2024-03", 7_000, 3_000, 0),
        ];

        let ledger = engine.summarize_by_period(&records, eval());
        let growth = ledger.growth_rates();

        assert_eq!(growth.len(), 2);
        assert_eq!(growth[0].0.to_string(), "2024-02");
        assert_eq!(growth[0].1.as_decimal(), dec!(0.5));
        assert_eq!(growth[1].0.to_string(), "2024-03");
        assert_eq!(growth[1].1.as_decimal(), dec!(-0.5));
    }

    #[test]
    fn test_growth_over_zero_base_is_zero() {
        let engine = LedgerEngine::default();
        let records = vec![
            record("A", "2024-01", 7_000, 0, 0),
            record("A", "2024-02", 7_000, 6_000, 0),
        ];

        let ledger = engine.summarize_by_period(&records, eval());
        let growth = ledger.growth_rates();
        assert_eq!(growth.len(), 1);
        assert_eq!(growth[0].1, Rate::ZERO);
    }

    #[test]
    fn test_collection_rate_includes_late_fees() {
        let engine = LedgerEngine::default();
        let records = vec![record("A", "2024-03", 7_000, 3_600, 200)];

        let ledger = engine.summarize_by_building(&records, eval());
        // 3600 / 7200
        assert_eq!(
            ledger.buildings["A"].collection_rate.as_decimal(),
            dec!(0.5)
        );
    }
}
