/// building report - per-building collection summary with skipped records
use rent_ledger_rs::chrono::NaiveDate;
use rent_ledger_rs::{LedgerEngine, Money, PaymentMethod, PaymentRecord};

fn paid(building: &str, due: i64, paid: i64) -> PaymentRecord {
    let mut r = PaymentRecord::new(
        "S1000",
        building,
        "2024-03".parse().expect("valid period"),
        Money::from_major(due),
        PaymentMethod::BankTransfer,
    );
    r.amount_paid = Money::from_major(paid);
    r
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut records = vec![
        paid("A", 7_000, 7_000),
        paid("A", 7_000, 3_000),
        paid("B", 6_500, 6_500),
        paid("", 6_500, 0), // building missing in the data store
    ];
    // a corrupted row: skipped and reported, never fatal
    records.push(paid("B", -100, 0));

    let engine = LedgerEngine::default();
    let today = NaiveDate::from_ymd_opt(2024, 4, 15).expect("valid date");
    let report = engine.summarize_by_building(&records, today);

    for (building, summary) in &report.buildings {
        println!(
            "building {:8} collected {:>8}  pending {:>8}  rate {}",
            building,
            summary.collected,
            summary.pending_total,
            summary.collection_rate.as_percentage().round_dp(1)
        );
    }
    println!(
        "overall: {} records, {} skipped due to invalid data",
        report.totals.record_count,
        report.skipped.len()
    );

    Ok(())
}
