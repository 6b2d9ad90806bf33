/// json export - serialize enriched payments and summaries for a web tier
use rent_ledger_rs::chrono::NaiveDate;
use rent_ledger_rs::{LedgerEngine, Money, PaymentMethod, PaymentRecord};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut record = PaymentRecord::new(
        "S1023",
        "A",
        "2024-01".parse()?,
        Money::from_major(7_000),
        PaymentMethod::Cheque,
    );
    record.amount_paid = Money::from_major(3_000);
    record.late_fee = Money::from_major(200);
    record.payment_date = NaiveDate::from_ymd_opt(2024, 2, 3);
    record.notes = Some("cheque #44721".to_string());

    let engine = LedgerEngine::default();
    let today = NaiveDate::from_ymd_opt(2024, 4, 15).expect("valid date");

    let enriched = engine.compute(&record, today)?;
    println!("{}", serde_json::to_string_pretty(&enriched)?);

    let report = engine.summarize_by_building(&[record], today);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
