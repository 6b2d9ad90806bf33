/// quick start - enrich a single rent record
use rent_ledger_rs::chrono::NaiveDate;
use rent_ledger_rs::{LedgerEngine, Money, PaymentMethod, PaymentRecord};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // march rent for one student, partially paid
    let mut record = PaymentRecord::new(
        "S1023",
        "A",
        "2024-03".parse()?,
        Money::from_major(7_000),
        PaymentMethod::Upi,
    );
    record.amount_paid = Money::from_major(3_000);
    record.late_fee = Money::from_major(200);

    let engine = LedgerEngine::default();
    let today = NaiveDate::from_ymd_opt(2024, 4, 15).expect("valid date");
    let enriched = engine.compute(&record, today)?;

    println!("balance due:  {}", enriched.balance);
    println!("state:        {:?}", enriched.settlement_state);
    println!("days overdue: {}", enriched.days_overdue);
    println!("urgency:      {:?}", enriched.urgency);

    Ok(())
}
