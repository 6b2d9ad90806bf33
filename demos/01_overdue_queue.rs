/// overdue queue - the worklist a rent collector starts the day with
use rent_ledger_rs::{
    LedgerEngine, Money, PaymentMethod, PaymentRecord, SafeTimeProvider, TimeSource,
};

fn unpaid(student: &str, building: &str, period: &str, due: i64) -> PaymentRecord {
    PaymentRecord::new(
        student,
        building,
        period.parse().expect("valid period"),
        Money::from_major(due),
        PaymentMethod::Cash,
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let records = vec![
        unpaid("S1001", "A", "2024-01", 7_000),
        unpaid("S1002", "B", "2024-03", 6_500),
        unpaid("S1003", "A", "2024-02", 9_000),
        unpaid("S1004", "B", "2024-04", 6_500), // not yet due
    ];

    // pin "now" for a reproducible run; production callers use TimeSource::System
    let time = SafeTimeProvider::new(TimeSource::Test(
        "2024-04-15T09:00:00Z".parse()?,
    ));

    let engine = LedgerEngine::default();
    let queue = engine.classify_urgency_now(&records, &time);

    println!("{} students to chase:", queue.len());
    for entry in &queue.entries {
        println!(
            "  {:8} {:>8} due, {:>3} days overdue ({:?})",
            entry.record.student_id, entry.balance, entry.days_overdue, entry.urgency
        );
    }

    Ok(())
}
