/// monthly trend - month-over-month collection growth
use rent_ledger_rs::chrono::NaiveDate;
use rent_ledger_rs::{LedgerEngine, Money, PaymentMethod, PaymentRecord, Period};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut records = Vec::new();
    let mut period: Period = "2024-01".parse()?;
    for collected in [210_000, 245_000, 238_000, 252_000] {
        let mut r = PaymentRecord::new(
            "all-students",
            "A",
            period,
            Money::from_major(260_000),
            PaymentMethod::Upi,
        );
        r.amount_paid = Money::from_major(collected);
        records.push(r);
        period = period.next().ok_or("period out of range")?;
    }

    let engine = LedgerEngine::default();
    let today = NaiveDate::from_ymd_opt(2024, 5, 10).expect("valid date");
    let ledger = engine.summarize_by_period(&records, today);

    for (period, summary) in &ledger.periods {
        println!(
            "{}  collected {:>8}  rate {}",
            period,
            summary.collected,
            summary.collection_rate.as_percentage().round_dp(1)
        );
    }

    println!("\nmonth-over-month growth:");
    for (period, rate) in ledger.growth_rates() {
        println!("{}  {:>7}%", period, rate.as_percentage().round_dp(2));
    }

    Ok(())
}
