pub mod config;
pub mod decimal;
pub mod errors;
pub mod ledger;
pub mod period;
pub mod record;
pub mod types;

// re-export key types
pub use config::UrgencyBands;
pub use decimal::{Money, Rate};
pub use errors::{LedgerError, Result};
pub use ledger::{
    BuildingLedger, BuildingSummary, EnrichedPayment, LedgerEngine, LedgerSummary, PeriodLedger,
    PeriodSummary, UrgencyQueue,
};
pub use period::Period;
pub use record::{duplicate_periods, PaymentRecord};
pub use types::{
    PaymentId, PaymentMethod, SettlementState, SkippedRecord, Urgency, UNKNOWN_BUILDING,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
