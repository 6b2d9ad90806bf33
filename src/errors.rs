use serde::Serialize;
use thiserror::Error;

use crate::decimal::Money;

/// errors raised while validating or enriching payment records
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LedgerError {
    #[error("negative {field}: {amount}")]
    NegativeAmount {
        field: &'static str,
        amount: Money,
    },

    #[error("invalid period: year {year}, month {month}")]
    InvalidPeriod {
        year: i32,
        month: u32,
    },

    #[error("unparsable period: {raw:?}, expected YYYY-MM")]
    UnparsablePeriod {
        raw: String,
    },

    #[error("urgency bands must increase: low {low}, medium {medium}, high {high}")]
    InvalidBands {
        low: u32,
        medium: u32,
        high: u32,
    },
}

pub type Result<T> = std::result::Result<T, LedgerError>;
