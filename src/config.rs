use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};
use crate::types::Urgency;

/// day-count bands mapping how long a balance has been overdue to an
/// urgency tier; bounds are inclusive upper limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyBands {
    pub low_max_days: u32,
    pub medium_max_days: u32,
    pub high_max_days: u32,
}

impl UrgencyBands {
    pub fn new(low_max_days: u32, medium_max_days: u32, high_max_days: u32) -> Result<Self> {
        if low_max_days == 0 || low_max_days >= medium_max_days || medium_max_days >= high_max_days
        {
            return Err(LedgerError::InvalidBands {
                low: low_max_days,
                medium: medium_max_days,
                high: high_max_days,
            });
        }
        Ok(Self {
            low_max_days,
            medium_max_days,
            high_max_days,
        })
    }

    /// map days overdue to a tier; zero days is not overdue at all
    pub fn classify(&self, days_overdue: u32) -> Urgency {
        match days_overdue {
            0 => Urgency::None,
            d if d <= self.low_max_days => Urgency::Low,
            d if d <= self.medium_max_days => Urgency::Medium,
            d if d <= self.high_max_days => Urgency::High,
            _ => Urgency::Critical,
        }
    }
}

impl Default for UrgencyBands {
    /// 1-7 low, 8-30 medium, 31-60 high, 61+ critical
    fn default() -> Self {
        Self {
            low_max_days: 7,
            medium_max_days: 30,
            high_max_days: 60,
        }
    }
}
