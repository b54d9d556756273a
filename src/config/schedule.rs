//! Schedule configuration
//!
//! Holds the wall clock the shop runs on. Day boundaries and slot labels are
//! both computed on it, so it must match how the booking service interprets
//! the instants it stores.

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::availability::{TimeReference, MAX_OFFSET_MINUTES};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleConfig {
    /// Minutes east of UTC (negative for west); 0 means UTC
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl ScheduleConfig {
    /// The shared time reference for day ranges and labels.
    pub fn time_reference(&self) -> Result<TimeReference, ValidationError> {
        TimeReference::from_offset_minutes(self.utc_offset_minutes).map_err(|_| {
            ValidationError::InvalidUtcOffset {
                max: MAX_OFFSET_MINUTES,
                actual: self.utc_offset_minutes,
            }
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.time_reference().map(|_| ())
    }
}
