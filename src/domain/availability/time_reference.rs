//! Shared time reference between the resolver and the booking store.
//!
//! Bookings are stored as UTC instants. Which calendar day a booking belongs
//! to, and which `HH:MM` label it occupies, depends on the wall clock of the
//! shop. `TimeReference` pins that wall clock to one fixed UTC offset and is
//! used for both day-boundary computation and label formatting, so the two
//! can never disagree.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};

use super::slot_template::SLOT_LABEL_FORMAT;
use crate::domain::foundation::{Timestamp, ValidationError};

/// Largest offset accepted, in minutes (UTC+14:00 / UTC-14:00).
pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Calendar date format accepted at the request boundary.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// The wall clock in which days begin and slot labels are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeReference {
    offset: FixedOffset,
}

impl TimeReference {
    /// Wall clock equal to UTC.
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    /// Wall clock at `minutes` east of UTC (negative for west).
    pub fn from_offset_minutes(minutes: i32) -> Result<Self, ValidationError> {
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
            return Err(ValidationError::out_of_range(
                "utc_offset_minutes",
                -MAX_OFFSET_MINUTES,
                MAX_OFFSET_MINUTES,
                minutes,
            ));
        }
        let offset = FixedOffset::east_opt(minutes * 60).ok_or_else(|| {
            ValidationError::invalid_format("utc_offset_minutes", "not a valid UTC offset")
        })?;
        Ok(Self { offset })
    }

    /// Offset from UTC in minutes.
    pub fn offset_minutes(&self) -> i32 {
        self.offset.local_minus_utc() / 60
    }

    /// Inclusive window covering `date` from 00:00:00.000 to 23:59:59.999
    /// on this wall clock, expressed as UTC instants.
    ///
    /// Fails for dates at the edge of the representable calendar, where one
    /// of the bounds would not exist as a UTC instant.
    pub fn day_range(&self, date: NaiveDate) -> Result<DayRange, ValidationError> {
        let out_of_range =
            || ValidationError::invalid_format("date", "is outside the supported calendar range");

        let local_start = date.and_time(NaiveTime::MIN);
        let utc_start = local_start
            .checked_sub_signed(Duration::seconds(i64::from(self.offset.local_minus_utc())))
            .ok_or_else(out_of_range)?
            .and_utc();
        let utc_end = utc_start
            .checked_add_signed(Duration::days(1) - Duration::milliseconds(1))
            .ok_or_else(out_of_range)?;

        Ok(DayRange {
            start: Timestamp::from_datetime(utc_start),
            end: Timestamp::from_datetime(utc_end),
        })
    }

    /// The `HH:MM` label an instant occupies on this wall clock.
    pub fn label_for(&self, instant: &Timestamp) -> String {
        instant
            .as_datetime()
            .with_timezone(&self.offset)
            .format(SLOT_LABEL_FORMAT)
            .to_string()
    }

    /// Parses the `date` field of a request.
    ///
    /// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 date-time. For a
    /// date-time only its calendar date on this wall clock is kept.
    pub fn parse_calendar_date(&self, raw: &str) -> Result<NaiveDate, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValidationError::empty_field("date"));
        }

        if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            return Ok(date);
        }

        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&self.offset).date_naive())
            .map_err(|_| {
                ValidationError::invalid_format(
                    "date",
                    "must be a calendar date (YYYY-MM-DD) or an RFC 3339 date-time",
                )
            })
    }
}

impl Default for TimeReference {
    fn default() -> Self {
        Self::utc()
    }
}

/// Inclusive `[start, end]` window of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl DayRange {
    /// Whether `instant` falls inside the window, bounds included.
    pub fn contains(&self, instant: &Timestamp) -> bool {
        !instant.is_before(&self.start) && !instant.is_after(&self.end)
    }
}
