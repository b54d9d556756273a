//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
///
/// The booking store persists instants in UTC; local wall-clock views are
/// derived through a `TimeReference`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn at(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    #[test]
    fn timestamp_from_datetime_preserves_value() {
        let dt = Utc::now();
        let ts = Timestamp::from_datetime(dt);
        assert_eq!(ts.as_datetime(), &dt);
    }

    #[test]
    fn timestamp_comparisons_work() {
        let earlier = at("2025-12-14T09:00:00Z");
        let later = at("2025-12-14T09:30:00Z");

        assert!(earlier.is_before(&later));
        assert!(later.is_after(&earlier));
        assert!(!earlier.is_after(&later));
        assert!(earlier < later);
    }

    #[test]
    fn timestamp_serializes_to_json() {
        let ts = at("2024-01-15T10:30:00Z");
        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.contains("2024-01-15"));
    }

    #[test]
    fn timestamp_deserializes_from_json() {
        let json = "\"2024-01-15T10:30:00Z\"";
        let ts: Timestamp = serde_json::from_str(json).unwrap();
        assert_eq!(ts.as_datetime().year(), 2024);
    }
}
