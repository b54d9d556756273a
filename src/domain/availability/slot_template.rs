//! The fixed daily schedule of bookable slots.

use std::fmt;

use chrono::NaiveTime;
use serde::{Serialize, Serializer};

/// Wire and display format of a slot label: 24-hour, zero-padded `HH:MM`.
pub const SLOT_LABEL_FORMAT: &str = "%H:%M";

/// A canonical time-of-day label drawn from a `SlotTemplate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotLabel(&'static str);

impl SlotLabel {
    /// Returns the `HH:MM` text of the label.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for SlotLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl PartialEq<str> for SlotLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SlotLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordered list of bookable slot labels for any day.
///
/// Templates are static data: they change only with a code change and are
/// never persisted, so they can be shared across requests without locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTemplate {
    labels: &'static [&'static str],
}

/// The shop's opening schedule: 09:00 through 17:00 every 30 minutes.
pub const SLOT_TEMPLATE: SlotTemplate = SlotTemplate::new(&[
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "12:00", "12:30", "13:00", "13:30",
    "14:00", "14:30", "15:00", "15:30", "16:00", "16:30", "17:00",
]);

impl SlotTemplate {
    /// Creates a template from static labels, in schedule order.
    pub const fn new(labels: &'static [&'static str]) -> Self {
        Self { labels }
    }

    /// The standard opening schedule.
    pub const fn standard() -> Self {
        SLOT_TEMPLATE
    }

    /// Iterates the labels in template order.
    pub fn labels(&self) -> impl Iterator<Item = SlotLabel> + '_ {
        self.labels.iter().map(|label| SlotLabel(*label))
    }

    /// Looks up the template label equal to `text`.
    pub fn find(&self, text: &str) -> Option<SlotLabel> {
        self.labels
            .iter()
            .find(|label| **label == text)
            .map(|label| SlotLabel(*label))
    }

    /// Whether `text` is one of the template's labels.
    pub fn contains(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Checks that every label is a zero-padded `HH:MM` time and that the
    /// labels are strictly ascending (hence unique).
    pub fn is_well_formed(&self) -> bool {
        let mut previous: Option<NaiveTime> = None;
        for label in self.labels {
            let Ok(time) = NaiveTime::parse_from_str(label, SLOT_LABEL_FORMAT) else {
                return false;
            };
            if time.format(SLOT_LABEL_FORMAT).to_string() != *label {
                return false;
            }
            if previous.is_some_and(|prev| prev >= time) {
                return false;
            }
            previous = Some(time);
        }
        true
    }
}

impl Default for SlotTemplate {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_template_has_seventeen_half_hour_slots() {
        let template = SlotTemplate::standard();
        assert_eq!(template.len(), 17);

        let labels: Vec<&str> = template.labels().map(|l| l.as_str()).collect();
        assert_eq!(labels.first(), Some(&"09:00"));
        assert_eq!(labels.last(), Some(&"17:00"));
        assert_eq!(labels[1], "09:30");
    }

    #[test]
    fn standard_template_is_well_formed() {
        assert!(SLOT_TEMPLATE.is_well_formed());
    }

    #[test]
    fn template_with_duplicate_is_not_well_formed() {
        const DUPLICATED: SlotTemplate = SlotTemplate::new(&["09:00", "09:00"]);
        assert!(!DUPLICATED.is_well_formed());
    }

    #[test]
    fn template_out_of_order_is_not_well_formed() {
        const UNORDERED: SlotTemplate = SlotTemplate::new(&["10:00", "09:00"]);
        assert!(!UNORDERED.is_well_formed());
    }

    #[test]
    fn template_without_zero_padding_is_not_well_formed() {
        const UNPADDED: SlotTemplate = SlotTemplate::new(&["9:00", "10:00"]);
        assert!(!UNPADDED.is_well_formed());
    }

    #[test]
    fn contains_matches_exact_labels_only() {
        assert!(SLOT_TEMPLATE.contains("12:00"));
        assert!(!SLOT_TEMPLATE.contains("12:15"));
        assert!(!SLOT_TEMPLATE.contains("12:00:00"));
        assert!(!SLOT_TEMPLATE.contains("08:30"));
    }

    #[test]
    fn find_returns_template_label() {
        let label = SLOT_TEMPLATE.find("14:30").unwrap();
        assert_eq!(label, "14:30");
        assert_eq!(label.to_string(), "14:30");
    }

    #[test]
    fn slot_label_serializes_as_plain_string() {
        let label = SLOT_TEMPLATE.find("09:30").unwrap();
        assert_eq!(serde_json::to_string(&label).unwrap(), "\"09:30\"");
    }
}
