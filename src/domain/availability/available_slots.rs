//! Reduction of bookings to occupied labels and the diff against the template.

use std::collections::HashSet;

use serde::Serialize;

use super::booking::BookingRecord;
use super::slot_template::{SlotLabel, SlotTemplate};
use super::time_reference::TimeReference;

/// Labels taken by at least one booking, as formatted on the shop's wall clock.
///
/// Labels that match no template slot are kept; they simply never match
/// anything during the diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupiedSlots(HashSet<String>);

impl OccupiedSlots {
    /// Formats each booking's time-of-day as `HH:MM`; duplicates collapse.
    pub fn from_bookings<'a>(
        bookings: impl IntoIterator<Item = &'a BookingRecord>,
        time_reference: &TimeReference,
    ) -> Self {
        Self(
            bookings
                .into_iter()
                .map(|booking| time_reference.label_for(&booking.date))
                .collect(),
        )
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Occupied labels that fall between template slots.
    pub fn off_grid<'a>(&'a self, template: &'a SlotTemplate) -> impl Iterator<Item = &'a str> {
        self.0
            .iter()
            .map(String::as_str)
            .filter(move |label| !template.contains(label))
    }
}

/// The template minus occupied slots, in template order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AvailableSlots(Vec<SlotLabel>);

impl AvailableSlots {
    pub fn iter(&self) -> impl Iterator<Item = &SlotLabel> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|slot| slot == label)
    }

    /// Owned `HH:MM` strings, in template order.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|slot| slot.as_str().to_string()).collect()
    }
}

impl IntoIterator for AvailableSlots {
    type Item = SlotLabel;
    type IntoIter = std::vec::IntoIter<SlotLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Filters the template down to the labels no booking occupies.
pub fn diff_against_template(template: &SlotTemplate, occupied: &OccupiedSlots) -> AvailableSlots {
    AvailableSlots(
        template
            .labels()
            .filter(|label| !occupied.contains(label.as_str()))
            .collect(),
    )
}

/// Reduces `bookings` to occupied labels and returns what remains open.
///
/// Pure: the result depends only on the template, the bookings and the time
/// reference. Bookings off the template grid change nothing.
pub fn resolve_available_slots(
    template: &SlotTemplate,
    bookings: &[BookingRecord],
    time_reference: &TimeReference,
) -> AvailableSlots {
    let occupied = OccupiedSlots::from_bookings(bookings, time_reference);

    for label in occupied.off_grid(template) {
        tracing::warn!(label, "Booking does not align with any slot; ignoring");
    }

    diff_against_template(template, &occupied)
}
