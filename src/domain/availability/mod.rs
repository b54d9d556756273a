//! Availability domain module.
//!
//! Derives the open slots of a barbershop's day from the fixed slot template
//! and the day's committed bookings:
//!
//! - `SlotTemplate` / `SLOT_TEMPLATE` - the canonical `HH:MM` schedule
//! - `TimeReference` / `DayRange` - day bounds and label formatting on one wall clock
//! - `BookingRecord` - read-only booking view from the store
//! - `resolve_available_slots` - reduce bookings to occupied labels, diff against the template
//! - `AvailabilityError` - validation, authorization and upstream failures

mod available_slots;
mod booking;
mod errors;
mod slot_template;
mod time_reference;

pub use available_slots::{
    diff_against_template, resolve_available_slots, AvailableSlots, OccupiedSlots,
};
pub use booking::BookingRecord;
pub use errors::{AvailabilityError, FieldViolation, UNAUTHORIZED_MESSAGE};
pub use slot_template::{SlotLabel, SlotTemplate, SLOT_LABEL_FORMAT, SLOT_TEMPLATE};
pub use time_reference::{DayRange, TimeReference, MAX_OFFSET_MINUTES};
