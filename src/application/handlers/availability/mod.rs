//! Availability query handlers.

mod get_available_slots;

pub use get_available_slots::{DayAvailability, GetAvailableSlotsHandler, GetAvailableSlotsQuery};
