//! Application handlers.
//!
//! Query handlers that orchestrate domain operations over ports.

pub mod availability;

pub use availability::{DayAvailability, GetAvailableSlotsHandler, GetAvailableSlotsQuery};
