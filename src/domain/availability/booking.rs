//! Read-only view of a booking held by the external booking store.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BarbershopId, BookingId, Timestamp};

/// A committed booking, as returned by the booking store.
///
/// Only the barbershop and the booked instant matter for availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: BookingId,
    pub barbershop_id: BarbershopId,
    /// Calendar date and time-of-day of the booking, stored as a UTC instant.
    pub date: Timestamp,
}

impl BookingRecord {
    pub fn new(barbershop_id: BarbershopId, date: Timestamp) -> Self {
        Self {
            id: BookingId::new(),
            barbershop_id,
            date,
        }
    }
}
