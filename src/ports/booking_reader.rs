//! Booking reader port (read-only view of the booking store).
//!
//! The store filters by barbershop and by an inclusive time window and
//! nothing else. All slot logic stays in the availability domain.

use async_trait::async_trait;

use crate::domain::availability::BookingRecord;
use crate::domain::foundation::{BarbershopId, DomainError, Timestamp};

/// Reader port for bookings.
#[async_trait]
pub trait BookingReader: Send + Sync {
    /// All bookings of `barbershop_id` whose date lies in `[range_start, range_end]`.
    ///
    /// Bounds are inclusive UTC instants. May return zero records, and may
    /// return more records than there are template slots.
    async fn bookings_in_range(
        &self,
        barbershop_id: &BarbershopId,
        range_start: Timestamp,
        range_end: Timestamp,
    ) -> Result<Vec<BookingRecord>, DomainError>;
}
