//! In-Memory Booking Reader Adapter
//!
//! Holds bookings in memory and answers range queries over them.
//! Useful for testing and development.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::availability::BookingRecord;
use crate::domain::foundation::{BarbershopId, DomainError, Timestamp};
use crate::ports::BookingReader;

/// In-memory booking store
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingReader {
    bookings: Arc<RwLock<Vec<BookingRecord>>>,
    queries: Arc<AtomicUsize>,
    force_error: Option<DomainError>,
}

impl InMemoryBookingReader {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `bookings`
    pub fn with_bookings(bookings: Vec<BookingRecord>) -> Self {
        Self {
            bookings: Arc::new(RwLock::new(bookings)),
            ..Self::default()
        }
    }

    /// Make every query fail with `error`
    pub fn with_error(mut self, error: DomainError) -> Self {
        self.force_error = Some(error);
        self
    }

    /// Add a booking
    pub async fn insert(&self, booking: BookingRecord) {
        self.bookings.write().await.push(booking);
    }

    /// Remove all bookings (useful for tests)
    pub async fn clear(&self) {
        self.bookings.write().await.clear();
    }

    /// Number of stored bookings
    pub async fn booking_count(&self) -> usize {
        self.bookings.read().await.len()
    }

    /// Number of range queries served so far
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BookingReader for InMemoryBookingReader {
    async fn bookings_in_range(
        &self,
        barbershop_id: &BarbershopId,
        range_start: Timestamp,
        range_end: Timestamp,
    ) -> Result<Vec<BookingRecord>, DomainError> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = &self.force_error {
            return Err(error.clone());
        }

        let bookings = self.bookings.read().await;
        let mut matching: Vec<BookingRecord> = bookings
            .iter()
            .filter(|b| &b.barbershop_id == barbershop_id)
            .filter(|b| !b.date.is_before(&range_start) && !b.date.is_after(&range_end))
            .cloned()
            .collect();
        matching.sort_by_key(|b| b.date);

        Ok(matching)
    }
}
