//! PostgreSQL implementation of BookingReader.
//!
//! Reads the `bookings` table. `date` is a `TIMESTAMPTZ`, so the bounds and
//! the returned instants are UTC regardless of the session time zone.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::availability::BookingRecord;
use crate::domain::foundation::{BarbershopId, BookingId, DomainError, Timestamp};
use crate::ports::BookingReader;

/// PostgreSQL implementation of BookingReader.
#[derive(Clone)]
pub struct PostgresBookingReader {
    pool: PgPool,
}

impl PostgresBookingReader {
    /// Creates a new PostgresBookingReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingReader for PostgresBookingReader {
    async fn bookings_in_range(
        &self,
        barbershop_id: &BarbershopId,
        range_start: Timestamp,
        range_end: Timestamp,
    ) -> Result<Vec<BookingRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, barbershop_id, date
            FROM bookings
            WHERE barbershop_id = $1
              AND date >= $2
              AND date <= $3
            ORDER BY date
            "#,
        )
        .bind(barbershop_id.as_uuid())
        .bind(range_start.as_datetime())
        .bind(range_end.as_datetime())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch bookings: {}", e)))?;

        rows.into_iter().map(row_to_booking).collect()
    }
}

fn row_to_booking(row: sqlx::postgres::PgRow) -> Result<BookingRecord, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;

    let barbershop_id: uuid::Uuid = row
        .try_get("barbershop_id")
        .map_err(|e| DomainError::database(format!("Failed to get barbershop_id: {}", e)))?;

    let date: chrono::DateTime<chrono::Utc> = row
        .try_get("date")
        .map_err(|e| DomainError::database(format!("Failed to get date: {}", e)))?;

    Ok(BookingRecord {
        id: BookingId::from_uuid(id),
        barbershop_id: BarbershopId::from_uuid(barbershop_id),
        date: Timestamp::from_datetime(date),
    })
}

impl std::fmt::Debug for PostgresBookingReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresBookingReader").finish_non_exhaustive()
    }
}
