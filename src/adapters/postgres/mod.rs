//! PostgreSQL adapters - Database implementations for reader ports.
//!
//! - `PostgresBookingReader` - Range queries over the bookings table

mod booking_reader;

pub use booking_reader::PostgresBookingReader;
