//! Storage Adapters
//!
//! In-process implementations of the `BookingReader` port.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryBookingReader;
//!
//! let store = InMemoryBookingReader::with_bookings(bookings);
//! ```

mod in_memory_booking_reader;

pub use in_memory_booking_reader::InMemoryBookingReader;
