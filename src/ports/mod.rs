//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AccessGate` - resolves the caller's session from the request context
//! - `BookingReader` - lists a barbershop's bookings within a time window

mod access_gate;
mod booking_reader;

pub use access_gate::{AccessGate, RequestContext};
pub use booking_reader::BookingReader;
