//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Access gate implementations (JWT, mock)
//! - `http` - axum router and handlers
//! - `postgres` - Booking store reads
//! - `storage` - In-process booking store

pub mod auth;
pub mod http;
pub mod postgres;
pub mod storage;

pub use auth::{JwtAccessGate, JwtGateConfig, MockAccessGate};
pub use postgres::PostgresBookingReader;
pub use storage::InMemoryBookingReader;
