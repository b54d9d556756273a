//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the availability domain.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, CallerSession};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{BarbershopId, BookingId, UserId};
pub use timestamp::Timestamp;
