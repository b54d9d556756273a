//! HTTP adapter for availability endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AvailableSlotsParams, AvailableSlotsResponse, ErrorResponse, HealthResponse};
pub use handlers::{health, AvailabilityHandlers};
pub use routes::availability_routes;
