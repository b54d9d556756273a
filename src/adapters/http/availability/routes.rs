//! Axum router configuration for availability endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_available_slots, AvailabilityHandlers};

/// Creates the availability router, to be nested under `/api/barbershops`.
///
/// # Routes
/// - `GET /:barbershop_id/available-slots?date=` - Open slots for one day
pub fn availability_routes(handlers: AvailabilityHandlers) -> Router {
    Router::new()
        .route("/:barbershop_id/available-slots", get(get_available_slots))
        .with_state(handlers)
}
