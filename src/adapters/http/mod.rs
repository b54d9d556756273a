//! HTTP adapters - REST API implementations.
//!
//! ```text
//! GET /health
//! GET /api/barbershops/:barbershop_id/available-slots?date=YYYY-MM-DD
//! ```
//!
//! Cross-cutting layers (tracing, timeout, CORS) are applied by the binary.

pub mod availability;
pub mod middleware;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::application::handlers::availability::GetAvailableSlotsHandler;

pub use availability::{availability_routes, AvailabilityHandlers};

/// Builds the complete API router around one availability handler.
pub fn api_router(handler: Arc<GetAvailableSlotsHandler>) -> Router {
    let handlers = AvailabilityHandlers::new(handler);

    Router::new()
        .route("/health", get(availability::health))
        .nest("/api/barbershops", availability_routes(handlers))
}
