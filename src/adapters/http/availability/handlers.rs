//! HTTP handlers for availability endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::Caller;
use crate::application::handlers::availability::{
    GetAvailableSlotsHandler, GetAvailableSlotsQuery,
};
use crate::domain::availability::AvailabilityError;

use super::dto::{AvailableSlotsParams, AvailableSlotsResponse, ErrorResponse, HealthResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AvailabilityHandlers {
    get_handler: Arc<GetAvailableSlotsHandler>,
}

impl AvailabilityHandlers {
    pub fn new(get_handler: Arc<GetAvailableSlotsHandler>) -> Self {
        Self { get_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/barbershops/:barbershop_id/available-slots?date=YYYY-MM-DD
pub async fn get_available_slots(
    State(handlers): State<AvailabilityHandlers>,
    Caller(context): Caller,
    Path(barbershop_id): Path<String>,
    Query(params): Query<AvailableSlotsParams>,
) -> Response {
    let query = GetAvailableSlotsQuery::new(barbershop_id, params.date);

    match handlers.get_handler.handle(query, &context).await {
        Ok(day) => {
            let response = AvailableSlotsResponse::from(day);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_availability_error(e),
    }
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_availability_error(error: AvailabilityError) -> Response {
    let status = if error.is_user_facing() {
        StatusCode::BAD_REQUEST
    } else {
        tracing::error!("Availability lookup failed: {}", error);
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(ErrorResponse::from(&error))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::availability::FieldViolation;

    #[test]
    fn validation_failure_maps_to_bad_request() {
        let error = AvailabilityError::validation(vec![FieldViolation {
            field: "date".to_string(),
            reason: "is required".to_string(),
        }]);

        let response = handle_availability_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unauthorized_maps_to_bad_request() {
        let response = handle_availability_error(AvailabilityError::Unauthorized);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_maps_to_internal_server_error() {
        let response = handle_availability_error(AvailabilityError::upstream("connection reset"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
