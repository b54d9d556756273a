//! HTTP DTOs for availability endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::handlers::availability::DayAvailability;
use crate::domain::availability::{AvailabilityError, FieldViolation, UNAUTHORIZED_MESSAGE};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query string of `GET /api/barbershops/:barbershop_id/available-slots`.
///
/// `date` defaults to empty so a missing parameter is reported by field
/// validation rather than by the query extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailableSlotsParams {
    #[serde(default)]
    pub date: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Open slots of one barbershop on one day.
#[derive(Debug, Clone, Serialize)]
pub struct AvailableSlotsResponse {
    pub barbershop_id: String,
    pub date: String,
    pub available_slots: Vec<String>,
}

impl From<DayAvailability> for AvailableSlotsResponse {
    fn from(day: DayAvailability) -> Self {
        Self {
            barbershop_id: day.barbershop_id.to_string(),
            date: day.date.format("%Y-%m-%d").to_string(),
            available_slots: day.slots.to_strings(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Public message for faults; the cause is only logged.
pub const INTERNAL_MESSAGE: &str = "Unable to resolve availability";

impl From<&AvailabilityError> for ErrorResponse {
    fn from(error: &AvailabilityError) -> Self {
        let code = error.code().to_string();
        match error {
            AvailabilityError::ValidationFailed { violations } => Self {
                code,
                message: "Request validation failed".to_string(),
                details: Some(field_details(violations)),
            },
            // A missing session shares the validation code, with a fixed message.
            AvailabilityError::Unauthorized => Self {
                code,
                message: UNAUTHORIZED_MESSAGE.to_string(),
                details: None,
            },
            AvailabilityError::Upstream(_) => Self {
                code,
                message: INTERNAL_MESSAGE.to_string(),
                details: None,
            },
        }
    }
}

/// `{"fields": {<field>: <reason>}}` for each offending field.
fn field_details(violations: &[FieldViolation]) -> Value {
    let fields: Map<String, Value> = violations
        .iter()
        .map(|v| (v.field.clone(), Value::String(v.reason.clone())))
        .collect();

    let mut details = Map::new();
    details.insert("fields".to_string(), Value::Object(fields));
    Value::Object(details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::availability::{diff_against_template, OccupiedSlots, SlotTemplate};
    use crate::domain::foundation::BarbershopId;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn params_deserialize_with_missing_date() {
        let params: AvailableSlotsParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params.date, "");
    }

    #[test]
    fn response_serializes_expected_shape() {
        let barbershop_id: BarbershopId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        let slots = diff_against_template(&SlotTemplate::standard(), &OccupiedSlots::default());
        let day = DayAvailability {
            barbershop_id,
            date: NaiveDate::from_ymd_opt(2025, 12, 14).unwrap(),
            slots,
        };

        let json = serde_json::to_value(AvailableSlotsResponse::from(day)).unwrap();

        assert_eq!(json["barbershop_id"], "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(json["date"], "2025-12-14");
        assert_eq!(json["available_slots"].as_array().unwrap().len(), 17);
        assert_eq!(json["available_slots"][0], "09:00");
    }

    #[test]
    fn validation_failed_lists_fields() {
        let error = AvailabilityError::validation(vec![
            FieldViolation {
                field: "barbershop_id".to_string(),
                reason: "must be a valid UUID".to_string(),
            },
            FieldViolation {
                field: "date".to_string(),
                reason: "is required".to_string(),
            },
        ]);

        let json = serde_json::to_value(ErrorResponse::from(&error)).unwrap();

        assert_eq!(json["code"], "VALIDATION_FAILED");
        assert_eq!(json["details"]["fields"]["barbershop_id"], "must be a valid UUID");
        assert_eq!(json["details"]["fields"]["date"], "is required");
    }

    #[test]
    fn unauthorized_uses_validation_code_and_fixed_message() {
        let error = AvailabilityError::Unauthorized;
        let json = serde_json::to_value(ErrorResponse::from(&error)).unwrap();

        assert_eq!(json["code"], "VALIDATION_FAILED");
        assert_eq!(json["message"], "Not authorized. Please sign in to continue.");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn upstream_hides_cause_behind_internal_code() {
        let error = AvailabilityError::upstream("connection reset by peer");
        let json = serde_json::to_value(ErrorResponse::from(&error)).unwrap();

        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["message"], INTERNAL_MESSAGE);
        assert!(!json.to_string().contains("connection reset"));
    }

    #[test]
    fn health_response_is_ok() {
        let json = serde_json::to_value(HealthResponse::ok()).unwrap();
        assert_eq!(json, json!({ "status": "ok" }));
    }
}
