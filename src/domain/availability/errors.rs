//! Availability error taxonomy.

use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::{AuthError, DomainError, ErrorCode, ValidationError};

/// User-facing message returned when the caller has no valid session.
pub const UNAUTHORIZED_MESSAGE: &str = "Not authorized. Please sign in to continue.";

/// One offending request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
}

impl From<ValidationError> for FieldViolation {
    fn from(err: ValidationError) -> Self {
        let reason = match &err {
            ValidationError::EmptyField { .. } => "is required".to_string(),
            ValidationError::InvalidFormat { reason, .. } => reason.clone(),
            ValidationError::OutOfRange { min, max, .. } => {
                format!("must be between {} and {}", min, max)
            }
        };
        Self {
            field: err.field().to_string(),
            reason,
        }
    }
}

/// Errors returned by the availability query.
///
/// `ValidationFailed` and `Unauthorized` are expected outcomes that share the
/// validation channel at the boundary. `Upstream` is a fault of the booking
/// store or the auth service and is never retried here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvailabilityError {
    #[error("Validation failed: {}", describe(.violations))]
    ValidationFailed { violations: Vec<FieldViolation> },

    #[error("{}", UNAUTHORIZED_MESSAGE)]
    Unauthorized,

    #[error("Upstream failure: {0}")]
    Upstream(String),
}

impl AvailabilityError {
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        AvailabilityError::ValidationFailed { violations }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        AvailabilityError::Upstream(message.into())
    }

    /// True for outcomes reported back to the caller as validation failures.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, AvailabilityError::Upstream(_))
    }

    /// Fields named by a validation failure; empty for other variants.
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            AvailabilityError::ValidationFailed { violations } => violations,
            _ => &[],
        }
    }

    /// Boundary code; a missing session shares the validation code.
    pub fn code(&self) -> ErrorCode {
        match self {
            AvailabilityError::ValidationFailed { .. } | AvailabilityError::Unauthorized => {
                ErrorCode::ValidationFailed
            }
            AvailabilityError::Upstream(_) => ErrorCode::InternalError,
        }
    }
}

fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("'{}' {}", v.field, v.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<DomainError> for AvailabilityError {
    fn from(err: DomainError) -> Self {
        AvailabilityError::Upstream(err.to_string())
    }
}

impl From<AuthError> for AvailabilityError {
    fn from(err: AuthError) -> Self {
        if err.requires_reauthentication() {
            AvailabilityError::Unauthorized
        } else {
            AvailabilityError::Upstream(err.to_string())
        }
    }
}
