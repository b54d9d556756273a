//! Authentication types for the domain layer.
//!
//! `CallerSession` is the only thing the availability core learns about a
//! caller: that a valid session exists. Its contents are carried for logging
//! and never influence which slots are returned.
//!
//! Any identity provider can populate these types via the `AccessGate` port.

use super::{Timestamp, UserId};
use thiserror::Error;

/// A present and valid caller session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerSession {
    /// The user the session belongs to.
    pub user_id: UserId,

    /// When the session stops being valid, if the provider says so.
    pub expires_at: Option<Timestamp>,
}

impl CallerSession {
    /// Creates a new caller session.
    pub fn new(user_id: UserId, expires_at: Option<Timestamp>) -> Self {
        Self { user_id, expires_at }
    }
}

/// Authentication errors that can occur while resolving a session.
///
/// These errors are **domain-centric** - they describe what went wrong
/// from the application's perspective, not the auth provider's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The credential is malformed or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The credential has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The authentication service is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error means the caller simply has no valid session.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }

    /// Returns true if this is a fault of the auth service rather than the caller.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_session_new_creates_session() {
        let session = CallerSession::new(UserId::new("user-123").unwrap(), None);

        assert_eq!(session.user_id.as_str(), "user-123");
        assert!(session.expires_at.is_none());
    }

    #[test]
    fn auth_error_invalid_token_displays_correctly() {
        let err = AuthError::InvalidToken;
        assert_eq!(format!("{}", err), "Invalid or expired token");
    }

    #[test]
    fn auth_error_service_unavailable_displays_message() {
        let err = AuthError::service_unavailable("Connection refused");
        assert_eq!(format!("{}", err), "Auth service unavailable: Connection refused");
    }

    #[test]
    fn auth_error_requires_reauthentication_for_token_errors() {
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(AuthError::TokenExpired.requires_reauthentication());
        assert!(!AuthError::service_unavailable("").requires_reauthentication());
    }

    #[test]
    fn auth_error_is_transient_for_service_errors() {
        assert!(AuthError::service_unavailable("timeout").is_transient());
        assert!(!AuthError::InvalidToken.is_transient());
        assert!(!AuthError::TokenExpired.is_transient());
    }
}
