//! Access gate port: "is there a valid session behind this request?"
//!
//! The availability query consults the gate once per request, before any
//! booking data is touched. The gate only has to answer with a session or
//! with its absence; it never sees the query payload.
//!
//! # Contract
//!
//! Implementations must:
//! - Return `Ok(None)` when no credential is presented
//! - Return `Ok(None)` when the credential is malformed, forged or expired
//! - Return `Err(AuthError::ServiceUnavailable)` only for faults of the
//!   identity provider itself
//!
//! # Example
//!
//! ```ignore
//! let context = RequestContext::with_bearer("eyJ...");
//! match gate.current_session(&context).await? {
//!     Some(session) => { /* proceed */ }
//!     None => return Err(AvailabilityError::Unauthorized),
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, CallerSession};

/// Ambient caller context of one request.
///
/// Built by the transport layer; carries the raw credential, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    bearer_token: Option<String>,
}

impl RequestContext {
    /// Context of a caller that presented no credential.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context of a caller that presented a bearer token.
    pub fn with_bearer(token: impl Into<String>) -> Self {
        Self {
            bearer_token: Some(token.into()),
        }
    }

    /// Reads the credential from an `Authorization` header value.
    ///
    /// Anything other than a non-empty `Bearer <token>` yields an anonymous context.
    pub fn from_authorization_header(value: Option<&str>) -> Self {
        let token = value
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty());

        match token {
            Some(token) => Self::with_bearer(token),
            None => Self::anonymous(),
        }
    }

    /// The raw bearer token (without "Bearer " prefix).
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }
}

/// Resolves the session of the current caller.
#[async_trait]
pub trait AccessGate: Send + Sync {
    /// Returns the caller's session, or `None` if there is no valid one.
    async fn current_session(
        &self,
        context: &RequestContext,
    ) -> Result<Option<CallerSession>, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    struct SingleTokenGate;

    #[async_trait]
    impl AccessGate for SingleTokenGate {
        async fn current_session(
            &self,
            context: &RequestContext,
        ) -> Result<Option<CallerSession>, AuthError> {
            Ok(context
                .bearer_token()
                .filter(|t| *t == "valid")
                .map(|_| CallerSession::new(UserId::new("user-123").unwrap(), None)))
        }
    }

    #[tokio::test]
    async fn gate_returns_session_for_valid_token() {
        let gate = SingleTokenGate;
        let session = gate
            .current_session(&RequestContext::with_bearer("valid"))
            .await
            .unwrap();

        assert_eq!(session.unwrap().user_id.as_str(), "user-123");
    }

    #[tokio::test]
    async fn gate_returns_none_for_anonymous_caller() {
        let gate = SingleTokenGate;
        let session = gate
            .current_session(&RequestContext::anonymous())
            .await
            .unwrap();

        assert!(session.is_none());
    }

    #[test]
    fn authorization_header_with_bearer_prefix_yields_token() {
        let context = RequestContext::from_authorization_header(Some("Bearer my-secret-token"));
        assert_eq!(context.bearer_token(), Some("my-secret-token"));
    }

    #[test]
    fn authorization_header_without_bearer_prefix_is_anonymous() {
        assert_eq!(
            RequestContext::from_authorization_header(Some("Basic dXNlcjpwYXNz")),
            RequestContext::anonymous()
        );
        assert_eq!(
            RequestContext::from_authorization_header(Some("my-secret-token")),
            RequestContext::anonymous()
        );
        assert_eq!(
            RequestContext::from_authorization_header(Some("Bearer   ")),
            RequestContext::anonymous()
        );
        assert_eq!(
            RequestContext::from_authorization_header(None),
            RequestContext::anonymous()
        );
    }

    #[test]
    fn access_gate_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn AccessGate) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn AccessGate>>();
    }
}
