//! Mock access gate for testing.
//!
//! Implements the `AccessGate` port without a real identity provider.
//!
//! # Example
//!
//! ```ignore
//! use barbershop_availability::adapters::auth::MockAccessGate;
//! use barbershop_availability::ports::RequestContext;
//!
//! let gate = MockAccessGate::new().with_test_user("valid-token", "user-123");
//!
//! let session = gate.current_session(&RequestContext::with_bearer("valid-token")).await?;
//! assert!(session.is_some());
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, CallerSession, UserId};
use crate::ports::{AccessGate, RequestContext};

/// Mock access gate.
///
/// Stores a map of tokens to sessions. Unknown tokens and anonymous
/// contexts resolve to no session.
#[derive(Debug, Default)]
pub struct MockAccessGate {
    /// Map of valid tokens to their sessions
    sessions: RwLock<HashMap<String, CallerSession>>,
    /// Optional error to return for every lookup (for error testing)
    force_error: RwLock<Option<AuthError>>,
    /// Number of lookups performed
    calls: AtomicUsize,
}

impl MockAccessGate {
    /// Creates a new empty mock gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a session.
    pub fn with_session(self, token: impl Into<String>, session: CallerSession) -> Self {
        self.sessions.write().unwrap().insert(token.into(), session);
        self
    }

    /// Adds a valid token with a non-expiring session for `user_id`.
    pub fn with_test_user(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let session = CallerSession::new(UserId::new(user_id).unwrap(), None);
        self.with_session(token, session)
    }

    /// Forces every lookup to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap() = None;
    }

    /// Revokes a token, making it invalid.
    pub fn revoke(&self, token: &str) {
        self.sessions.write().unwrap().remove(token);
    }

    /// Number of times the gate was consulted.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccessGate for MockAccessGate {
    async fn current_session(
        &self,
        context: &RequestContext,
    ) -> Result<Option<CallerSession>, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }

        Ok(context
            .bearer_token()
            .and_then(|token| self.sessions.read().unwrap().get(token).cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_session_for_registered_token() {
        let gate = MockAccessGate::new().with_test_user("valid-token", "user-123");

        let session = gate
            .current_session(&RequestContext::with_bearer("valid-token"))
            .await
            .unwrap();

        assert_eq!(session.unwrap().user_id.as_str(), "user-123");
    }

    #[tokio::test]
    async fn returns_none_for_unknown_token() {
        let gate = MockAccessGate::new().with_test_user("valid-token", "user-123");

        let session = gate
            .current_session(&RequestContext::with_bearer("other"))
            .await
            .unwrap();

        assert!(session.is_none());
    }

    #[tokio::test]
    async fn returns_none_for_anonymous_context() {
        let gate = MockAccessGate::new().with_test_user("valid-token", "user-123");

        let session = gate
            .current_session(&RequestContext::anonymous())
            .await
            .unwrap();

        assert!(session.is_none());
    }

    #[tokio::test]
    async fn forced_error_is_returned_until_cleared() {
        let gate = MockAccessGate::new()
            .with_test_user("valid-token", "user-123")
            .with_error(AuthError::service_unavailable("down"));
        let context = RequestContext::with_bearer("valid-token");

        assert!(matches!(
            gate.current_session(&context).await,
            Err(AuthError::ServiceUnavailable(_))
        ));

        gate.clear_error();
        assert!(gate.current_session(&context).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn revoked_token_no_longer_resolves() {
        let gate = MockAccessGate::new().with_test_user("valid-token", "user-123");
        gate.revoke("valid-token");

        let session = gate
            .current_session(&RequestContext::with_bearer("valid-token"))
            .await
            .unwrap();

        assert!(session.is_none());
    }

    #[tokio::test]
    async fn counts_every_lookup() {
        let gate = MockAccessGate::new();

        gate.current_session(&RequestContext::anonymous()).await.unwrap();
        gate.current_session(&RequestContext::with_bearer("x")).await.unwrap();

        assert_eq!(gate.call_count(), 2);
    }
}
