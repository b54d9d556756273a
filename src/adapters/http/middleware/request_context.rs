//! Request context extraction for axum.
//!
//! The availability handler decides on its own whether a session exists, so
//! extraction never rejects: a missing or malformed `Authorization` header
//! simply yields an anonymous context.
//!
//! ```text
//! Request → Caller extractor → RequestContext { bearer_token }
//!                                      ↓
//!                              GetAvailableSlotsHandler → AccessGate
//! ```

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts};

use crate::ports::RequestContext;

/// Extractor carrying the caller's `RequestContext`.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(Caller(context): Caller) -> impl IntoResponse {
///     format!("has token: {}", context.bearer_token().is_some())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Caller(pub RequestContext);

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        Ok(Caller(RequestContext::from_authorization_header(header)))
    }
}
