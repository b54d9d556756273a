//! JWT access gate.
//!
//! Implements the `AccessGate` port for HS256-signed bearer tokens issued by
//! the surrounding identity service. A token resolves to a session when:
//!
//! 1. Its signature verifies against the shared secret
//! 2. Its issuer and audience match the configured values
//! 3. It has not expired (allowing the configured leeway)
//! 4. Its subject is a non-empty user id
//!
//! Anything else means "no session": a bad token is the caller's problem,
//! never a fault of the gate.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, CallerSession, Timestamp, UserId};
use crate::ports::{AccessGate, RequestContext};

/// Configuration for the JWT access gate.
#[derive(Clone)]
pub struct JwtGateConfig {
    /// Shared HMAC secret the tokens are signed with.
    pub secret: SecretString,

    /// Expected `iss` claim.
    pub issuer: String,

    /// Expected `aud` claim.
    pub audience: String,

    /// Clock skew tolerated on `exp`, in seconds.
    pub leeway_secs: u64,
}

impl JwtGateConfig {
    /// Create a new configuration with required fields.
    pub fn new(
        secret: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
            issuer: issuer.into(),
            audience: audience.into(),
            leeway_secs: 60,
        }
    }

    /// Set custom clock-skew leeway.
    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }
}

impl std::fmt::Debug for JwtGateConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtGateConfig")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("leeway_secs", &self.leeway_secs)
            .finish_non_exhaustive()
    }
}

/// Claims the gate reads from a token.
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    /// Subject - the user ID
    sub: String,

    /// Expiry timestamp (Unix epoch seconds)
    exp: i64,
}

/// Access gate backed by HS256 JWTs.
pub struct JwtAccessGate {
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
}

impl JwtAccessGate {
    pub fn new(config: JwtGateConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.leeway = config.leeway_secs;
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.secret.expose_secret().as_bytes()),
            validation,
            issuer: config.issuer,
            audience: config.audience,
        }
    }

    /// Verifies a token and maps its claims to a session.
    fn decode_session(&self, token: &str) -> Result<CallerSession, AuthError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token expired");
                        AuthError::TokenExpired
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Invalid issuer in token");
                        AuthError::InvalidToken
                    }
                    ErrorKind::InvalidAudience => {
                        tracing::warn!("Invalid audience in token");
                        AuthError::InvalidToken
                    }
                    _ => {
                        tracing::debug!("Token validation failed: {}", e);
                        AuthError::InvalidToken
                    }
                }
            },
        )?;
        let claims = data.claims;

        let user_id = UserId::new(claims.sub).map_err(|_| {
            tracing::warn!("Token has an empty subject");
            AuthError::InvalidToken
        })?;
        let expires_at = Utc
            .timestamp_opt(claims.exp, 0)
            .single()
            .map(Timestamp::from_datetime);

        Ok(CallerSession::new(user_id, expires_at))
    }
}

#[async_trait]
impl AccessGate for JwtAccessGate {
    async fn current_session(
        &self,
        context: &RequestContext,
    ) -> Result<Option<CallerSession>, AuthError> {
        let Some(token) = context.bearer_token() else {
            return Ok(None);
        };

        match self.decode_session(token) {
            Ok(session) => Ok(Some(session)),
            Err(e) if e.requires_reauthentication() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl std::fmt::Debug for JwtAccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtAccessGate")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish_non_exhaustive()
    }
}
