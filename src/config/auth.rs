//! Access gate configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;
use crate::adapters::auth::JwtGateConfig;

/// Shortest HMAC secret accepted, in bytes (HS256 block-size guidance).
pub const MIN_SECRET_LEN: usize = 32;

/// Bearer token verification settings (HS256 JWT)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret the identity service signs tokens with
    pub jwt_secret: SecretString,

    /// Expected `iss` claim
    pub issuer: String,

    /// Expected `aud` claim
    pub audience: String,

    /// Clock skew tolerated on token expiry, in seconds
    #[serde(default = "default_leeway")]
    pub leeway_secs: u64,
}

impl AuthConfig {
    /// Gate configuration for `JwtAccessGate`.
    pub fn gate_config(&self) -> JwtGateConfig {
        JwtGateConfig::new(
            self.jwt_secret.expose_secret().clone(),
            self.issuer.clone(),
            self.audience.clone(),
        )
        .with_leeway(self.leeway_secs)
    }

    /// Validate authentication configuration
    ///
    /// In production the issuer must be an HTTPS URL.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("auth.jwt_secret"));
        }
        if secret.len() < MIN_SECRET_LEN {
            return Err(ValidationError::JwtSecretTooShort(MIN_SECRET_LEN));
        }
        if self.issuer.is_empty() {
            return Err(ValidationError::MissingRequired("auth.issuer"));
        }
        if self.audience.is_empty() {
            return Err(ValidationError::MissingRequired("auth.audience"));
        }

        if *environment == Environment::Production && !self.issuer.starts_with("https://") {
            return Err(ValidationError::IssuerMustBeHttps);
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::new(String::new()),
            issuer: String::new(),
            audience: String::new(),
            leeway_secs: default_leeway(),
        }
    }
}

fn default_leeway() -> u64 {
    60
}
