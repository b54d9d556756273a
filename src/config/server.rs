//! HTTP listener settings for the availability service.

use std::net::SocketAddr;
use std::time::Duration;

use http::HeaderValue;
use serde::Deserialize;

use super::error::ValidationError;

/// Longest request timeout accepted, in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Listener, logging and browser-access settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Selects JSON logs and the HTTPS issuer rule when `production`.
    #[serde(default)]
    pub environment: Environment,

    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated origins allowed to call the API from a browser.
    /// Unset means no cross-origin access.
    pub cors_origins: Option<String>,
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|_| ValidationError::InvalidSocketAddr(raw))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parses `cors_origins` into header values for the CORS layer.
    ///
    /// Each entry must be an `http://` or `https://` origin. A wildcard is
    /// rejected because the CORS layer only accepts it on its own, never
    /// inside a list.
    pub fn allowed_origins(&self) -> Result<Vec<HeaderValue>, ValidationError> {
        let Some(raw) = self.cors_origins.as_deref() else {
            return Ok(Vec::new());
        };

        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                let invalid = || ValidationError::InvalidCorsOrigin(origin.to_string());
                if !(origin.starts_with("http://") || origin.starts_with("https://")) {
                    return Err(invalid());
                }
                HeaderValue::from_str(origin).map_err(|_| invalid())
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.socket_addr()?;
        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout);
        }
        self.allowed_origins()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,barbershop_availability=debug,sqlx=warn".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
