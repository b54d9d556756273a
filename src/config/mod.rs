//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the
//! `BARBERSHOP_AVAILABILITY` prefix and nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use barbershop_availability::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//!
//! println!("Server running on {}", config.server.socket_addr()?);
//! # Ok(())
//! # }
//! ```

mod auth;
mod database;
mod error;
mod schedule;
mod server;

pub use auth::{AuthConfig, MIN_SECRET_LEN};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use schedule::ScheduleConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Booking store (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Bearer token verification
    pub auth: AuthConfig,

    /// Shop wall clock
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BARBERSHOP_AVAILABILITY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BARBERSHOP_AVAILABILITY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `BARBERSHOP_AVAILABILITY__SCHEDULE__UTC_OFFSET_MINUTES=-180` -> `schedule.utc_offset_minutes = -180`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BARBERSHOP_AVAILABILITY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first section that is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.schedule.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; tests touching them run one at a time.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "BARBERSHOP_AVAILABILITY__DATABASE__URL",
        "BARBERSHOP_AVAILABILITY__AUTH__JWT_SECRET",
        "BARBERSHOP_AVAILABILITY__AUTH__ISSUER",
        "BARBERSHOP_AVAILABILITY__AUTH__AUDIENCE",
        "BARBERSHOP_AVAILABILITY__SERVER__PORT",
        "BARBERSHOP_AVAILABILITY__SERVER__ENVIRONMENT",
        "BARBERSHOP_AVAILABILITY__SCHEDULE__UTC_OFFSET_MINUTES",
    ];

    fn set_minimal_env() {
        env::set_var(
            "BARBERSHOP_AVAILABILITY__DATABASE__URL",
            "postgresql://test@localhost/bookings",
        );
        env::set_var(
            "BARBERSHOP_AVAILABILITY__AUTH__JWT_SECRET",
            "0123456789abcdef0123456789abcdef",
        );
        env::set_var(
            "BARBERSHOP_AVAILABILITY__AUTH__ISSUER",
            "https://auth.example.com",
        );
        env::set_var("BARBERSHOP_AVAILABILITY__AUTH__AUDIENCE", "barbershop-availability");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.database.url, "postgresql://test@localhost/bookings");
        assert_eq!(config.auth.audience, "barbershop-availability");
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.schedule.utc_offset_minutes, 0);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("BARBERSHOP_AVAILABILITY__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_schedule_offset_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("BARBERSHOP_AVAILABILITY__SCHEDULE__UTC_OFFSET_MINUTES", "-180");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.schedule.utc_offset_minutes, -180);
        assert_eq!(config.schedule.time_reference().unwrap().offset_minutes(), -180);
    }

    #[test]
    fn test_missing_auth_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(
            "BARBERSHOP_AVAILABILITY__DATABASE__URL",
            "postgresql://test@localhost/bookings",
        );
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
