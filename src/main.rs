//! Barbershop availability service binary.
//!
//! Wires configuration, tracing, the booking store pool, the JWT access gate
//! and the HTTP router, then serves until interrupted.

use std::sync::Arc;

use axum::Router;
use http::{header::AUTHORIZATION, Method};
use thiserror::Error;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use barbershop_availability::adapters::http::api_router;
use barbershop_availability::adapters::{JwtAccessGate, PostgresBookingReader};
use barbershop_availability::application::handlers::availability::GetAvailableSlotsHandler;
use barbershop_availability::config::{AppConfig, ConfigError, ServerConfig, ValidationError};

/// Failures that stop the service from starting.
#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Failed to initialize tracing: {0}")]
    Tracing(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config)?;
    config.validate()?;

    let time_reference = config.schedule.time_reference()?;
    info!(
        environment = ?config.server.environment,
        utc_offset_minutes = time_reference.offset_minutes(),
        "Starting barbershop availability service"
    );

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;
    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
    }

    let access_gate = Arc::new(JwtAccessGate::new(config.auth.gate_config()));
    let booking_reader = Arc::new(PostgresBookingReader::new(pool));
    let handler = Arc::new(
        GetAvailableSlotsHandler::new(access_gate, booking_reader)
            .with_time_reference(time_reference),
    );

    let app = with_layers(api_router(handler), &config.server)?;

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) -> Result<(), StartupError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if config.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init()
    };

    result.map_err(|e| StartupError::Tracing(e.to_string()))
}

fn with_layers(router: Router, server: &ServerConfig) -> Result<Router, StartupError> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([AUTHORIZATION])
        .allow_origin(AllowOrigin::list(server.allowed_origins()?));

    Ok(router
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
