//! Rider Desk - API Server Binary
//!
//! Starts the HTTP API for the rider catalog and policy rider management.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin rider-desk-api
//!
//! # Run with environment variables
//! API_PORT=9090 API_TIMEZONE=Asia/Kolkata API_CATALOG_PATH=./catalog.json cargo run --bin rider-desk-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_TIMEZONE` - IANA timezone for attachment dates (default: UTC)
//! * `API_CATALOG_PATH` - JSON rider catalog (default: built-in catalog)

use std::net::SocketAddr;
use std::sync::Arc;

use core_kernel::SystemClock;
use domain_rider::RiderService;
use interface_api::{create_router, config::ApiConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The rider catalog or timezone is invalid
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env()?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        timezone = %config.timezone,
        "Starting Rider Desk API Server"
    );

    let catalog = config.load_catalog()?;
    tracing::info!(
        riders = catalog.len(),
        currency = %catalog.currency(),
        source = config.catalog_path.as_deref().unwrap_or("built-in"),
        "Rider catalog loaded"
    );

    let clock = SystemClock::new(config.timezone()?);
    let service = RiderService::new(Arc::new(catalog), Arc::new(clock));

    let app = create_router(AppState::new(service, config.clone()));

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
