//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own, configured entirely from the environment.
//!
//! ## Intended use
//! Useful for development when working on the API alone. The workspace's main `rra-run` binary
//! serves the same router.

use api_rest::{router, AppState};
use rra_core::config::core_config_from_env_values;
use rra_core::ReportService;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the RRA REST API server
///
/// # Environment Variables
/// - `RRA_REST_ADDR`: Server address (default: "0.0.0.0:8000")
/// - `REPORT_DATA_DIR`: Report storage directory (default: "report_data")
/// - `RRA_LEXICON_FILE`: Optional lexicon override file
/// - `RRA_ENTITY_GAZETTEER_FILE`: Optional entity gazetteer file
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the lexicon or gazetteer file cannot be loaded,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("RRA_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());

    tracing::info!("-- Starting RRA REST API on {}", addr);

    let cfg = Arc::new(core_config_from_env_values(
        std::env::var("REPORT_DATA_DIR").ok(),
        std::env::var("RRA_LEXICON_FILE").ok(),
        std::env::var("RRA_ENTITY_GAZETTEER_FILE").ok(),
    )?);

    let app = router(AppState::new(ReportService::new(cfg)?));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
