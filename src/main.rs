use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use api_shared::HealthService;
use rra_core::ReportService;
use rra_core::config::core_config_from_env_values;

/// Main entry point for the RRA application
///
/// Resolves configuration once, builds the report service and serves the REST API.
///
/// # Environment Variables
/// - `RRA_REST_ADDR`: REST server address (default: "0.0.0.0:8000")
/// - `REPORT_DATA_DIR`: Directory for report storage (default: "report_data")
/// - `RRA_LEXICON_FILE`: Optional YAML file overriding the built-in lexicons
/// - `RRA_ENTITY_GAZETTEER_FILE`: Optional YAML list of known entity names
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, startup or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("rra=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr: SocketAddr = std::env::var("RRA_REST_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8000".into())
        .parse()?;

    let cfg = Arc::new(core_config_from_env_values(
        std::env::var("REPORT_DATA_DIR").ok(),
        std::env::var("RRA_LEXICON_FILE").ok(),
        std::env::var("RRA_ENTITY_GAZETTEER_FILE").ok(),
    )?);

    tracing::info!(
        report_data_dir = %cfg.report_data_dir().display(),
        gazetteer_entries = cfg.gazetteer().entries().len(),
        "++ {}",
        HealthService::check_health().message
    );
    tracing::info!("++ Starting RRA REST on {}", rest_addr);

    let service = ReportService::new(cfg)?;
    let app = router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
