//! Production Agent - HTTP Server Entry Point
//!
//! Starts the HTTP server that exposes the agent and its health probes.

use production_agent::{api, config::Config, logging};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Best-effort .env loading; a missing file is fine.
    let _ = dotenvy::dotenv();

    // Load configuration (invalid PORT aborts startup here)
    let config = Config::from_env()?;

    // Initialize logging
    logging::init(&config.log_level)?;
    info!(
        "Loaded configuration: agent={} environment={}",
        config.agent_name, config.environment
    );

    // Start HTTP server
    info!("Creating server on {}:{}", config.host, config.port);
    api::serve(config).await?;

    Ok(())
}
