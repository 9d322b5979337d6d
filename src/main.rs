//! Persian Form Input - Main entry point
//!
//! Runs the MCP server that exposes the form input rules over stdio.

use anyhow::Result;
use persian_form_input::{Config, FormInputMcpServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Email suggestions after {} characters, overlay delay {} ms",
        config.email_suggestion_min_length, config.overlay_delay_ms
    );

    let server = FormInputMcpServer::new(&config);

    info!("Starting MCP server with stdio transport");
    persian_form_input::server::run_server(server).await?;

    info!("Persian Form Input server shutdown complete");
    Ok(())
}
