//! Path Lamps simulator daemon.
//!
//! This is the main entry point that wires the pure simulator core to
//! its HTTP boundary. It initializes logging, loads configuration, and
//! serves the API until the process is terminated.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `pathlamps.yaml` (or `PATHLAMPS_CONFIG`)
//! 3. Build the application state from the report conventions
//! 4. Bind and serve the API

use std::path::PathBuf;

use pathlamps_core::AppConfig;
use pathlamps_server::server::{ServerConfig, start_server};
use pathlamps_server::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default configuration file path, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "pathlamps.yaml";

/// Application entry point for the simulator daemon.
///
/// # Errors
///
/// Returns an error if configuration loading or serving fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("pathlamps starting");

    // 2. Load configuration. A missing file falls back to defaults;
    //    a present but malformed file is a startup error.
    let config_path = std::env::var("PATHLAMPS_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = AppConfig::from_file_or_default(&config_path)?;
    info!(
        host = config.server.host,
        port = config.server.port,
        mode = ?config.report.mode,
        id_base = ?config.report.id_base,
        "Configuration loaded"
    );

    // 3. Build the application state.
    let state = AppState::with_options(config.simulate_options());

    // 4. Serve until terminated.
    let server_config = ServerConfig::from(&config.server);
    start_server(&server_config, state).await?;

    Ok(())
}
