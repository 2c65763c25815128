//! Engine binary for the `JeevanSetu` dashboard.
//!
//! Wires together the state store, the simulation ticker and the
//! Observer API server, then runs until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `jeevansetu-config.yaml` (optional)
//! 2. Initialize structured logging (tracing)
//! 3. Create the push channel and the dashboard
//! 4. Start the Observer API server
//! 5. Start the simulation ticker
//! 6. Wait for `Ctrl-C`, then stop the ticker and drain the server

mod error;
mod telemetry;

use std::path::Path;
use std::sync::Arc;

use jeevansetu_core::config::DashboardConfig;
use jeevansetu_core::runner;
use jeevansetu_observer::server::ServerConfig;
use jeevansetu_observer::startup::spawn_observer;
use jeevansetu_observer::state::AppState;
use tokio::sync::oneshot;
use tracing::{info, warn};

use crate::error::EngineError;

/// Configuration file looked up in the working directory.
const CONFIG_FILE: &str = "jeevansetu-config.yaml";

/// Application entry point for the engine.
///
/// # Errors
///
/// Returns an error if configuration, logging or the server bind fails.
#[tokio::main]
async fn main() -> Result<(), EngineError> {
    // 1. Load configuration.
    let (config, from_file) = load_config(Path::new(CONFIG_FILE))?;

    // 2. Initialize structured logging.
    telemetry::init(&config.logging)?;

    info!("jeevansetu-engine starting");
    if !from_file {
        info!("Config file not found, using defaults");
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        tick_interval_ms = config.simulation.tick_interval_ms,
        reset_pause_ms = config.simulation.reset_pause_ms,
        seeded = config.simulation.seed.is_some(),
        "Configuration loaded"
    );

    // 3. Create the push channel and the dashboard.
    let app_state = Arc::new(AppState::new(config.simulation.clone()));

    // 4. Start the Observer API server.
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let observer = spawn_observer(
        &ServerConfig::from(&config.server),
        Arc::clone(&app_state),
        async move {
            let _ = shutdown_rx.await;
        },
    )
    .await?;
    info!(addr = %observer.addr, "Observer API server started");

    // 5. Start the simulation ticker.
    let rng = runner::churn_rng(config.simulation.seed);
    let ticker = tokio::spawn(runner::run_ticker(Arc::clone(&app_state.dashboard), rng));

    // 6. Run until interrupted.
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    ticker.abort();
    let _ = shutdown_tx.send(());
    if let Err(e) = observer.handle.await {
        warn!(error = %e, "Observer task ended abnormally");
    }

    info!("jeevansetu-engine shutdown complete");
    Ok(())
}

/// Load configuration from `path`, or defaults plus environment
/// overrides if the file does not exist.
///
/// The flag is `true` when the file was read.
fn load_config(path: &Path) -> Result<(DashboardConfig, bool), EngineError> {
    if path.exists() {
        Ok((DashboardConfig::from_file(path)?, true))
    } else {
        Ok((DashboardConfig::from_env()?, false))
    }
}
