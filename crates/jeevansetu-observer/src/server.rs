//! Observer HTTP server lifecycle management.
//!
//! [`bind`] opens the configured address and [`serve`] runs the Axum
//! router on the bound listener until the supplied shutdown future
//! resolves.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Default TCP port for the Observer server.
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration for the Observer server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: DEFAULT_PORT,
        }
    }
}

impl From<&jeevansetu_core::config::ServerSettings> for ServerConfig {
    fn from(settings: &jeevansetu_core::config::ServerSettings) -> Self {
        Self {
            host: settings.host.clone(),
            port: settings.port,
        }
    }
}

/// Bind a TCP listener for the configured address.
///
/// Host names are resolved, so `localhost` works as well as literal
/// addresses.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the address cannot be resolved or
/// the port is unavailable.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|e| {
            ServerError::Bind(format!(
                "bind failed on {}:{}: {e}",
                config.host, config.port
            ))
        })
}

/// Serve the Observer router on an already-bound listener until
/// `shutdown` resolves.
///
/// # Errors
///
/// Returns [`ServerError::Serve`] on a fatal I/O error.
pub async fn serve<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = local_addr(&listener)?;
    let router = build_router(state);

    info!(%addr, "Observer server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    info!(%addr, "Observer server stopped");
    Ok(())
}

/// The address a listener is actually bound to.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the OS cannot report the address.
pub fn local_addr(listener: &TcpListener) -> Result<SocketAddr, ServerError> {
    listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("no local address: {e}")))
}

/// Errors that can occur when starting or running the Observer server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}
