//! Observer server startup helper for embedding in the engine binary.
//!
//! Provides [`spawn_observer`] which binds the listener eagerly and then
//! launches the Observer HTTP + `WebSocket` server on a background Tokio
//! task, so the engine can run it alongside the ticker.
//!
//! # Usage
//!
//! ```rust,ignore
//! use jeevansetu_observer::server::ServerConfig;
//! use jeevansetu_observer::startup::spawn_observer;
//! use jeevansetu_observer::state::AppState;
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState::default());
//! let observer = spawn_observer(&ServerConfig::default(), state, std::future::pending()).await?;
//! println!("listening on {}", observer.addr);
//! ```

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::server::{self, ServerConfig, ServerError};
use crate::state::AppState;

/// Errors that can occur when spawning the Observer server.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The server failed to bind or start.
    #[error("server start error: {0}")]
    Server(#[from] ServerError),
}

/// A running Observer server.
#[derive(Debug)]
pub struct RunningObserver {
    /// The address the server is bound to.
    pub addr: SocketAddr,
    /// The background serving task.
    pub handle: JoinHandle<()>,
}

/// Bind the Observer server and serve it on a background Tokio task.
///
/// The bind happens before this returns, so port conflicts surface
/// here rather than inside the task. The server stops once `shutdown`
/// resolves.
///
/// # Errors
///
/// Returns [`StartupError::Server`] if the server cannot bind to the
/// requested address.
pub async fn spawn_observer<F>(
    config: &ServerConfig,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<RunningObserver, StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = server::bind(config).await?;
    let addr = server::local_addr(&listener)?;

    let handle = tokio::spawn(async move {
        if let Err(e) = server::serve(listener, state, shutdown).await {
            tracing::error!(error = %e, "Observer server exited with error");
        }
    });

    tracing::info!(%addr, "Observer server spawned on background task");

    Ok(RunningObserver { addr, handle })
}
