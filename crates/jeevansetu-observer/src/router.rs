//! Axum router construction for the Observer API.
//!
//! Assembles all routes (REST + `WebSocket`) into a single [`Router`]
//! with unrestricted CORS so browser dashboards on any origin can call it.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::operator;
use crate::state::AppState;
use crate::ws;

/// Build the complete Axum router for the Observer server.
///
/// The router includes:
/// - `GET /` -- HTML status page
/// - `GET /data` -- current snapshot
/// - `GET /status` -- server status
/// - `POST /simulate-surge` -- surge action
/// - `POST /reset` -- reset action
/// - `GET /ws` -- `WebSocket` push channel
///
/// Unknown paths get a JSON 404.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Push channel
        .route("/ws", get(ws::ws_events))
        // REST API
        .route("/data", get(handlers::get_data))
        .route("/status", get(handlers::status))
        // Operator actions
        .route("/simulate-surge", post(operator::simulate_surge))
        .route("/reset", post(operator::reset))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
