//! `WebSocket` handler for the push channel.
//!
//! Clients connect to `GET /ws` and receive a JSON-encoded [`PushEvent`]
//! text frame for every state change and alert. Nothing is replayed on
//! connect; clients fetch `GET /data` first.
//!
//! If a client falls behind, lagged messages are silently skipped and
//! the client resumes from the most recent event.
//!
//! [`PushEvent`]: jeevansetu_types::PushEvent

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::state::AppState;

/// Upgrade an HTTP request to a `WebSocket` connection and begin
/// streaming push events.
///
/// # Route
///
/// `GET /ws`
pub async fn ws_events(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_ws(socket, state))
}

/// Subscribe to the broadcast channel and forward each event as a text
/// frame until either side goes away.
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    let mut rx = state.subscribe();
    info!(viewers = state.viewer_count(), "Viewer connected");

    loop {
        tokio::select! {
            result = rx.recv() => {
                match result {
                    Ok(event) => {
                        let json = match serde_json::to_string(&event) {
                            Ok(j) => j,
                            Err(e) => {
                                warn!("Failed to serialize push event: {e}");
                                continue;
                            }
                        };
                        if socket.send(Message::Text(json.into())).await.is_err() {
                            debug!("Viewer disconnected (send failed)");
                            break;
                        }
                    }
                    Err(RecvError::Lagged(n)) => {
                        debug!(skipped = n, "Viewer lagged, skipping ahead");
                    }
                    Err(RecvError::Closed) => {
                        debug!("Broadcast channel closed, shutting down WebSocket");
                        break;
                    }
                }
            }
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Close(_))) | None => {
                        debug!("Viewer disconnected");
                        break;
                    }
                    Some(Err(e)) => {
                        debug!("WebSocket error: {e}");
                        break;
                    }
                    // Viewers are subscribe-only. Pings are answered by the
                    // socket itself; anything else is ignored.
                    _ => {}
                }
            }
        }
    }

    drop(rx);
    info!(viewers = state.viewer_count(), "Viewer left");
}
