//! Operator REST API handlers for the two mutating actions.
//!
//! Neither endpoint takes a body or checks identity; the admin role is a
//! viewer-side label only.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/simulate-surge` | ICU -5, O- -2, surge alert |
//! | `POST` | `/reset` | Initial snapshot, ticker paused briefly, reset alert |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use jeevansetu_core::actions;
use jeevansetu_types::ActionResponse;

use crate::state::AppState;

/// Acknowledgment for `POST /simulate-surge`.
pub const SURGE_ACK: &str = "Surge simulated";

/// Acknowledgment for `POST /reset`.
pub const RESET_ACK: &str = "System reset";

// ---------------------------------------------------------------------------
// POST /simulate-surge
// ---------------------------------------------------------------------------

/// Simulate an emergency surge.
///
/// The updated snapshot and the surge alert are pushed to every viewer
/// before this returns.
pub async fn simulate_surge(State(state): State<Arc<AppState>>) -> Json<ActionResponse> {
    actions::simulate_surge(&state.dashboard).await;
    Json(ActionResponse::new(SURGE_ACK))
}

// ---------------------------------------------------------------------------
// POST /reset
// ---------------------------------------------------------------------------

/// Reset the dashboard to its initial snapshot.
///
/// The ticker stays paused for the configured window afterwards.
pub async fn reset(State(state): State<Arc<AppState>>) -> Json<ActionResponse> {
    actions::reset_system(&state.dashboard).await;
    Json(ActionResponse::new(RESET_ACK))
}
