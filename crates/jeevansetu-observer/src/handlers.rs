//! Read-only REST endpoint handlers for the Observer server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Server-rendered HTML status page |
//! | `GET` | `/data` | Current resource snapshot |
//! | `GET` | `/status` | Pause flag, timings and viewer count |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::Uri;
use axum::response::{Html, IntoResponse};
use jeevansetu_types::{BedCategory, ServerStatus, Snapshot};

use crate::error::ObserverError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- HTML status page
// ---------------------------------------------------------------------------

/// Serve a static HTML page with the current counts and API links.
///
/// Refreshes itself on the tick period; live updates are on `/ws`.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.dashboard.snapshot().await;
    let paused = state.dashboard.is_paused().await;
    let refresh_secs = state.dashboard.tick_interval().as_secs().max(1);
    let status = if paused { "PAUSED" } else { "RUNNING" };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta http-equiv="refresh" content="{refresh_secs}">
    <title>JeevanSetu</title>
    <style>
        body {{
            background: #f4f6f9;
            color: #1b1f24;
            font-family: 'Segoe UI', sans-serif;
            padding: 2rem;
            max-width: 900px;
            margin: 0 auto;
        }}
        h1 {{ margin-bottom: 0.25rem; }}
        .subtitle {{ color: #57606a; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #fff;
            box-shadow: 0 2px 5px rgba(0,0,0,0.1);
            border-radius: 8px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #57606a; font-size: 0.85rem; }}
        .metric .value {{ font-size: 1.5rem; font-weight: bold; }}
        .status {{ font-weight: bold; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        code {{ background: #e9f2ff; padding: 0 0.3rem; }}
    </style>
</head>
<body>
    <h1>JeevanSetu</h1>
    <p class="subtitle">Smart City Emergency Intelligence Platform</p>

    <p>Sensor feed: <span class="status">{status}</span></p>

    <h2>Bed Availability</h2>
    <div>
{beds}    </div>

    <h2>Blood Bank Status</h2>
    <div>
{blood}    </div>

    <h2>API</h2>
    <ul>
        <li><code>GET <a href="/data">/data</a></code> -- current snapshot</li>
        <li><code>GET <a href="/status">/status</a></code> -- server status</li>
        <li><code>POST /simulate-surge</code> -- simulate an emergency surge</li>
        <li><code>POST /reset</code> -- reset to initial counts</li>
        <li><code>ws://host:port/ws</code> -- live <code>updateData</code> and <code>alert</code> events</li>
    </ul>
</body>
</html>"#,
        beds = bed_cards(&snapshot),
        blood = blood_cards(&snapshot),
    ))
}

fn metric_card(label: &str, value: u32) -> String {
    format!(
        "        <div class=\"metric\"><div class=\"label\">{label}</div>\
         <div class=\"value\">{value}</div></div>\n"
    )
}

fn bed_cards(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    for category in BedCategory::ALL {
        out.push_str(&metric_card(
            &format!("{category} Beds"),
            snapshot.beds(category),
        ));
    }
    out
}

fn blood_cards(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    for (blood_type, units) in &snapshot.blood {
        out.push_str(&metric_card(&format!("{blood_type} Units"), *units));
    }
    out
}

// ---------------------------------------------------------------------------
// GET /data -- current snapshot
// ---------------------------------------------------------------------------

/// Return the current snapshot.
///
/// Viewers call this once before subscribing to `/ws`, since the push
/// channel does not replay state to new subscribers.
pub async fn get_data(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    Json(state.dashboard.snapshot().await)
}

// ---------------------------------------------------------------------------
// GET /status
// ---------------------------------------------------------------------------

/// Return the pause flag, timer settings and connected viewer count.
pub async fn status(State(state): State<Arc<AppState>>) -> Json<ServerStatus> {
    let settings = state.dashboard.settings();
    Json(ServerStatus {
        paused: state.dashboard.is_paused().await,
        tick_interval_ms: settings.tick_interval_ms,
        reset_pause_ms: settings.reset_pause_ms,
        viewers: state.viewer_count(),
    })
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// JSON 404 for unknown routes.
pub async fn not_found(uri: Uri) -> ObserverError {
    ObserverError::NotFound(format!("no route for {uri}"))
}
