//! Observer API server for the `JeevanSetu` dashboard.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`WebSocket` endpoint** (`/ws`) pushing `updateData` and `alert`
//!   events via [`tokio::sync::broadcast`]
//! - **REST endpoints** for the current snapshot (`/data`) and server
//!   status (`/status`)
//! - **Operator endpoints** for the surge and reset actions
//! - **Minimal HTML page** (`GET /`) with the current counts
//!
//! # Architecture
//!
//! [`AppState`] holds the shared [`Dashboard`] and a [`Broadcaster`].
//! The dashboard publishes into the broadcaster on every write, whether
//! the write comes from an HTTP handler or the ticker, and each
//! `WebSocket` connection forwards what it receives. Slow viewers skip
//! ahead rather than blocking writers.
//!
//! [`Dashboard`]: jeevansetu_core::Dashboard

pub mod broadcast;
pub mod error;
pub mod handlers;
pub mod operator;
pub mod router;
pub mod server;
pub mod startup;
pub mod state;
pub mod ws;

// Re-export primary types for convenience.
pub use broadcast::Broadcaster;
pub use router::build_router;
pub use server::{ServerConfig, ServerError};
pub use state::AppState;
