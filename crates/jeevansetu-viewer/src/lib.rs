//! Terminal viewer for the `JeevanSetu` dashboard.
//!
//! The viewer fetches the current snapshot once over REST, then follows
//! the server's push channel. Everything else it shows is local: the
//! activity log, the transient alert banner, the selected district, the
//! Admin/Public role and the resource intelligence view.
//!
//! # Modules
//!
//! - [`app`] -- command execution
//! - [`client`] -- REST calls to the server
//! - [`subscribe`] -- `WebSocket` push subscription
//! - [`state`] -- local view state driven by server events and commands
//! - [`command`] -- parsing of terminal commands
//! - [`intel`] -- derived per-resource indicators
//! - [`render`] -- plain-text rendering

pub mod app;
pub mod client;
pub mod command;
pub mod config;
pub mod district;
pub mod error;
pub mod intel;
pub mod log;
pub mod render;
pub mod role;
pub mod state;
pub mod subscribe;

pub use client::ApiClient;
pub use config::ViewerConfig;
pub use error::ViewerError;
pub use state::ViewerState;
pub use subscribe::PushSubscription;
