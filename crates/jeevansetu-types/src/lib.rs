//! Shared type definitions for the `JeevanSetu` resource dashboard.
//!
//! This crate is the single source of truth for everything that crosses
//! the wire between the server and its viewers. Types flow downstream to
//! `TypeScript` via `ts-rs` for browser dashboards.
//!
//! # Modules
//!
//! - [`enums`] -- Bed categories and blood types with their wire labels
//! - [`structs`] -- The resource [`Snapshot`] and REST response bodies
//! - [`events`] -- [`PushEvent`] frames carried by the push channel

pub mod enums;
pub mod events;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{BedCategory, BloodType, ResourceKind, UnknownLabel};
pub use events::PushEvent;
pub use structs::{ActionResponse, ServerStatus, Snapshot};
