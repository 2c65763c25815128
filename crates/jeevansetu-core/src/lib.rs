//! State store, simulation ticker and operator actions for the `JeevanSetu`
//! resource dashboard.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `jeevansetu-config.yaml`.
//! - [`store`] -- [`StateStore`]: snapshot, ICU history and pause flag
//!   behind one lock.
//! - [`history`] -- The three-sample ICU history window.
//! - [`pause`] -- Pause flag with a replaceable one-shot clear.
//! - [`resources`] -- Pure snapshot mutations (tick churn, surge).
//! - [`alerts`] -- Trend and critical alert rules and messages.
//! - [`publish`] -- [`Publisher`] seam to the push channel.
//! - [`dashboard`] -- [`Dashboard`], the owned aggregate shared by tasks.
//! - [`tick`] -- One simulation tick.
//! - [`runner`] -- The fixed-period ticker loop.
//! - [`actions`] -- Surge and reset.
//!
//! [`StateStore`]: store::StateStore
//! [`Publisher`]: publish::Publisher
//! [`Dashboard`]: dashboard::Dashboard

pub mod actions;
pub mod alerts;
pub mod config;
pub mod dashboard;
pub mod history;
pub mod pause;
pub mod publish;
pub mod resources;
pub mod runner;
pub mod store;
pub mod tick;

pub use dashboard::Dashboard;
pub use publish::Publisher;
pub use store::StateStore;
