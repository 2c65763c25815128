//! Command execution against the local state and the server.

use std::time::Instant;

use tracing::info;

use crate::client::ApiClient;
use crate::command::Command;
use crate::error::ViewerError;
use crate::render;
use crate::state::ViewerState;

/// What the terminal loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the dashboard.
    Redraw,
    /// Print this text below the dashboard.
    Print(String),
    /// Exit.
    Quit,
}

/// Execute one command.
///
/// Admin commands are refused locally while the role is Public, before
/// anything is sent. A failed server request leaves the state untouched.
pub async fn execute(
    command: Command,
    client: &ApiClient,
    state: &mut ViewerState,
    now: Instant,
) -> Result<Outcome, ViewerError> {
    if let Some(action) = command.admin_action() {
        state.require_admin(action)?;
    }

    match command {
        Command::Show => Ok(Outcome::Redraw),
        Command::Help => Ok(Outcome::Print(String::from(render::HELP))),
        Command::Quit => Ok(Outcome::Quit),
        Command::Role(role) => {
            state.set_role(role);
            info!(%role, "Role switched");
            Ok(Outcome::Redraw)
        }
        Command::District(district) => {
            state.set_district(district);
            Ok(Outcome::Redraw)
        }
        Command::Detail(kind) => Ok(Outcome::Print(state.intel(kind).map_or_else(
            || format!("No data for {kind}"),
            |view| render::intel(&view),
        ))),
        Command::Surge => {
            let ack = client.simulate_surge().await?;
            info!(ack = %ack.message, "Surge acknowledged");
            state.record_surge();
            Ok(Outcome::Redraw)
        }
        Command::Reset => {
            let ack = client.reset().await?;
            info!(ack = %ack.message, "Reset acknowledged");
            state.record_reset();
            Ok(Outcome::Redraw)
        }
        Command::Attack => {
            state.simulate_cyber_attack(now)?;
            Ok(Outcome::Redraw)
        }
    }
}
