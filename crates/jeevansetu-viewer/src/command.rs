//! Terminal command parsing.
//!
//! | Input | Command |
//! |-------|---------|
//! | *(empty)* | redraw |
//! | `help` | list commands |
//! | `role admin\|public` | switch role |
//! | `surge` | request an emergency surge (Admin) |
//! | `reset` | request a system reset (Admin) |
//! | `attack` | run the local cyber-attack drill (Admin) |
//! | `detail <resource>` | intelligence view, e.g. `detail ICU`, `detail O-` |
//! | `district <name>` | switch district |
//! | `quit` | exit |

use std::str::FromStr;

use jeevansetu_types::ResourceKind;

use crate::district::District;
use crate::error::ViewerError;
use crate::role::Role;

/// A parsed terminal command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Redraw the dashboard.
    Show,
    /// Print the command list.
    Help,
    /// Switch the local role.
    Role(Role),
    /// `POST /simulate-surge`.
    Surge,
    /// `POST /reset`.
    Reset,
    /// Local cyber-attack drill.
    Attack,
    /// Show the intelligence view for one resource.
    Detail(ResourceKind),
    /// Switch the selected district.
    District(District),
    /// Exit the viewer.
    Quit,
}

impl Command {
    /// The admin action name, for commands that need the Admin role.
    pub const fn admin_action(self) -> Option<&'static str> {
        match self {
            Self::Surge => Some("surge"),
            Self::Reset => Some("reset"),
            Self::Attack => Some("attack"),
            _ => None,
        }
    }
}

impl FromStr for Command {
    type Err = ViewerError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Self::Show);
        };
        let arg = words.collect::<Vec<_>>().join(" ");

        match head.to_ascii_lowercase().as_str() {
            "help" | "?" => Ok(Self::Help),
            "surge" => Ok(Self::Surge),
            "reset" => Ok(Self::Reset),
            "attack" => Ok(Self::Attack),
            "quit" | "exit" => Ok(Self::Quit),
            "role" => required(&arg, "role admin|public")?.parse().map(Self::Role),
            "district" => required(&arg, "district <name>")?
                .parse()
                .map(Self::District),
            "detail" => {
                let label = required(&arg, "detail <resource>")?;
                label
                    .parse::<ResourceKind>()
                    .map(Self::Detail)
                    .map_err(|e| ViewerError::Command(format!("unknown resource '{}'", e.0)))
            }
            other => Err(ViewerError::Command(format!(
                "unknown command '{other}' (type 'help')"
            ))),
        }
    }
}

fn required<'a>(arg: &'a str, usage: &str) -> Result<&'a str, ViewerError> {
    if arg.is_empty() {
        Err(ViewerError::Command(format!("usage: {usage}")))
    } else {
        Ok(arg)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use jeevansetu_types::{BedCategory, BloodType};

    use super::*;

    #[test]
    fn blank_line_redraws() {
        assert_eq!("".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("   ".parse::<Command>().unwrap(), Command::Show);
    }

    #[test]
    fn parses_every_command() {
        assert_eq!("help".parse::<Command>().unwrap(), Command::Help);
        assert_eq!("SURGE".parse::<Command>().unwrap(), Command::Surge);
        assert_eq!("reset".parse::<Command>().unwrap(), Command::Reset);
        assert_eq!("attack".parse::<Command>().unwrap(), Command::Attack);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!(
            "role admin".parse::<Command>().unwrap(),
            Command::Role(Role::Admin)
        );
        assert_eq!(
            "district pune".parse::<Command>().unwrap(),
            Command::District(District::Pune)
        );
        assert_eq!(
            "detail icu".parse::<Command>().unwrap(),
            Command::Detail(ResourceKind::Bed(BedCategory::Icu))
        );
        assert_eq!(
            "detail O-".parse::<Command>().unwrap(),
            Command::Detail(ResourceKind::Blood(BloodType::ONegative))
        );
    }

    #[test]
    fn missing_argument_reports_usage() {
        let err = "detail".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "usage: detail <resource>");
    }

    #[test]
    fn unknown_inputs_are_rejected() {
        assert!("launch".parse::<Command>().is_err());
        assert!("detail Oxygen".parse::<Command>().is_err());
        assert!("role root".parse::<Command>().is_err());
    }

    #[test]
    fn only_server_and_drill_actions_need_admin() {
        assert_eq!(Command::Surge.admin_action(), Some("surge"));
        assert_eq!(Command::Attack.admin_action(), Some("attack"));
        assert_eq!(Command::Help.admin_action(), None);
        assert_eq!(Command::Role(Role::Admin).admin_action(), None);
    }
}
