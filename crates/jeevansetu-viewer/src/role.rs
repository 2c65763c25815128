//! The viewer's local role.
//!
//! Role switching needs no credentials and the server never sees it.
//! It only decides which controls the viewer offers.

use std::fmt;
use std::str::FromStr;

use crate::error::ViewerError;

/// Local presentation role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    /// Sees the dashboard; no controls.
    #[default]
    Public,
    /// May trigger surge, reset and the cyber-attack drill.
    Admin,
}

impl Role {
    /// Whether admin controls are available.
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Public => "Public",
            Self::Admin => "Admin",
        })
    }
}

impl FromStr for Role {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "public" => Ok(Self::Public),
            other => Err(ViewerError::Command(format!(
                "unknown role '{other}' (choose admin or public)"
            ))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_public() {
        assert_eq!(Role::default(), Role::Public);
        assert!(!Role::default().is_admin());
    }

    #[test]
    fn parses_and_displays() {
        let role: Role = "Admin".parse().unwrap();
        assert!(role.is_admin());
        assert_eq!(role.to_string(), "Admin");
        assert!("operator".parse::<Role>().is_err());
    }
}
