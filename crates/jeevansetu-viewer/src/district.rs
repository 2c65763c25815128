//! Selectable districts.
//!
//! The district is a label on the viewer only; the server has one
//! snapshot regardless of which district is shown.

use std::fmt;
use std::str::FromStr;

use crate::error::ViewerError;

/// A district the viewer can be set to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum District {
    /// Jaipur.
    #[default]
    Jaipur,
    /// Delhi.
    Delhi,
    /// Pune.
    Pune,
    /// Ahmedabad.
    Ahmedabad,
}

impl District {
    /// Every district, in menu order.
    pub const ALL: [Self; 4] = [Self::Jaipur, Self::Delhi, Self::Pune, Self::Ahmedabad];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jaipur => "Jaipur",
            Self::Delhi => "Delhi",
            Self::Pune => "Pune",
            Self::Ahmedabad => "Ahmedabad",
        }
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for District {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ViewerError::Command(format!(
                    "unknown district '{wanted}' (choose Jaipur, Delhi, Pune or Ahmedabad)"
                ))
            })
    }
}
