//! Severity level definitions

use std::fmt;
use std::str::FromStr;

/// Log severity, ordered from least to most verbose.
///
/// `None` disables everything and `Debug` enables everything: a record of
/// severity `S` is produced iff `S <= configured level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Severity {
    None = 0,
    Error = 1,
    Warning = 2,
    #[default]
    Debug = 3,
}

impl Severity {
    /// The literal tag used for the `%p` format directive.
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::None => "",
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
            Severity::Debug => "DEBUG",
        }
    }

    /// Whether console output for this severity goes to the error stream.
    pub fn routes_to_error(&self) -> bool {
        matches!(self, Severity::Warning | Severity::Error)
    }

    /// Whether a record of this severity passes a gate configured at `level`.
    pub fn enabled_at(&self, level: Severity) -> bool {
        *self != Severity::None && *self <= level
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NONE" => Ok(Severity::None),
            "ERROR" => Ok(Severity::Error),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "DEBUG" => Ok(Severity::Debug),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}
