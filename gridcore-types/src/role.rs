use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ordered permission level for a caller.
///
/// Encoding uses it to decide which channels the caller may read; the core
/// never defines or mutates the hierarchy beyond this ordering.
/// `Guest < Owner < Installer < Admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Guest,
    Owner,
    Installer,
    Admin,
}

impl Role {
    /// Lowest privilege level.
    pub const MIN: Role = Role::Guest;

    /// Highest privilege level.
    pub const MAX: Role = Role::Admin;

    /// Returns true if this role has at least the privilege of `other`.
    pub fn covers(&self, other: Role) -> bool {
        *self >= other
    }
}

/// Error returned when a role string is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "guest" => Ok(Role::Guest),
            "owner" => Ok(Role::Owner),
            "installer" => Ok(Role::Installer),
            "admin" => Ok(Role::Admin),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Guest => "guest",
            Role::Owner => "owner",
            Role::Installer => "installer",
            Role::Admin => "admin",
        };
        write!(f, "{s}")
    }
}
