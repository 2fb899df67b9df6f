//! Account roles driving the authorization gate.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role assigned to an account at creation time.
///
/// Roles are immutable: no operation changes the role of an existing user.
/// The role decides which profile table, if any, the user may own and which
/// endpoints the authorization gate admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full directory access; owns no profile row.
    Admin,
    /// Owns a doctor profile.
    Doctor,
    /// Owns a patient profile.
    Patient,
}

/// Error returned when parsing an unknown role string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleParseError;

impl fmt::Display for RoleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "role must be one of admin, doctor, or patient")
    }
}

impl std::error::Error for RoleParseError {}

impl Role {
    /// Stable lowercase name used in storage and JSON payloads.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Doctor => "doctor",
            Self::Patient => "patient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "doctor" => Ok(Self::Doctor),
            "patient" => Ok(Self::Patient),
            _ => Err(RoleParseError),
        }
    }
}
