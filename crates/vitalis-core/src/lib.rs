use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Configuration types shared across all Vitalis crates
pub mod config;

pub use config::{AppConfig, AuthConfig, ConfigError, PreferredAlgorithm, ServerConfig};

/// Role kinds assignable to a user account.
///
/// Stored on the user record and carried in token claims; the full
/// permission set behind each kind lives in `vitalis-rbac`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    User,
    Admin,
}

impl RoleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::User => "user",
            RoleKind::Admin => "admin",
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleKind {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(RoleKind::User),
            "admin" => Ok(RoleKind::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Error for an unrecognized role-kind string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown role kind: {0}")]
pub struct UnknownRole(pub String);

/// The authenticated entity resolved from a verified token.
///
/// The core only consumes the id and role attribute; the full user record
/// (email, password hash, activation state) lives in the external store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: i64,
    pub role: RoleKind,
}

impl Principal {
    pub fn new(id: i64, role: RoleKind) -> Self {
        Self { id, role }
    }
}
