//! VEGGIEWARE Core
//!
//! Identity types shared by the interpreter and the session layer.
//!
//! # Components
//! - `Role` - admin or guest
//! - `Identity` - who is issuing commands

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Product banner name
pub const PRODUCT: &str = "VEGGIEWARE v1.0";

/// Hostname shown in terminal prompts
pub const HOSTNAME: &str = "veggieware";

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

/// Access role of an authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Guest,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Guest => "guest",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "guest" => Ok(Role::Guest),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Identity context passed alongside every command.
///
/// Only used for logging; it never changes what a report contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub display_name: String,
    pub role: Role,
}

impl Identity {
    pub fn new(display_name: impl Into<String>, role: Role) -> Self {
        Self {
            display_name: display_name.into(),
            role,
        }
    }

    pub fn guest(display_name: impl Into<String>) -> Self {
        Self::new(display_name, Role::Guest)
    }

    pub fn admin(display_name: impl Into<String>) -> Self {
        Self::new(display_name, Role::Admin)
    }

    /// Shell prompt for this identity, e.g. `Guest@veggieware:~$`
    pub fn prompt(&self) -> String {
        format!("{}@{}:~$", self.display_name, HOSTNAME)
    }
}
