//! VEGGIEWARE Session Layer
//!
//! Everything around the interpreter: who may log in, what they tried,
//! whether the site is locked, and the per-login terminal or admin console.
//!
//! # Components
//! - `auth` - pluggable credential verification
//! - `attempts` - ordered login attempt log
//! - `gate` - login decisions and the lockout flag
//! - `client` - connecting client description
//! - `terminal` - guest terminal with scroll-back
//! - `admin` - admin console

pub mod admin;
pub mod attempts;
pub mod auth;
pub mod client;
pub mod gate;
pub mod terminal;

pub use admin::{AdminConsole, AdminOutcome};
pub use attempts::{AttemptLog, LoginAttempt};
pub use auth::{CredentialVerifier, StaticCredentials};
pub use client::ClientInfo;
pub use gate::{AccessGate, Session};
pub use terminal::{EntryKind, ScrollbackEntry, Submission, TerminalSession};

use thiserror::Error;

/// Why a login was refused.
///
/// Every variant shows the user the same message; `reason` tells them apart
/// in logs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    #[error("Access denied: Invalid credentials")]
    MissingFields,

    #[error("Access denied: Invalid credentials")]
    InvalidCredentials,

    #[error("Access denied: Invalid credentials")]
    Locked,
}

impl LoginError {
    pub fn reason(&self) -> &'static str {
        match self {
            LoginError::MissingFields => "missing username or password",
            LoginError::InvalidCredentials => "invalid credentials",
            LoginError::Locked => "site locked",
        }
    }
}
