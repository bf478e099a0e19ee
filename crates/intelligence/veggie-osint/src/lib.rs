//! VEGGIEWARE OSINT Interpreter
//!
//! Turns a terminal command line into a display-ready intelligence report.
//! FOR ENTERTAINMENT: almost every report is a template.
//!
//! # Components
//! - `command` - verb table and command-line parsing
//! - `interpreter` - dispatch and error containment
//! - `report` - report layout
//! - `geo` - IP geolocation (the one live lookup)
//! - `breach` - breach status sources
//! - `encoding` - reversible text encoding behind `hash`/`decode`
//! - `digest` - real one-way digests
//! - `profile` - email, phone and GitHub reports
//! - `network` - whois, trace, scan, analyze and dns reports
//! - `help` - command reference

pub mod breach;
pub mod command;
pub mod digest;
pub mod encoding;
pub mod geo;
pub mod help;
pub mod interpreter;
pub mod network;
pub mod profile;
pub mod report;

pub use breach::{BreachSource, FixedBreachSource, RandomBreachSource};
pub use command::{CommandInvocation, Verb};
pub use geo::{GeoLookup, GeoRecord, IpApiClient};
pub use interpreter::Interpreter;
pub use report::Report;

use thiserror::Error;

/// Failures inside a command handler.
///
/// The `Display` text is what the user sees after the `Error: ` prefix.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to geolocate IP address - {0}")]
    Geolocation(String),

    #[error("{0}")]
    Lookup(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid phone number format")]
    InvalidPhone,

    #[error("Invalid base64 encoding - {0}")]
    Decode(String),

    #[error("Failed to generate hashes - {0}")]
    Encode(String),

    #[error("Invalid endpoint: {0}")]
    Endpoint(String),
}

pub type Result<T> = std::result::Result<T, Error>;
