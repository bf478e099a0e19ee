//! VEGGIEWARE configuration
//!
//! Loaded from `~/.config/veggieware/config.json` (or an explicit path).
//! A missing file yields defaults. Environment variables override file values:
//!
//! | Variable                  | Field                 |
//! |---------------------------|-----------------------|
//! | `VEGGIE_CONFIG`           | config file path      |
//! | `VEGGIE_GEO_ENDPOINT`     | `geo.endpoint`        |
//! | `VEGGIE_GEO_TIMEOUT_SECS` | `geo.timeout_secs`    |
//! | `VEGGIE_BREACH_SEED`      | `breach.seed`         |
//! | `VEGGIE_BOOT_DELAY_MS`    | `terminal.boot_delay_ms` |

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;
use veggie_core::Role;

pub const ENV_CONFIG_PATH: &str = "VEGGIE_CONFIG";
pub const ENV_GEO_ENDPOINT: &str = "VEGGIE_GEO_ENDPOINT";
pub const ENV_GEO_TIMEOUT: &str = "VEGGIE_GEO_TIMEOUT_SECS";
pub const ENV_BREACH_SEED: &str = "VEGGIE_BREACH_SEED";
pub const ENV_BOOT_DELAY: &str = "VEGGIE_BOOT_DELAY_MS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VeggieConfig {
    pub geo: GeoConfig,
    pub client: ClientConfig,
    pub auth: AuthConfig,
    pub breach: BreachConfig,
    pub terminal: TerminalConfig,
}

/// Geolocation service used by `ip` and `geoip`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    pub endpoint: String,
    /// No timeout unless set; the network stack decides.
    pub timeout_secs: Option<u64>,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://ipapi.co".to_string(),
            timeout_secs: None,
        }
    }
}

/// Public IP discovery for the login screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub ip_echo_endpoint: String,
    pub detect_ip: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ip_echo_endpoint: "https://api.ipify.org?format=json".to_string(),
            detect_ip: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl Account {
    pub fn new(username: &str, password: &str, role: Role) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub accounts: Vec<Account>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            accounts: vec![
                Account::new("Guest", "Veggies", Role::Guest),
                Account::new("Admin", "VeggiesAdmin", Role::Admin),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreachConfig {
    /// Fixed RNG seed; unseeded when absent
    pub seed: Option<u64>,
    /// Probability that an address reports as compromised
    pub compromise_rate: f64,
}

impl Default for BreachConfig {
    fn default() -> Self {
        Self {
            seed: None,
            compromise_rate: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Pause after the BIOS boot sequence
    pub boot_delay_ms: u64,
    /// Window in which a second `clear-logs` confirms the first
    pub clear_confirm_ms: u64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            boot_delay_ms: 3000,
            clear_confirm_ms: 3000,
        }
    }
}

impl VeggieConfig {
    /// Default config location (~/.config/veggieware/config.json)
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("veggieware")
            .join("config.json")
    }

    /// Load config from `path`, `$VEGGIE_CONFIG`, or the default location,
    /// then apply environment overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => std::env::var(ENV_CONFIG_PATH)
                .map(PathBuf::from)
                .unwrap_or_else(|_| Self::default_path()),
        };

        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file; a missing file is not an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write config as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply overrides from a variable lookup (normally the process env).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENV_GEO_ENDPOINT) {
            self.geo.endpoint = endpoint;
        }
        if let Some(secs) = lookup(ENV_GEO_TIMEOUT) {
            self.geo.timeout_secs = Some(parse_number(ENV_GEO_TIMEOUT, &secs)?);
        }
        if let Some(seed) = lookup(ENV_BREACH_SEED) {
            self.breach.seed = Some(parse_number(ENV_BREACH_SEED, &seed)?);
        }
        if let Some(delay) = lookup(ENV_BOOT_DELAY) {
            self.terminal.boot_delay_ms = parse_number(ENV_BOOT_DELAY, &delay)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.geo.endpoint)
            .map_err(|e| ConfigError::Invalid(format!("geo.endpoint: {}", e)))?;
        Url::parse(&self.client.ip_echo_endpoint)
            .map_err(|e| ConfigError::Invalid(format!("client.ip_echo_endpoint: {}", e)))?;

        if self.geo.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "geo.timeout_secs must be at least 1; omit it for no timeout".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.breach.compromise_rate) {
            return Err(ConfigError::Invalid(format!(
                "breach.compromise_rate must be within 0..=1, got {}",
                self.breach.compromise_rate
            )));
        }

        if self.auth.accounts.iter().any(|a| a.username.is_empty()) {
            return Err(ConfigError::Invalid("auth.accounts: empty username".to_string()));
        }

        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("{} is not a number: {}", key, value)))
}
