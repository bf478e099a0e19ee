//! Connecting client description

use serde::{Deserialize, Serialize};
use std::time::Duration;
use veggie_config::ClientConfig;

pub const UNKNOWN_IP: &str = "Unknown";

/// Where a login comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub ip: String,
    pub user_agent: String,
}

#[derive(Debug, Deserialize)]
struct IpEcho {
    ip: String,
}

impl ClientInfo {
    pub fn new(ip: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            user_agent: user_agent.into(),
        }
    }

    /// Client with an unknown address
    pub fn local() -> Self {
        Self::new(UNKNOWN_IP, Self::default_user_agent())
    }

    pub fn default_user_agent() -> String {
        format!(
            "veggie-cli/{} ({}; {})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH
        )
    }

    /// Ask the echo service for our public address; falls back to `Unknown`.
    pub async fn detect(config: &ClientConfig) -> Self {
        if !config.detect_ip {
            return Self::local();
        }

        match fetch_public_ip(&config.ip_echo_endpoint).await {
            Ok(ip) => Self::new(ip, Self::default_user_agent()),
            Err(e) => {
                tracing::warn!(error = %e, "public IP discovery failed");
                Self::local()
            }
        }
    }
}

async fn fetch_public_ip(endpoint: &str) -> reqwest::Result<String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;
    let echo: IpEcho = client.get(endpoint).send().await?.json().await?;
    Ok(echo.ip)
}
