//! IP Geolocation
//!
//! Looks up an address against an ipapi.co-compatible service:
//! `GET {endpoint}/{ip}/json/`, or `GET {endpoint}/json/` for the
//! caller's own address.

use crate::report::Report;
use crate::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use veggie_config::GeoConfig;

const USER_AGENT: &str = concat!("veggieware/", env!("CARGO_PKG_VERSION"));

/// Geolocation lookup service
#[async_trait]
pub trait GeoLookup: Send + Sync {
    /// Look up `ip`; an empty string means the caller's own address.
    async fn lookup(&self, ip: &str) -> Result<GeoRecord>;
}

/// Response body of the geolocation service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    pub ip: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub org: Option<String>,
    pub asn: Option<String>,
    pub timezone: Option<String>,
    pub postal: Option<String>,
    pub proxy: Option<bool>,
    pub connection_type: Option<String>,
    #[serde(default)]
    pub error: bool,
    pub reason: Option<String>,
}

/// HTTP client for ipapi.co
pub struct IpApiClient {
    endpoint: Url,
    client: reqwest::Client,
}

impl IpApiClient {
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| Error::Endpoint(e.to_string()))?;
        if endpoint.cannot_be_a_base() {
            return Err(Error::Endpoint(endpoint.to_string()));
        }

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Endpoint(e.to_string()))?;

        Ok(Self { endpoint, client })
    }

    pub fn from_config(config: &GeoConfig) -> Result<Self> {
        Self::new(&config.endpoint, config.timeout_secs.map(Duration::from_secs))
    }

    /// Request URL for `ip`; the address is percent-encoded as one path segment.
    pub fn url_for(&self, ip: &str) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            if !ip.is_empty() {
                segments.push(ip);
            }
            segments.push("json").push("");
        }
        url
    }
}

#[async_trait]
impl GeoLookup for IpApiClient {
    async fn lookup(&self, ip: &str) -> Result<GeoRecord> {
        let url = self.url_for(ip);
        tracing::debug!(%url, "geolocation lookup");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Geolocation(e.to_string()))?;

        response
            .json::<GeoRecord>()
            .await
            .map_err(|e| Error::Geolocation(e.to_string()))
    }
}

fn or_unknown(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => "Unknown",
    }
}

fn coordinate(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "Unknown".to_string())
}

/// Render a lookup result. Service-reported errors become `Error::Lookup`.
pub fn render(requested: &str, record: &GeoRecord) -> Result<String> {
    if record.error {
        let reason = record
            .reason
            .clone()
            .unwrap_or_else(|| "Invalid IP address".to_string());
        return Err(Error::Lookup(reason));
    }

    let subject = if requested.is_empty() {
        record.ip.as_deref().unwrap_or("current address")
    } else {
        requested
    };

    Ok(Report::new(format!("IP Geolocation Report for {}", subject))
        .field(
            "Location",
            format!(
                "{}, {}, {}",
                or_unknown(&record.city),
                or_unknown(&record.region),
                or_unknown(&record.country_name)
            ),
        )
        .field(
            "Coordinates",
            format!("{}, {}", coordinate(record.latitude), coordinate(record.longitude)),
        )
        .field("ISP/Org", or_unknown(&record.org))
        .field("ASN", or_unknown(&record.asn))
        .field("Timezone", or_unknown(&record.timezone))
        .field("Postal Code", or_unknown(&record.postal))
        .field(
            "VPN/Proxy",
            if record.proxy.unwrap_or(false) { "Detected" } else { "Not detected" },
        )
        .field("Connection", or_unknown(&record.connection_type))
        .render())
}
