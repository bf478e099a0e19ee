//! Command dispatch
//!
//! `execute` is the only entry point. It always returns display-ready text:
//! handler failures are rendered with an `Error: ` prefix and never escape.

use crate::breach::{self, BreachSource, RandomBreachSource};
use crate::command::{CommandInvocation, Verb};
use crate::geo::{self, GeoLookup, IpApiClient};
use crate::{digest, encoding, help, network, profile, Result};
use std::sync::Arc;
use veggie_config::VeggieConfig;
use veggie_core::Identity;

pub struct Interpreter {
    geo: Arc<dyn GeoLookup>,
    breaches: Arc<dyn BreachSource>,
}

impl Interpreter {
    pub fn new(geo: Arc<dyn GeoLookup>, breaches: Arc<dyn BreachSource>) -> Self {
        Self { geo, breaches }
    }

    /// Live geolocation client and random breach source from config
    pub fn from_config(config: &VeggieConfig) -> Result<Self> {
        let geo = IpApiClient::from_config(&config.geo)?;
        let breaches = RandomBreachSource::from_config(&config.breach);
        Ok(Self::new(Arc::new(geo), Arc::new(breaches)))
    }

    pub fn with_geo(mut self, geo: Arc<dyn GeoLookup>) -> Self {
        self.geo = geo;
        self
    }

    pub fn with_breach_source(mut self, breaches: Arc<dyn BreachSource>) -> Self {
        self.breaches = breaches;
        self
    }

    pub async fn execute(&self, line: &str, identity: &Identity) -> String {
        tracing::info!(
            user = %identity.display_name,
            role = %identity.role,
            command = line,
            "command executed"
        );

        let invocation = CommandInvocation::parse(line);
        match self.dispatch(&invocation).await {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(verb = %invocation.verb, error = %e, "command failed");
                format!("Error: {}", e)
            }
        }
    }

    async fn dispatch(&self, invocation: &CommandInvocation) -> Result<String> {
        let Some(verb) = Verb::from_name(&invocation.verb) else {
            return Ok(not_found(&invocation.verb));
        };

        let arg = invocation.argument.as_str();
        if arg.is_empty() {
            if let Some(usage) = verb.usage() {
                return Ok(usage);
            }
        }

        match verb {
            Verb::Help => Ok(help::HELP_TEXT.to_string()),
            Verb::Ip => self.geolocate(arg).await,
            Verb::Geoip => self.geolocate("").await,
            Verb::Email => profile::email_report(arg, chrono::Utc::now().date_naive()),
            Verb::Phone => profile::phone_report(arg),
            Verb::Breach => Ok(breach::breach_report(arg, self.breaches.is_compromised(arg))),
            Verb::Whois | Verb::Domain => Ok(network::whois_report(arg)),
            Verb::Github => Ok(profile::github_report(arg)),
            Verb::Hash => encoding::hash_report(arg),
            Verb::Digest => Ok(digest::digest_report(arg)),
            Verb::Decode => encoding::decode_report(arg),
            Verb::Trace => Ok(network::trace_report(arg)),
            Verb::Scan => Ok(network::scan_report(arg)),
            Verb::Analyze => Ok(network::analyze_report(arg)),
            Verb::Dns => Ok(network::dns_report(arg)),
        }
    }

    async fn geolocate(&self, ip: &str) -> Result<String> {
        let record = self.geo.lookup(ip).await?;
        geo::render(ip, &record)
    }
}

fn not_found(verb: &str) -> String {
    format!("Command not found: {}\nType 'help' for available commands", verb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breach::FixedBreachSource;
    use crate::geo::GeoRecord;
    use crate::Error;
    use async_trait::async_trait;
    use std::sync::Mutex;

    enum Reply {
        Record(GeoRecord),
        ServiceError(Option<&'static str>),
        Transport(&'static str),
    }

    /// Canned lookup that remembers what it was asked
    struct StubGeo {
        reply: Reply,
        asked: Mutex<Vec<String>>,
    }

    impl StubGeo {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self { reply, asked: Mutex::new(Vec::new()) })
        }

        fn asked(&self) -> Vec<String> {
            self.asked.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GeoLookup for StubGeo {
        async fn lookup(&self, ip: &str) -> Result<GeoRecord> {
            self.asked.lock().unwrap().push(ip.to_string());
            match &self.reply {
                Reply::Record(record) => Ok(record.clone()),
                Reply::ServiceError(reason) => Ok(GeoRecord {
                    error: true,
                    reason: reason.map(str::to_string),
                    ..Default::default()
                }),
                Reply::Transport(msg) => Err(Error::Geolocation(msg.to_string())),
            }
        }
    }

    fn record() -> GeoRecord {
        GeoRecord {
            ip: Some("203.0.113.7".to_string()),
            city: Some("Springfield".to_string()),
            region: Some("Oregon".to_string()),
            country_name: Some("United States".to_string()),
            latitude: Some(44.05),
            longitude: Some(-123.02),
            ..Default::default()
        }
    }

    fn interpreter_with(geo: Arc<StubGeo>, compromised: bool) -> Interpreter {
        Interpreter::new(geo, Arc::new(FixedBreachSource(compromised)))
    }

    fn interpreter() -> Interpreter {
        interpreter_with(StubGeo::new(Reply::Record(record())), false)
    }

    fn guest() -> Identity {
        Identity::guest("Guest")
    }

    #[tokio::test]
    async fn test_usage_for_every_required_argument() {
        let interp = interpreter();
        for verb in Verb::ALL.iter().filter(|v| v.requires_argument()) {
            let out = interp.execute(verb.name(), &guest()).await;
            assert!(out.starts_with("Usage: "), "{}: {}", verb.name(), out);
            assert!(out.contains(verb.name()));
        }
    }

    #[tokio::test]
    async fn test_help_lists_every_verb() {
        let out = interpreter().execute("help", &guest()).await;
        assert_eq!(out, help::HELP_TEXT);
        for verb in Verb::ALL {
            assert!(out.contains(&format!("• {} ", verb.name())) || out.contains(&format!("• {}\n", verb.name())));
        }
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let out = interpreter().execute("unknowncmd", &guest()).await;
        assert_eq!(out, "Command not found: unknowncmd\nType 'help' for available commands");

        let out = interpreter().execute("LinkedIn someone", &guest()).await;
        assert_eq!(out, "Command not found: linkedin\nType 'help' for available commands");
    }

    #[tokio::test]
    async fn test_email() {
        let interp = interpreter();
        let out = interp.execute("email test@example.com", &guest()).await;
        assert!(out.contains("Domain:       example.com"));
        assert!(out.contains("Format:       Valid"));

        let out = interp.execute("email notanemail", &guest()).await;
        assert_eq!(out, "Error: Invalid email format");
    }

    #[tokio::test]
    async fn test_phone() {
        let interp = interpreter();
        let out = interp.execute("phone 5551234567", &guest()).await;
        assert!(out.contains("Format:       Valid"));
        assert!(out.contains("Country:      United States"));

        let out = interp.execute("phone 123", &guest()).await;
        assert_eq!(out, "Error: Invalid phone number format");
    }

    #[tokio::test]
    async fn test_breach_branches() {
        let stub = || StubGeo::new(Reply::Record(record()));

        let out = interpreter_with(stub(), true).execute("breach a@b.com", &guest()).await;
        assert!(out.contains("Status:       COMPROMISED"));

        let out = interpreter_with(stub(), false).execute("breach a@b.com", &guest()).await;
        assert!(out.contains("Status:       Clean"));
    }

    #[tokio::test]
    async fn test_seeded_breach_source_is_reproducible() {
        let run = || async {
            let interp = interpreter()
                .with_breach_source(Arc::new(RandomBreachSource::seeded(99, 0.3)));
            let mut outputs = Vec::new();
            for _ in 0..10 {
                outputs.push(interp.execute("breach a@b.com", &guest()).await);
            }
            outputs
        };
        assert_eq!(run().await, run().await);
    }

    #[tokio::test]
    async fn test_ip_lookup() {
        let geo = StubGeo::new(Reply::Record(record()));
        let interp = interpreter_with(geo.clone(), false);

        let out = interp.execute("ip 203.0.113.7", &guest()).await;
        assert!(out.contains("IP Geolocation Report for 203.0.113.7"));
        assert!(out.contains("Location:     Springfield, Oregon, United States"));
        assert_eq!(geo.asked(), vec!["203.0.113.7".to_string()]);
    }

    #[tokio::test]
    async fn test_geoip_looks_up_own_address() {
        let geo = StubGeo::new(Reply::Record(record()));
        let interp = interpreter_with(geo.clone(), false);

        let out = interp.execute("geoip", &guest()).await;
        assert!(out.contains("IP Geolocation Report for 203.0.113.7"));
        assert_eq!(geo.asked(), vec![String::new()]);
    }

    #[tokio::test]
    async fn test_ip_service_error() {
        let geo = StubGeo::new(Reply::ServiceError(Some("Reserved IP Address")));
        let out = interpreter_with(geo, false).execute("ip 10.0.0.1", &guest()).await;
        assert_eq!(out, "Error: Reserved IP Address");

        let geo = StubGeo::new(Reply::ServiceError(None));
        let out = interpreter_with(geo, false).execute("ip nonsense", &guest()).await;
        assert_eq!(out, "Error: Invalid IP address");
    }

    #[tokio::test]
    async fn test_ip_transport_error() {
        let geo = StubGeo::new(Reply::Transport("connection refused"));
        let out = interpreter_with(geo, false).execute("ip 1.1.1.1", &guest()).await;
        assert_eq!(out, "Error: Failed to geolocate IP address - connection refused");
    }

    #[tokio::test]
    async fn test_static_verbs_idempotent() {
        let interp = interpreter();
        for line in ["whois a.com", "domain a.com", "trace 1.2.3.4", "scan a.com", "analyze http://a.com", "dns a.com"] {
            let first = interp.execute(line, &guest()).await;
            let second = interp.execute(line, &guest()).await;
            assert_eq!(first, second, "{}", line);
        }
    }

    #[tokio::test]
    async fn test_whois_alias() {
        let interp = interpreter();
        assert_eq!(
            interp.execute("whois Example.com", &guest()).await,
            interp.execute("domain example.com", &guest()).await
        );
    }

    #[tokio::test]
    async fn test_line_is_lowercased() {
        let out = interpreter().execute("GITHUB OctoCat", &guest()).await;
        assert!(out.contains("Profile: https://github.com/octocat"));
    }

    #[tokio::test]
    async fn test_hash_and_decode() {
        let interp = interpreter();
        let out = interp.execute("hash password123", &guest()).await;
        assert!(out.contains("MD5:          cGFzc3dvcmQxMjM="));

        let out = interp.execute("decode ####", &guest()).await;
        assert!(out.starts_with("Error: Invalid base64 encoding - "), "{}", out);

        let out = interp.execute("hash ☃", &guest()).await;
        assert!(out.starts_with("Error: Failed to generate hashes - "), "{}", out);
    }

    #[tokio::test]
    async fn test_decode_sees_lowercased_argument() {
        let out = interpreter().execute("decode aGVs bG8=", &guest()).await;
        assert!(out.starts_with("\nBase64 Decode Result\n"), "{}", out);
        assert!(out.contains("Original:     agvs bg8=\n"));
        assert!(!out.contains("hello"));
    }

    #[tokio::test]
    async fn test_digest() {
        let out = interpreter().execute("digest abc", &guest()).await;
        assert!(out.contains("SHA-256:      ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"));
    }

    #[tokio::test]
    async fn test_identity_does_not_change_output() {
        let interp = interpreter();
        let as_guest = interp.execute("scan a.com", &guest()).await;
        let as_admin = interp.execute("scan a.com", &Identity::admin("Admin")).await;
        assert_eq!(as_guest, as_admin);
    }

    #[test]
    fn test_from_config() {
        assert!(Interpreter::from_config(&VeggieConfig::default()).is_ok());

        let mut config = VeggieConfig::default();
        config.geo.endpoint = "nope".to_string();
        assert!(Interpreter::from_config(&config).is_err());
    }
}
