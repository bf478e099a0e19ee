//! Verb table and command-line parsing

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// Lower-cased first token
    pub verb: String,
    /// Remaining tokens joined with single spaces, possibly empty
    pub argument: String,
}

impl CommandInvocation {
    /// Lower-case the whole line and split it on whitespace.
    pub fn parse(line: &str) -> Self {
        let lowered = line.to_lowercase();
        let mut tokens = lowered.split_whitespace();
        let verb = tokens.next().unwrap_or_default().to_string();
        let argument = tokens.collect::<Vec<_>>().join(" ");
        Self { verb, argument }
    }
}

/// Every command the interpreter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Help,
    Ip,
    Email,
    Phone,
    Breach,
    Whois,
    Domain,
    Github,
    Hash,
    Digest,
    Decode,
    Geoip,
    Trace,
    Scan,
    Analyze,
    Dns,
}

impl Verb {
    pub const ALL: [Verb; 16] = [
        Verb::Help,
        Verb::Ip,
        Verb::Email,
        Verb::Phone,
        Verb::Breach,
        Verb::Whois,
        Verb::Domain,
        Verb::Github,
        Verb::Hash,
        Verb::Digest,
        Verb::Decode,
        Verb::Geoip,
        Verb::Trace,
        Verb::Scan,
        Verb::Analyze,
        Verb::Dns,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Verb::Help => "help",
            Verb::Ip => "ip",
            Verb::Email => "email",
            Verb::Phone => "phone",
            Verb::Breach => "breach",
            Verb::Whois => "whois",
            Verb::Domain => "domain",
            Verb::Github => "github",
            Verb::Hash => "hash",
            Verb::Digest => "digest",
            Verb::Decode => "decode",
            Verb::Geoip => "geoip",
            Verb::Trace => "trace",
            Verb::Scan => "scan",
            Verb::Analyze => "analyze",
            Verb::Dns => "dns",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.name() == name)
    }

    /// Placeholder and example argument, `None` if the verb takes no argument
    fn argument_hint(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Verb::Help | Verb::Geoip => None,
            Verb::Ip | Verb::Trace => Some(("<IP_ADDRESS>", "8.8.8.8")),
            Verb::Email => Some(("<EMAIL_ADDRESS>", "test@example.com")),
            Verb::Phone => Some(("<PHONE_NUMBER>", "+1-555-123-4567")),
            Verb::Breach => Some(("<EMAIL>", "user@domain.com")),
            Verb::Whois | Verb::Domain | Verb::Scan | Verb::Dns => {
                Some(("<DOMAIN>", "google.com"))
            }
            Verb::Github => Some(("<USERNAME>", "octocat")),
            Verb::Hash | Verb::Digest => Some(("<STRING>", "password123")),
            Verb::Decode => Some(("<BASE64_STRING>", "SGVsbG8gV29ybGQ=")),
            Verb::Analyze => Some(("<URL>", "https://example.com")),
        }
    }

    pub fn requires_argument(&self) -> bool {
        self.argument_hint().is_some()
    }

    /// Usage text shown when a required argument is missing
    pub fn usage(&self) -> Option<String> {
        self.argument_hint().map(|(placeholder, example)| {
            format!(
                "Usage: {name} {placeholder}\nExample: {name} {example}",
                name = self.name()
            )
        })
    }
}
