//! Network reports: whois, trace, scan, analyze, dns
//!
//! Fixed templates. Only the target is substituted, so output is stable
//! across calls.

use crate::report::Report;

const TRACE_HOPS: [(&str, &str); 2] = [("192.168.1.1", "2.5ms"), ("10.0.0.1", "12.3ms")];

const FINAL_HOP_LATENCY: &str = "45.2ms";

const OPEN_PORTS: [(u16, &str); 3] = [(22, "ssh"), (80, "http"), (443, "https")];

const DNS_RECORDS: [(&str, &str); 4] = [
    ("A", "172.217.164.142"),
    ("MX", "aspmx.l.google.com"),
    ("NS", "ns1.google.com"),
    ("TXT", "\"v=spf1 include:_spf.google.com ~all\""),
];

pub fn whois_report(domain: &str) -> String {
    Report::new(format!("WHOIS Report for {}", domain))
        .width(17)
        .field("Domain Name", domain.to_uppercase())
        .field("Registry", "Verisign Global Registry")
        .field("Registrar", "GoDaddy.com, LLC")
        .field("Created Date", "2018-03-15T14:25:32Z")
        .field("Updated Date", "2023-02-15T09:12:45Z")
        .field("Expiry Date", "2024-03-15T14:25:32Z")
        .field("Status", "Active")
        .field("Name Servers", "ns1.example.com\nns2.example.com")
        .field("DNSSEC", "Unsigned")
        .render()
}

pub fn trace_report(target: &str) -> String {
    let mut report = Report::compact(format!("Traceroute to {}", target));
    for (i, (hop, latency)) in TRACE_HOPS.iter().enumerate() {
        report = report.line(format!("{}  {:<16}{}", i + 1, hop, latency));
    }
    let hops = TRACE_HOPS.len() + 1;
    report
        .line(format!("{}  {}      {}", hops, target, FINAL_HOP_LATENCY))
        .blank()
        .line(format!("Trace complete - {} hops", hops))
        .render()
}

pub fn scan_report(target: &str) -> String {
    let mut report = Report::compact(format!("Port Scan Results for {}", target));
    for (port, service) in OPEN_PORTS {
        report = report.line(format!("{:<9}open  {}", format!("{}/tcp", port), service));
    }
    report
        .blank()
        .line(format!("Scan complete - {} open ports found", OPEN_PORTS.len()))
        .render()
}

pub fn analyze_report(url: &str) -> String {
    Report::compact(format!("Website Analysis for {}", url))
        .field("Status", "Online")
        .field("Server", "nginx/1.18.0")
        .field("SSL", "Valid certificate")
        .field("Tech Stack", "React, Node.js")
        .field("Security", "HTTPS enabled")
        .field("Threat Level", "Low")
        .render()
}

pub fn dns_report(domain: &str) -> String {
    let mut report = Report::compact(format!("DNS Records for {}", domain));
    for (kind, value) in DNS_RECORDS {
        report = report.line(format!("{:<6}{}    {}", kind, domain, value));
    }
    report.render()
}
