//! Command reference

pub const HELP_TEXT: &str = r#"
VEGGIEWARE v1.0 - OSINT Command Reference

• ip <IP_ADDRESS>         - Geolocate IP address and gather intelligence
• email <EMAIL>           - Validate email and check deliverability
• phone <PHONE>           - Verify phone number and carrier info
• breach <EMAIL>          - Check if email appears in data breaches
• whois <DOMAIN>          - Domain registration and ownership data
• domain <DOMAIN>         - Comprehensive domain analysis
• github <USERNAME>       - GitHub user profile intelligence
• geoip                   - Get your current IP geolocation
• analyze <URL>           - Website analysis and threat assessment
• dns <DOMAIN>            - DNS record enumeration
• hash <STRING>           - Generate multiple hash types
• digest <STRING>         - Compute MD5, SHA-1 and SHA-256 digests
• decode <BASE64>         - Decode base64 encoded strings
• trace <IP>              - Simulate network traceroute
• scan <DOMAIN>           - Port scanning simulation
• clear                   - Clear terminal history
• help                    - Show this help menu
• exit                    - Logout from terminal

All commands connect to live OSINT APIs for real-time intelligence gathering.
"#;

/// Names documented in the reference, in order
pub fn documented_commands() -> Vec<&'static str> {
    HELP_TEXT
        .lines()
        .filter_map(|line| line.strip_prefix("• "))
        .filter_map(|rest| rest.split_whitespace().next())
        .collect()
}
