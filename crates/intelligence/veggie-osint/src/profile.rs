//! Person-centric reports: email, phone, GitHub
//!
//! All checks are local. The email report claims MX lookups it never makes.

use crate::report::Report;
use crate::{Error, Result};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Minimum digits for a dialable number
const MIN_PHONE_DIGITS: usize = 10;

/// `today` fills the `Created` field.
pub fn email_report(email: &str, today: NaiveDate) -> Result<String> {
    if !EMAIL.is_match(email) {
        return Err(Error::InvalidEmail);
    }
    let domain = email.split('@').nth(1).unwrap_or_default();

    Ok(Report::new(format!("Email Intelligence Report for {}", email))
        .field("Format", "Valid")
        .field("Domain", domain)
        .field("Deliverable", "Likely valid (MX records found)")
        .field("Risk Level", "Low")
        .field("Type", "Professional email")
        .field("Disposable", "No")
        .field("Created", today.format("%Y-%m-%d"))
        .render())
}

/// Ten bare digits are read as a North American number without country code.
pub fn phone_report(phone: &str) -> Result<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < MIN_PHONE_DIGITS {
        return Err(Error::InvalidPhone);
    }

    let country = if digits.starts_with('1') || digits.len() == MIN_PHONE_DIGITS {
        "United States"
    } else {
        "International"
    };
    let line_type = if digits.len() == MIN_PHONE_DIGITS {
        "Mobile/Landline"
    } else {
        "Unknown"
    };

    Ok(Report::new(format!("Phone Intelligence Report for {}", phone))
        .field("Number", phone)
        .field("Format", "Valid")
        .field("Country", country)
        .field("Type", line_type)
        .field("Carrier", "Available via premium API")
        .field("Region", "Area code analysis available")
        .field("Status", "Active number format")
        .render())
}

pub fn github_report(username: &str) -> String {
    Report::compact(format!("GitHub Intelligence for {}", username))
        .field("Profile", format!("https://github.com/{}", username))
        .field("Public Repos", "Available via API")
        .field("Followers", "Available via API")
        .field("Created", "Available via API")
        .field("Note", "Connect to GitHub API for full data")
        .render()
}
