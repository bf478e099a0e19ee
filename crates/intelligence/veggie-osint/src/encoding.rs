//! Reversible text encoding behind `hash` and `decode`
//!
//! Text is mapped one character per byte (Latin-1) and base64 encoded.
//! The `hash` report labels prefixes of these encodings MD5/SHA-1/SHA-256.
//! They are NOT digests and can be decoded back; see `digest` for real ones.

use crate::report::Report;
use crate::{Error, Result};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use lazy_static::lazy_static;
use regex::Regex;

/// Accepts missing padding and stray trailing bits
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

lazy_static! {
    /// Letters, digits and whitespace. U+0085 (NEL) is not whitespace here,
    /// so it is spelled out instead of using `\s`.
    static ref PLAIN_TEXT: Regex = Regex::new(
        r"^[a-zA-Z0-9\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]*$"
    )
    .unwrap();
}

/// Encode text; fails on characters above U+00FF.
pub fn encode(input: &str) -> Result<String> {
    let bytes = input
        .chars()
        .map(|c| u8::try_from(u32::from(c)).map_err(|_| c))
        .collect::<std::result::Result<Vec<u8>, char>>()
        .map_err(|c| {
            Error::Encode(format!("character {:?} is outside the Latin-1 range", c))
        })?;
    Ok(STANDARD.encode(bytes))
}

/// Decode text produced by `encode`. ASCII whitespace is ignored.
pub fn decode(input: &str) -> Result<String> {
    let compact: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = LENIENT
        .decode(compact)
        .map_err(|e| Error::Decode(e.to_string()))?;
    Ok(bytes.into_iter().map(char::from).collect())
}

fn prefix(s: &str, len: usize) -> &str {
    &s[..s.len().min(len)]
}

pub fn hash_report(input: &str) -> Result<String> {
    let md5 = encode(input)?;
    let sha1 = encode(&format!("{}salt", input))?;
    let sha256 = encode(&format!("{}salt256", input))?;
    let length = input.chars().count();

    Ok(Report::new(format!("Hash Analysis for: \"{}\"", input))
        .field("MD5", prefix(&md5, 32))
        .field("SHA-1", prefix(&sha1, 40))
        .field("SHA-256", prefix(&sha256, 64))
        .field("Length", format!("{} characters", length))
        .field("Entropy", format!("{:.2} bits", length as f64 * 2.5))
        .render())
}

pub fn decode_report(encoded: &str) -> Result<String> {
    let decoded = decode(encoded)?;
    let kind = if PLAIN_TEXT.is_match(&decoded) {
        "Text"
    } else {
        "Binary/Special"
    };

    Ok(Report::new("Base64 Decode Result")
        .field("Original", encoded)
        .field("Decoded", &decoded)
        .field("Length", format!("{} characters", decoded.chars().count()))
        .field("Type", kind)
        .render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known() {
        assert_eq!(encode("Hello World").unwrap(), "SGVsbG8gV29ybGQ=");
        assert_eq!(encode("").unwrap(), "");
    }

    #[test]
    fn test_roundtrip_printable_ascii() {
        let all: String = (0x20u8..=0x7e).map(char::from).collect();
        for s in [all.as_str(), "password123", "a", "ab", "abc", "  spaced  out  "] {
            assert_eq!(decode(&encode(s).unwrap()).unwrap(), s);
        }
    }

    #[test]
    fn test_roundtrip_latin1() {
        let s = "café ñ ÿ";
        assert_eq!(decode(&encode(s).unwrap()).unwrap(), s);
    }

    #[test]
    fn test_encode_rejects_wide_chars() {
        let err = encode("snow ☃").unwrap_err();
        assert!(matches!(err, Error::Encode(_)));
    }

    #[test]
    fn test_decode_lenient_input() {
        assert_eq!(decode("SGVsbG8gV29ybGQ").unwrap(), "Hello World");
        assert_eq!(decode("SGVs bG8g\nV29y bGQ=").unwrap(), "Hello World");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode("!!!!"), Err(Error::Decode(_))));
        assert!(matches!(decode("abcde"), Err(Error::Decode(_))));
    }

    #[test]
    fn test_hash_report() {
        let out = hash_report("password123").unwrap();
        assert!(out.contains("Hash Analysis for: \"password123\""));
        assert!(out.contains("MD5:          cGFzc3dvcmQxMjM=\n"));
        assert!(out.contains("Length:       11 characters\n"));
        assert!(out.contains("Entropy:      27.50 bits\n"));
    }

    #[test]
    fn test_hash_fields_truncated() {
        let long = "x".repeat(100);
        let out = hash_report(&long).unwrap();
        let md5_line = out.lines().find(|l| l.starts_with("MD5:")).unwrap();
        assert_eq!(md5_line.trim_start_matches("MD5:").trim().len(), 32);
        let sha_line = out.lines().find(|l| l.starts_with("SHA-256:")).unwrap();
        assert_eq!(sha_line.trim_start_matches("SHA-256:").trim().len(), 64);
    }

    #[test]
    fn test_decode_report_classification() {
        let out = decode_report("SGVsbG8gV29ybGQ=").unwrap();
        assert!(out.contains("Decoded:      Hello World\n"));
        assert!(out.contains("Length:       11 characters\n"));
        assert!(out.contains("Type:         Text\n"));

        let out = decode_report(&encode("hi!").unwrap()).unwrap();
        assert!(out.contains("Type:         Binary/Special\n"));
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        let out = decode_report("hQ==").unwrap();
        assert!(out.contains("Type:         Binary/Special\n"));

        let out = decode_report("oA==").unwrap();
        assert!(out.contains("Type:         Text\n"));

        let out = decode_report(&encode("a\tb\x0Bc\x0Cd").unwrap()).unwrap();
        assert!(out.contains("Type:         Text\n"));
    }
}
