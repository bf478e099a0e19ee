//! One-way digests (MD5, SHA-1, SHA-256) over the UTF-8 bytes of the argument

use crate::report::Report;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

pub fn md5(input: &[u8]) -> String {
    hex::encode(Md5::digest(input))
}

pub fn sha1(input: &[u8]) -> String {
    hex::encode(Sha1::digest(input))
}

pub fn sha256(input: &[u8]) -> String {
    hex::encode(Sha256::digest(input))
}

pub fn digest_report(input: &str) -> String {
    let bytes = input.as_bytes();
    Report::new(format!("Digest Report for: \"{}\"", input))
        .field("MD5", md5(bytes))
        .field("SHA-1", sha1(bytes))
        .field("SHA-256", sha256(bytes))
        .field("Length", format!("{} bytes", bytes.len()))
        .render()
}
