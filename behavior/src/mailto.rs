//! Contact form → `mailto:` URI composition.
//!
//! No validation and no network: the page hands the message to the visitor's
//! mail client and never learns whether it was sent.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use serde::{Deserialize, Serialize};

/// The four contact form fields, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Subject line, falling back to `default_subject` when blank.
    #[must_use]
    pub fn subject_or<'a>(&'a self, default_subject: &'a str) -> &'a str {
        if self.subject.trim().is_empty() { default_subject } else { &self.subject }
    }

    #[must_use]
    pub fn body(&self) -> String {
        format!("Name: {}\nEmail: {}\n\nMessage:\n{}", self.name, self.email, self.message)
    }

    /// `mailto:` URI addressed to `recipient` with encoded subject and body.
    #[must_use]
    pub fn to_mailto(&self, recipient: &str, default_subject: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            encode_uri_component(self.subject_or(default_subject)),
            encode_uri_component(&self.body())
        )
    }
}

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encode like the browser's `encodeURIComponent`.
#[must_use]
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if is_unreserved(byte) {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(char::from(HEX[usize::from(byte >> 4)]));
            out.push(char::from(HEX[usize::from(byte & 0x0F)]));
        }
    }
    out
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}
