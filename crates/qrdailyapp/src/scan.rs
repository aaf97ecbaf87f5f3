//! Classifies scanned payloads into the categories shown in the scan log.
//!
//! Decoding happens in the scanner; this only inspects the decoded text.
//! Prefix checks are case-insensitive, e.g. `WIFI:S:home;T:WPA;P:secret;;`
//! is [`ScanCategory::Wifi`] and `HTTPS://example.com` is [`ScanCategory::Url`].

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanCategory {
    Url,
    Email,
    Phone,
    Sms,
    Wifi,
    Geo,
    Contact,
    Text,
}

impl ScanCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanCategory::Url => "url",
            ScanCategory::Email => "email",
            ScanCategory::Phone => "phone",
            ScanCategory::Sms => "sms",
            ScanCategory::Wifi => "wifi",
            ScanCategory::Geo => "geo",
            ScanCategory::Contact => "contact",
            ScanCategory::Text => "text",
        }
    }
}

impl fmt::Display for ScanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const PREFIXES: &[(&str, ScanCategory)] = &[
    ("http://", ScanCategory::Url),
    ("https://", ScanCategory::Url),
    ("www.", ScanCategory::Url),
    ("mailto:", ScanCategory::Email),
    ("matmsg:", ScanCategory::Email),
    ("tel:", ScanCategory::Phone),
    ("smsto:", ScanCategory::Sms),
    ("sms:", ScanCategory::Sms),
    ("wifi:", ScanCategory::Wifi),
    ("geo:", ScanCategory::Geo),
    ("begin:vcard", ScanCategory::Contact),
    ("mecard:", ScanCategory::Contact),
];

pub fn classify(data: &str) -> ScanCategory {
    let trimmed = data.trim();
    let lower = trimmed.to_ascii_lowercase();

    if let Some((_, category)) = PREFIXES.iter().find(|(p, _)| lower.starts_with(p)) {
        return *category;
    }
    if looks_like_email(trimmed) {
        return ScanCategory::Email;
    }
    if looks_like_phone(trimmed) {
        return ScanCategory::Phone;
    }
    ScanCategory::Text
}

fn looks_like_email(s: &str) -> bool {
    if s.contains(char::is_whitespace) {
        return false;
    }
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Bare digit runs are left alone (they are usually product barcodes); a
/// phone number needs a leading `+` or some formatting.
fn looks_like_phone(s: &str) -> bool {
    let is_separator = |c: char| matches!(c, ' ' | '-' | '(' | ')' | '.');
    let formatted = s.starts_with('+') || s.contains(is_separator);
    let allowed = s
        .chars()
        .enumerate()
        .all(|(i, c)| c.is_ascii_digit() || is_separator(c) || (c == '+' && i == 0));
    let digits = s.chars().filter(|c| c.is_ascii_digit()).count();
    formatted && allowed && (7..=15).contains(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_uri_schemes() {
        assert_eq!(classify("https://example.com/a?b=c"), ScanCategory::Url);
        assert_eq!(classify("HTTP://EXAMPLE.COM"), ScanCategory::Url);
        assert_eq!(classify("www.example.com"), ScanCategory::Url);
        assert_eq!(classify("mailto:someone@example.com"), ScanCategory::Email);
        assert_eq!(classify("tel:+15551234567"), ScanCategory::Phone);
        assert_eq!(classify("SMSTO:+15551234567:hello"), ScanCategory::Sms);
        assert_eq!(classify("WIFI:S:home;T:WPA;P:secret;;"), ScanCategory::Wifi);
        assert_eq!(classify("geo:52.37,4.89"), ScanCategory::Geo);
        assert_eq!(
            classify("BEGIN:VCARD\nVERSION:3.0\nEND:VCARD"),
            ScanCategory::Contact
        );
    }

    #[test]
    fn recognizes_bare_email_and_phone() {
        assert_eq!(classify("someone@example.com"), ScanCategory::Email);
        assert_eq!(classify("+1 (555) 123-4567"), ScanCategory::Phone);
    }

    #[test]
    fn everything_else_is_text() {
        assert_eq!(classify("hello world"), ScanCategory::Text);
        assert_eq!(classify("4006381333931"), ScanCategory::Text);
        assert_eq!(classify("not an @ email"), ScanCategory::Text);
        assert_eq!(classify("123"), ScanCategory::Text);
        assert_eq!(classify(""), ScanCategory::Text);
    }
}
