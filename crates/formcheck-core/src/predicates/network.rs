//! Email, IP, URL and base64 predicates.

use crate::patterns::{BASE64_FOREIGN_CHAR_PATTERN, EMAIL_PATTERN, IP_PATTERN, URL_PATTERN};

/// Check that text is an email address.
///
/// - Local part: letters and digits, optionally joined by single dots or
///   underscores (leading underscores allowed)
/// - `@` is mandatory
/// - Domain: one or more labels of at least two characters, each starting
///   with a letter and followed by a dot
/// - Top-level label: 2 to 6 letters
///
/// Valid: `tapas.jena@gmail.com`, `sudhir_chitrala@kony.com`
pub fn valid_email(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text)
}

/// Check that text is a dotted-quad IPv4 address with octets 0-255.
pub fn valid_ip(text: &str) -> bool {
    IP_PATTERN.is_match(text)
}

/// Check for characters outside the base64 alphabet.
///
/// Note the polarity: this returns `true` when `text` contains at least
/// one character that is NOT in `[A-Za-z0-9+/=]`, i.e. when the text is not
/// base64. Callers wanting "is base64" must negate the result.
pub fn valid_base64(text: &str) -> bool {
    BASE64_FOREIGN_CHAR_PATTERN.is_match(text)
}

/// Check that text is an http(s) URL: optional scheme with optional
/// `user:pass@` credentials and host, optional `:port`, optional path.
///
/// Every component is optional, so the empty string is accepted.
pub fn valid_url(text: &str) -> bool {
    URL_PATTERN.is_match(text)
}
