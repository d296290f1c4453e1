//! Identity-document and account-credential predicates.
//!
//! Aadhaar, PAN and phone formats follow Indian conventions.

use crate::patterns::{
    AADHAAR_PATTERN, PAN_PATTERN, PASSWORD_PATTERN, PHONE_PATTERN, USERNAME_PATTERN,
};

/// Check that text is an Aadhaar number: exactly 12 digits, no spaces or
/// separators.
///
/// Valid: `562341964296`, `982345725698`
pub fn valid_aadhaar(text: &str) -> bool {
    AADHAAR_PATTERN.is_match(text)
}

/// Check that text is an Indian mobile number.
///
/// Valid formats:
///
/// ```text
/// 9703517026
/// 919703517026
/// 91-9703517026
/// 91 9703517026
/// +919703517026
/// +91-9703517026
/// +91 9703517026
/// 09703517026
/// ```
pub fn valid_phone(text: &str) -> bool {
    PHONE_PATTERN.is_match(text)
}

/// Check that text is a PAN: `XXXXX9999X`, where `X` is a letter in either
/// case and `9` a digit.
///
/// Valid: `AKNPJ5811F`, `TFDST2314T`
pub fn valid_pan(text: &str) -> bool {
    PAN_PATTERN.is_match(text)
}

/// Check that text is a username: at least 6 letters, digits, `_` or `.`.
pub fn valid_username(text: &str) -> bool {
    USERNAME_PATTERN.is_match(text)
}

/// Check that text is a password: at least 6 characters of any kind except
/// line breaks. Characters are Unicode scalar values, so three emoji are
/// three characters.
pub fn valid_password(text: &str) -> bool {
    PASSWORD_PATTERN.is_match(text)
}
