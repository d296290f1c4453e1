//! Presence and character-class predicates.

use crate::patterns::{
    ALPHA_DASH_PATTERN, ALPHA_NUMERIC_PATTERN, ALPHA_PATTERN, DECIMAL_PATTERN, INTEGER_PATTERN,
    NUMERIC_PATTERN,
};

/// Check that a value is present and non-empty.
///
/// Whitespace counts as content: `required(Some(" "))` is true.
pub fn required(value: Option<&str>) -> bool {
    matches!(value, Some(text) if !text.is_empty())
}

/// Check that text consists of ASCII letters only, in either case.
pub fn alpha(text: &str) -> bool {
    ALPHA_PATTERN.is_match(text)
}

/// Check that text consists of ASCII letters and digits only.
pub fn alpha_numeric(text: &str) -> bool {
    ALPHA_NUMERIC_PATTERN.is_match(text)
}

/// Check that text consists of ASCII letters, digits, `_` and `-` only.
pub fn alpha_dash(text: &str) -> bool {
    ALPHA_DASH_PATTERN.is_match(text)
}

/// Check that text is one or more ASCII digits.
pub fn numeric(text: &str) -> bool {
    NUMERIC_PATTERN.is_match(text)
}

/// Check that text is an integer literal: optional `-`, then digits.
pub fn integer(text: &str) -> bool {
    INTEGER_PATTERN.is_match(text)
}

/// Check that text is a decimal literal: optional `-`, digits, and at most
/// one decimal point that is followed by at least one digit.
pub fn decimal(text: &str) -> bool {
    DECIMAL_PATTERN.is_match(text)
}
