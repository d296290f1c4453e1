//! Numeric comparison predicates.
//!
//! The left operand is the user input and must be a strict decimal literal
//! before it is converted. The right operand is the caller's threshold and
//! is read leniently: its leading float prefix is used (`"3px"` reads as 3),
//! and a threshold with no numeric prefix makes every comparison false.

use crate::literal::{parse_float_prefix, Literal};
use crate::patterns::DECIMAL_PATTERN;

/// Convert the left operand, or `None` if it is not a decimal literal.
fn parse_operand(value: &(impl Literal + ?Sized)) -> Option<f64> {
    let literal = value.literal();
    if !DECIMAL_PATTERN.is_match(&literal) {
        return None;
    }
    Some(parse_float_prefix(&literal))
}

/// Check that `value` is a decimal literal greater than `than`.
///
/// ```
/// use formcheck_core::greater_than;
///
/// assert!(greater_than("5", "3"));
/// assert!(greater_than("5", 3));
/// assert!(!greater_than("abc", "3"));
/// ```
pub fn greater_than(value: impl Literal, than: impl Literal) -> bool {
    parse_operand(&value).is_some_and(|lhs| lhs > parse_float_prefix(&than.literal()))
}

/// Check that `value` is a decimal literal less than `than`.
pub fn less_than(value: impl Literal, than: impl Literal) -> bool {
    parse_operand(&value).is_some_and(|lhs| lhs < parse_float_prefix(&than.literal()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greater_than() {
        assert!(greater_than("5", "3"));
        assert!(!greater_than("3", "5"));
        assert!(!greater_than("3", "3"));
        assert!(greater_than("-0.5", "-1"));
        assert!(greater_than(".5", 0));
    }

    #[test]
    fn test_less_than() {
        assert!(less_than("3", "5"));
        assert!(!less_than("5", "3"));
        assert!(!less_than("5", "5"));
        assert!(less_than(-2, -1.5));
    }

    #[test]
    fn test_malformed_left_operand_fails() {
        for value in ["abc", "", "5.", "1e3", "+5", " 5", "5px"] {
            assert!(!greater_than(value, "0"), "greater_than accepted {:?}", value);
            assert!(!less_than(value, "1000000"), "less_than accepted {:?}", value);
        }
    }

    #[test]
    fn test_threshold_is_read_leniently() {
        assert!(greater_than("5", "3px"));
        assert!(less_than("5", " 10 "));
        assert!(!greater_than("5", "abc"));
        assert!(!less_than("5", "abc"));
        assert!(less_than("5", "Infinity"));
    }
}
