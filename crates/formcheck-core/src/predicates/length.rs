//! Length-bound predicates.
//!
//! Length is counted in Unicode scalar values, so `"नमस्ते"` has length 6
//! and not its UTF-8 byte count of 18. Characters outside the Basic
//! Multilingual Plane count once, not as two UTF-16 units: `"😀😀😀"` has
//! length 3.
//!
//! The bound must itself be a non-negative integer literal. Anything else
//! (`"abc"`, `"-1"`, `"2.5"`, `-1`) fails the check instead of being coerced.

use crate::literal::Literal;
use crate::patterns::NUMERIC_PATTERN;

/// Parse a length bound, or `None` if it is not a digit string.
///
/// Digit strings too large for `usize` saturate: no text can be that long.
fn parse_bound(length: &(impl Literal + ?Sized)) -> Option<usize> {
    let literal = length.literal();
    if !NUMERIC_PATTERN.is_match(&literal) {
        return None;
    }
    Some(literal.parse::<usize>().unwrap_or(usize::MAX))
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Check that `text` is at least `length` characters long.
///
/// ```
/// use formcheck_core::min_length;
///
/// assert!(min_length("MyText", 5));
/// assert!(min_length("MyText", "6"));
/// assert!(!min_length("MyText", "seven"));
/// ```
pub fn min_length(text: &str, length: impl Literal) -> bool {
    parse_bound(&length).is_some_and(|bound| char_len(text) >= bound)
}

/// Check that `text` is at most `length` characters long.
pub fn max_length(text: &str, length: impl Literal) -> bool {
    parse_bound(&length).is_some_and(|bound| char_len(text) <= bound)
}

/// Check that `text` is exactly `length` characters long.
pub fn exact_length(text: &str, length: impl Literal) -> bool {
    parse_bound(&length).is_some_and(|bound| char_len(text) == bound)
}
