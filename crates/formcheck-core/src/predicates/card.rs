//! Payment card number predicate (Luhn checksum).

use crate::patterns::NUMERIC_DASH_PATTERN;

/// Luhn checksum over a sequence of decimal digits.
///
/// Walks from the rightmost digit, doubling every second digit (folding
/// results above 9 back by subtracting 9), and accepts when the sum is a
/// multiple of 10. An empty sequence sums to 0 and passes.
///
/// The running sum is kept modulo 10, so arbitrarily long inputs cannot
/// overflow it.
fn luhn(digits: impl DoubleEndedIterator<Item = u32>) -> bool {
    let mut sum = 0u32;
    let mut double = false;

    for digit in digits.rev() {
        let value = if double {
            let doubled = digit * 2;
            if doubled > 9 {
                doubled - 9
            } else {
                doubled
            }
        } else {
            digit
        };

        sum = (sum + value) % 10;
        double = !double;
    }

    sum == 0
}

/// Check that text is a card number that passes the Luhn checksum.
///
/// Digits may be grouped with dashes or whitespace; any other character
/// fails the check before the checksum is computed. Length is not checked.
///
/// ```
/// use formcheck_core::valid_credit_card;
///
/// assert!(valid_credit_card("4111 1111 1111 1111"));
/// assert!(!valid_credit_card("4111111111111112"));
/// ```
pub fn valid_credit_card(text: &str) -> bool {
    if !NUMERIC_DASH_PATTERN.is_match(text) {
        return false;
    }

    let digits: Vec<u32> = text.chars().filter_map(|c| c.to_digit(10)).collect();
    luhn(digits.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_numbers() {
        assert!(valid_credit_card("4111111111111111")); // Visa test
        assert!(valid_credit_card("5500000000000004")); // Mastercard test
        assert!(valid_credit_card("378282246310005")); // Amex test
        assert!(valid_credit_card("4111-1111-1111-1111"));
        assert!(valid_credit_card("4111 1111 1111 1111"));
    }

    #[test]
    fn test_single_digit_tamper_fails() {
        assert!(!valid_credit_card("4111111111111112"));
        assert!(!valid_credit_card("5500000000000005"));
    }

    #[test]
    fn test_foreign_characters_fail() {
        assert!(!valid_credit_card("4111.1111.1111.1111"));
        assert!(!valid_credit_card("4111111111111111a"));
        assert!(!valid_credit_card(""));
    }

    #[test]
    fn test_traversal_starts_at_rightmost_digit() {
        // "18" is valid read right-to-left (8 + 1*2 = 10) but not
        // left-to-right (1 + 8*2-9 = 8).
        assert!(valid_credit_card("18"));
        assert!(!valid_credit_card("81"));
    }

    #[test]
    fn test_separators_only_is_accepted() {
        assert!(valid_credit_card("- -"));
    }

    #[test]
    fn test_long_input_keeps_checksum() {
        // 1_000_000 nines sum to 9_000_000
        let digits = "9".repeat(1_000_000);
        assert!(valid_credit_card(&digits));
        assert!(!valid_credit_card(&format!("{}2", digits)));
        // 500_000_000 nines sum past u32::MAX
        assert!(luhn((0..500_000_000u32).map(|_| 9)));
    }

    #[test]
    fn test_luhn_digits() {
        assert!(luhn([7, 9, 9, 2, 7, 3, 9, 8, 7, 1, 3].into_iter()));
        assert!(!luhn([7, 9, 9, 2, 7, 3, 9, 8, 7, 1, 4].into_iter()));
        assert!(luhn(std::iter::empty()));
    }
}
