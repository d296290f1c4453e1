//! Format patterns shared by the predicates.
//!
//! Every pattern is compiled once, on first use, and lives for the rest of
//! the process. There is no way to replace or reconfigure a pattern at
//! runtime.
//!
//! Character classes are spelled out as ASCII ranges (`[0-9]`, `[a-zA-Z]`)
//! rather than `\d`, `\w` or `(?i)`: the `regex` crate is Unicode-aware by
//! default, and those shorthands would also accept Arabic-Indic digits or
//! the Kelvin sign.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // =========================================================================
    // NUMBER PATTERNS
    // =========================================================================

    /// One or more ASCII digits.
    pub static ref NUMERIC_PATTERN: Regex = Regex::new(r"^[0-9]+$").unwrap();

    /// Optional leading minus, then digits.
    pub static ref INTEGER_PATTERN: Regex = Regex::new(r"^-?[0-9]+$").unwrap();

    /// Optional leading minus, digits with at most one decimal point.
    /// The point may lead (`.5`) but may not trail (`5.`).
    pub static ref DECIMAL_PATTERN: Regex = Regex::new(r"^-?[0-9]*\.?[0-9]+$").unwrap();

    /// Leading float prefix, the part of a string a lenient float parser
    /// would consume. Used only for the right-hand side of comparisons.
    pub static ref FLOAT_PREFIX_PATTERN: Regex = Regex::new(
        r"^[+-]?(Infinity|([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?)"
    ).unwrap();

    /// Digits, dashes and whitespace: the accepted shape of a card number
    /// before checksum.
    pub static ref NUMERIC_DASH_PATTERN: Regex = Regex::new(r"^[0-9\-\s]+$").unwrap();

    // =========================================================================
    // CHARACTER CLASS PATTERNS
    // =========================================================================

    pub static ref ALPHA_PATTERN: Regex = Regex::new(r"^[a-zA-Z]+$").unwrap();

    pub static ref ALPHA_NUMERIC_PATTERN: Regex = Regex::new(r"^[a-zA-Z0-9]+$").unwrap();

    pub static ref ALPHA_DASH_PATTERN: Regex = Regex::new(r"^[a-zA-Z0-9_\-]+$").unwrap();

    /// Matches any character outside the base64 alphabet. Unanchored.
    pub static ref BASE64_FOREIGN_CHAR_PATTERN: Regex = Regex::new(r"[^a-zA-Z0-9/+=]").unwrap();

    // =========================================================================
    // NETWORK PATTERNS
    // =========================================================================

    /// Email address.
    /// Local part: alphanumeric runs joined by single dots or underscores.
    /// Domain: labels of 2+ characters starting with a letter, then a
    /// 2-6 letter top-level label.
    pub static ref EMAIL_PATTERN: Regex = Regex::new(
        r"^_*([a-zA-Z0-9]+(\.|_*)?)+@([a-zA-Z][a-zA-Z0-9\-]+(\.|\-*\.))+[a-zA-Z]{2,6}$"
    ).unwrap();

    /// Dotted-quad IPv4 address, each octet 0-255.
    pub static ref IP_PATTERN: Regex = Regex::new(
        r"^((25[0-5]|2[0-4][0-9]|1[0-9]{2}|[0-9]{1,2})\.){3}(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[0-9]{1,2})$"
    ).unwrap();

    /// http(s) URL with optional credentials, port and path.
    /// Every part is optional, so the empty string matches.
    pub static ref URL_PATTERN: Regex = Regex::new(
        r"^((http|https)://([A-Za-z0-9_]+:?[A-Za-z0-9_]*@)?(\S+)|)(:[0-9]+)?(/|/([A-Za-z0-9_#!:.?+=&%@\-/]))?$"
    ).unwrap();

    // =========================================================================
    // IDENTITY PATTERNS
    // =========================================================================

    /// Indian mobile number: optional `91`/`+91` prefix with optional space
    /// and dash, or a trunk `0`, then ten digits.
    pub static ref PHONE_PATTERN: Regex = Regex::new(r"^((\+?91\s?-?)|0)?[0-9]{10}$").unwrap();

    /// Aadhaar number: exactly twelve digits.
    pub static ref AADHAAR_PATTERN: Regex = Regex::new(r"^[0-9]{12}$").unwrap();

    /// PAN: `XXXXX9999X`, letters in either case.
    pub static ref PAN_PATTERN: Regex = Regex::new(r"^[a-zA-Z]{5}[0-9]{4}[a-zA-Z]$").unwrap();

    pub static ref USERNAME_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9_.]{6,}$").unwrap();

    /// Six or more characters, none of them a line terminator.
    pub static ref PASSWORD_PATTERN: Regex = Regex::new(r"^[^\n\r\x{2028}\x{2029}]{6,}$").unwrap();
}
