//! The predicate set.
//!
//! Every predicate is an independent, pure function that takes the value to
//! check (plus a bound or threshold where the rule needs one) and returns
//! `true` if the value conforms. Malformed input, including a malformed
//! bound, is a `false` result and never a panic.
//!
//! | Predicate | Rule |
//! |-----------|------|
//! | [`required`] | present and non-empty |
//! | [`valid_email`] | email address |
//! | [`min_length`] / [`max_length`] / [`exact_length`] | character count against an integer bound |
//! | [`greater_than`] / [`less_than`] | decimal literal compared against a threshold |
//! | [`alpha`] / [`alpha_numeric`] / [`alpha_dash`] | ASCII character classes |
//! | [`numeric`] / [`integer`] / [`decimal`] | number literals |
//! | [`valid_ip`] | IPv4 dotted quad |
//! | [`valid_base64`] | contains a non-base64 character |
//! | [`valid_url`] | http(s) URL |
//! | [`valid_credit_card`] | Luhn checksum |
//! | [`valid_aadhaar`] / [`valid_phone`] / [`valid_pan`] | Indian identity formats |
//! | [`valid_username`] / [`valid_password`] | account credentials |

mod card;
mod compare;
mod identity;
mod length;
mod network;
mod text;

pub use card::valid_credit_card;
pub use compare::{greater_than, less_than};
pub use identity::{valid_aadhaar, valid_pan, valid_password, valid_phone, valid_username};
pub use length::{exact_length, max_length, min_length};
pub use network::{valid_base64, valid_email, valid_ip, valid_url};
pub use text::{alpha, alpha_dash, alpha_numeric, decimal, integer, numeric, required};
