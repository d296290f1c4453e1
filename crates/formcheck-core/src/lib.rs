//! # formcheck-core
//!
//! Stateless input-format validators.
//!
//! Each validator is a pure function that tests one value (text, or a text
//! or numeric bound) against a fixed format rule and returns `true` or
//! `false`. Use them to check user-supplied values before further
//! processing; deciding what to tell the user on `false` is up to the caller.
//!
//! ## Key Guarantees
//!
//! 1. **Total**: malformed input is a `false` result, never a panic or error
//! 2. **Pure**: predicates do no I/O, no logging, and share no mutable state
//! 3. **Fixed patterns**: every format pattern is a process-wide constant
//! 4. **Thread-safe**: predicates can be called from any thread without
//!    coordination
//!
//! ## Example
//!
//! ```rust
//! use formcheck_core::{min_length, valid_email, valid_pan, Rule};
//!
//! assert!(min_length("MyText", 5));
//! assert!(valid_email("xyz@gmail.com"));
//! assert!(valid_pan("AKNPJ5811E"));
//!
//! // Dispatch by name, e.g. from a form definition
//! let rule: Rule = "exactLength:12".parse().unwrap();
//! assert!(rule.check(Some("562341964296")));
//! ```

pub mod literal;
pub mod patterns;
pub mod predicates;
pub mod rule;

// Re-export the predicate set at crate root
pub use literal::Literal;
pub use predicates::{
    alpha, alpha_dash, alpha_numeric, decimal, exact_length, greater_than, integer, less_than,
    max_length, min_length, numeric, required, valid_aadhaar, valid_base64, valid_credit_card,
    valid_email, valid_ip, valid_pan, valid_password, valid_phone, valid_url, valid_username,
};
pub use rule::{Operand, Rule, RuleError};
