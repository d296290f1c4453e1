//! Named rules.
//!
//! A [`Rule`] names one predicate, together with its bound or threshold
//! when it needs one. Rules let callers store validation choices as data
//! (`"minLength:6"`, or a YAML/JSON descriptor) and dispatch to the
//! matching predicate by name.
//!
//! Each rule stands alone. A list of rules loaded from a file is just a list;
//! there is no evaluation order, short-circuiting or combined verdict.

mod parser;
mod schema;

pub use parser::RuleError;
pub use schema::{is_valid_rule, validate_rule_schema};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::literal::Literal;
use crate::predicates;

/// A bound or threshold carried by a rule.
///
/// Deserializes from either a string or a number and keeps the literal
/// text, so `6`, `"6"` and `6.0` all become `"6"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "OperandRepr", into = "String")]
pub struct Operand(String);

impl Operand {
    pub fn new(literal: impl Literal) -> Self {
        Self(literal.literal().into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Literal for Operand {
    fn literal(&self) -> std::borrow::Cow<'_, str> {
        std::borrow::Cow::Borrowed(&self.0)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Operand> for String {
    fn from(operand: Operand) -> Self {
        operand.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OperandRepr {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl From<OperandRepr> for Operand {
    fn from(repr: OperandRepr) -> Self {
        match repr {
            OperandRepr::Text(text) => Operand(text),
            OperandRepr::Signed(n) => Operand::new(n),
            OperandRepr::Unsigned(n) => Operand::new(n),
            OperandRepr::Float(n) => Operand::new(n),
        }
    }
}

/// One named validation rule.
///
/// Serialized form is internally tagged by `rule`, using the camelCase
/// names listed in [`Rule::NAMES`]:
///
/// ```yaml
/// rule: minLength
/// length: 6
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum Rule {
    Required,
    ValidEmail,
    MinLength { length: Operand },
    MaxLength { length: Operand },
    ExactLength { length: Operand },
    GreaterThan { than: Operand },
    LessThan { than: Operand },
    Alpha,
    AlphaNumeric,
    AlphaDash,
    Numeric,
    Integer,
    Decimal,
    #[serde(rename = "validIP")]
    ValidIp,
    ValidBase64,
    ValidUrl,
    ValidCreditCard,
    ValidAadhaar,
    ValidPhone,
    #[serde(rename = "validPAN")]
    ValidPan,
    ValidUsername,
    ValidPassword,
}

impl Rule {
    /// Names of every rule, in declaration order.
    pub const NAMES: [&'static str; 22] = [
        "required",
        "validEmail",
        "minLength",
        "maxLength",
        "exactLength",
        "greaterThan",
        "lessThan",
        "alpha",
        "alphaNumeric",
        "alphaDash",
        "numeric",
        "integer",
        "decimal",
        "validIP",
        "validBase64",
        "validUrl",
        "validCreditCard",
        "validAadhaar",
        "validPhone",
        "validPAN",
        "validUsername",
        "validPassword",
    ];

    /// The rule's name, as it appears in descriptors.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::ValidEmail => "validEmail",
            Rule::MinLength { .. } => "minLength",
            Rule::MaxLength { .. } => "maxLength",
            Rule::ExactLength { .. } => "exactLength",
            Rule::GreaterThan { .. } => "greaterThan",
            Rule::LessThan { .. } => "lessThan",
            Rule::Alpha => "alpha",
            Rule::AlphaNumeric => "alphaNumeric",
            Rule::AlphaDash => "alphaDash",
            Rule::Numeric => "numeric",
            Rule::Integer => "integer",
            Rule::Decimal => "decimal",
            Rule::ValidIp => "validIP",
            Rule::ValidBase64 => "validBase64",
            Rule::ValidUrl => "validUrl",
            Rule::ValidCreditCard => "validCreditCard",
            Rule::ValidAadhaar => "validAadhaar",
            Rule::ValidPhone => "validPhone",
            Rule::ValidPan => "validPAN",
            Rule::ValidUsername => "validUsername",
            Rule::ValidPassword => "validPassword",
        }
    }

    /// The bound or threshold, for rules that carry one.
    pub fn operand(&self) -> Option<&Operand> {
        match self {
            Rule::MinLength { length }
            | Rule::MaxLength { length }
            | Rule::ExactLength { length } => Some(length),
            Rule::GreaterThan { than } | Rule::LessThan { than } => Some(than),
            _ => None,
        }
    }

    /// Whether the rule needs an operand.
    pub fn takes_operand(name: &str) -> bool {
        matches!(
            name,
            "minLength" | "maxLength" | "exactLength" | "greaterThan" | "lessThan"
        )
    }

    /// Apply the rule to a value. An absent value fails every rule.
    pub fn check(&self, value: Option<&str>) -> bool {
        match value {
            Some(text) => self.check_text(text),
            None => false,
        }
    }

    fn check_text(&self, text: &str) -> bool {
        match self {
            Rule::Required => predicates::required(Some(text)),
            Rule::ValidEmail => predicates::valid_email(text),
            Rule::MinLength { length } => predicates::min_length(text, length),
            Rule::MaxLength { length } => predicates::max_length(text, length),
            Rule::ExactLength { length } => predicates::exact_length(text, length),
            Rule::GreaterThan { than } => predicates::greater_than(text, than),
            Rule::LessThan { than } => predicates::less_than(text, than),
            Rule::Alpha => predicates::alpha(text),
            Rule::AlphaNumeric => predicates::alpha_numeric(text),
            Rule::AlphaDash => predicates::alpha_dash(text),
            Rule::Numeric => predicates::numeric(text),
            Rule::Integer => predicates::integer(text),
            Rule::Decimal => predicates::decimal(text),
            Rule::ValidIp => predicates::valid_ip(text),
            Rule::ValidBase64 => predicates::valid_base64(text),
            Rule::ValidUrl => predicates::valid_url(text),
            Rule::ValidCreditCard => predicates::valid_credit_card(text),
            Rule::ValidAadhaar => predicates::valid_aadhaar(text),
            Rule::ValidPhone => predicates::valid_phone(text),
            Rule::ValidPan => predicates::valid_pan(text),
            Rule::ValidUsername => predicates::valid_username(text),
            Rule::ValidPassword => predicates::valid_password(text),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand() {
            Some(operand) => write!(f, "{}:{}", self.name(), operand),
            None => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_variants() {
        for name in Rule::NAMES {
            let param = Rule::takes_operand(name).then_some("1");
            let rule = Rule::from_name(name, param).unwrap();
            assert_eq!(rule.name(), name);
        }
    }

    #[test]
    fn test_check_dispatches_to_predicate() {
        assert!(Rule::ValidPan.check(Some("AKNPJ5811F")));
        assert!(!Rule::ValidPan.check(Some("AKNPJ58F11")));
        assert!(Rule::ValidCreditCard.check(Some("4111111111111111")));

        let min = Rule::MinLength { length: Operand::new(6) };
        assert!(min.check(Some("tapas_jena")));
        assert!(!min.check(Some("tapas")));

        let above = Rule::GreaterThan { than: Operand::new("3") };
        assert!(above.check(Some("5")));
        assert!(!above.check(Some("abc")));
    }

    #[test]
    fn test_absent_value_fails_every_rule() {
        for name in Rule::NAMES {
            let param = Rule::takes_operand(name).then_some("0");
            let rule = Rule::from_name(name, param).unwrap();
            assert!(!rule.check(None), "{} accepted an absent value", name);
        }
    }

    #[test]
    fn test_required() {
        assert!(Rule::Required.check(Some("x")));
        assert!(!Rule::Required.check(Some("")));
        assert!(!Rule::Required.check(None));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rule::ValidIp.to_string(), "validIP");
        assert_eq!(
            Rule::ExactLength { length: Operand::new(12) }.to_string(),
            "exactLength:12"
        );
    }

    #[test]
    fn test_operand_from_numbers() {
        assert_eq!(Operand::new(6u8).as_str(), "6");
        assert_eq!(Operand::new(6.0f64).as_str(), "6");
        assert_eq!(Operand::new(-1.5f32).as_str(), "-1.5");
    }
}
