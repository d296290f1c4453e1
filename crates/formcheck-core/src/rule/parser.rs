//! Rule parsing from shorthand strings, YAML and JSON.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use super::schema::validate_rule_schema;
use super::{Operand, Rule};
use crate::patterns::NUMERIC_PATTERN;

/// Errors that can occur when building rules from names or descriptors.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Failed to read rule file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Rule descriptor failed schema validation: {}", .0.join("; "))]
    SchemaError(Vec<String>),

    #[error("Unknown rule: {0}")]
    UnknownRule(String),

    #[error("Rule {0} requires a parameter")]
    MissingParameter(&'static str),

    #[error("Rule {0} does not take a parameter")]
    UnexpectedParameter(&'static str),
}

/// Fold a rule name for lookup: case and underscores are ignored, so
/// `validPAN`, `valid_pan` and `VALID_PAN` are the same rule.
fn fold_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl Rule {
    /// Build a rule from its name and optional parameter.
    ///
    /// Rules with a bound or threshold require `param`; all others reject it.
    pub fn from_name(name: &str, param: Option<&str>) -> Result<Self, RuleError> {
        let folded = fold_name(name.trim());
        let canonical = Rule::NAMES
            .iter()
            .copied()
            .find(|candidate| fold_name(candidate) == folded)
            .ok_or_else(|| RuleError::UnknownRule(name.to_string()))?;

        if !Rule::takes_operand(canonical) {
            if param.is_some() {
                return Err(RuleError::UnexpectedParameter(canonical));
            }
            return Ok(unit_rule(canonical));
        }

        let operand = Operand::new(param.ok_or(RuleError::MissingParameter(canonical))?);
        let rule = match canonical {
            "minLength" => Rule::MinLength { length: operand },
            "maxLength" => Rule::MaxLength { length: operand },
            "exactLength" => Rule::ExactLength { length: operand },
            "greaterThan" => Rule::GreaterThan { than: operand },
            _ => Rule::LessThan { than: operand },
        };
        Ok(rule)
    }

    /// Parse a single rule descriptor from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, RuleError> {
        let value: serde_json::Value = serde_yaml::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Parse a single rule descriptor from JSON.
    pub fn from_json(json: &str) -> Result<Self, RuleError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse a single rule descriptor from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, RuleError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a single rule descriptor from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RuleError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a sequence of rule descriptors from YAML.
    pub fn list_from_yaml(yaml: &str) -> Result<Vec<Self>, RuleError> {
        let value: serde_json::Value = serde_yaml::from_str(yaml)?;
        Self::list_from_value(value)
    }

    /// Parse an array of rule descriptors from JSON.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, RuleError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::list_from_value(value)
    }

    /// Parse a sequence of rule descriptors from a YAML file.
    pub fn list_from_yaml_file(path: impl AsRef<Path>) -> Result<Vec<Self>, RuleError> {
        let contents = fs::read_to_string(path)?;
        Self::list_from_yaml(&contents)
    }

    /// Parse an array of rule descriptors from a JSON file.
    pub fn list_from_json_file(path: impl AsRef<Path>) -> Result<Vec<Self>, RuleError> {
        let contents = fs::read_to_string(path)?;
        Self::list_from_json(&contents)
    }

    fn from_value(value: serde_json::Value) -> Result<Self, RuleError> {
        if let Err(errors) = validate_rule_schema(&value) {
            tracing::warn!(errors = ?errors, "Rule descriptor rejected by schema");
            return Err(RuleError::SchemaError(errors));
        }

        let rule: Rule = serde_json::from_value(value)?;
        rule.warn_if_unsatisfiable();
        tracing::debug!(rule = %rule, "Loaded rule descriptor");
        Ok(rule)
    }

    fn list_from_value(value: serde_json::Value) -> Result<Vec<Self>, RuleError> {
        let items = match value {
            serde_json::Value::Array(items) => items,
            other => {
                return Err(RuleError::SchemaError(vec![format!(
                    "Expected a sequence of rule descriptors, found {}",
                    json_kind(&other)
                )]))
            }
        };

        let mut errors = Vec::new();
        for (index, item) in items.iter().enumerate() {
            if let Err(item_errors) = validate_rule_schema(item) {
                errors.extend(item_errors.into_iter().map(|e| format!("[{}] {}", index, e)));
            }
        }
        if !errors.is_empty() {
            tracing::warn!(errors = ?errors, "Rule descriptors rejected by schema");
            return Err(RuleError::SchemaError(errors));
        }

        let rules: Vec<Rule> = serde_json::from_value(serde_json::Value::Array(items))?;
        for rule in &rules {
            rule.warn_if_unsatisfiable();
        }
        tracing::debug!(count = rules.len(), "Loaded rule descriptors");
        Ok(rules)
    }

    /// A length rule whose bound is not a digit string can never pass.
    /// That is valid (the predicate simply returns false) but almost
    /// certainly a mistake in the descriptor.
    fn warn_if_unsatisfiable(&self) {
        let length = match self {
            Rule::MinLength { length }
            | Rule::MaxLength { length }
            | Rule::ExactLength { length } => length,
            _ => return,
        };

        if !NUMERIC_PATTERN.is_match(length.as_str()) {
            tracing::warn!(rule = %self, "Length bound is not a non-negative integer; rule never passes");
        }
    }
}

fn unit_rule(name: &'static str) -> Rule {
    match name {
        "required" => Rule::Required,
        "validEmail" => Rule::ValidEmail,
        "alpha" => Rule::Alpha,
        "alphaNumeric" => Rule::AlphaNumeric,
        "alphaDash" => Rule::AlphaDash,
        "numeric" => Rule::Numeric,
        "integer" => Rule::Integer,
        "decimal" => Rule::Decimal,
        "validIP" => Rule::ValidIp,
        "validBase64" => Rule::ValidBase64,
        "validUrl" => Rule::ValidUrl,
        "validCreditCard" => Rule::ValidCreditCard,
        "validAadhaar" => Rule::ValidAadhaar,
        "validPhone" => Rule::ValidPhone,
        "validPAN" => Rule::ValidPan,
        "validUsername" => Rule::ValidUsername,
        _ => Rule::ValidPassword,
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a sequence",
        serde_json::Value::Object(_) => "a mapping",
    }
}

/// Parse `name` or `name:param` shorthand, e.g. `validEmail`,
/// `minLength:6`, `greater_than:0`.
///
/// Only the name is trimmed. The parameter is kept verbatim, so
/// `"minLength: 6"` carries the bound `" 6"`, which is not a digit string
/// and never passes, exactly like the descriptor `{"length": " 6"}`.
impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((name, param)) => Rule::from_name(name, Some(param)),
            None => Rule::from_name(s, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULE_LIST: &str = r#"
- rule: required
- rule: minLength
  length: 6
- rule: greaterThan
  than: "0"
- rule: validPAN
"#;

    #[test]
    fn test_from_name_accepts_spellings() {
        assert_eq!(Rule::from_name("validPAN", None).unwrap(), Rule::ValidPan);
        assert_eq!(Rule::from_name("valid_pan", None).unwrap(), Rule::ValidPan);
        assert_eq!(Rule::from_name("valid_ip", None).unwrap(), Rule::ValidIp);
        assert_eq!(
            Rule::from_name("alpha_numeric", None).unwrap(),
            Rule::AlphaNumeric
        );
    }

    #[test]
    fn test_from_name_parameter_arity() {
        assert!(matches!(
            Rule::from_name("minLength", None),
            Err(RuleError::MissingParameter("minLength"))
        ));
        assert!(matches!(
            Rule::from_name("validEmail", Some("5")),
            Err(RuleError::UnexpectedParameter("validEmail"))
        ));
        assert!(matches!(
            Rule::from_name("validSsn", None),
            Err(RuleError::UnknownRule(_))
        ));
    }

    #[test]
    fn test_shorthand() {
        let rule: Rule = "minLength:6".parse().unwrap();
        assert_eq!(rule, Rule::MinLength { length: Operand::new("6") });

        let rule: Rule = "less_than:10".parse().unwrap();
        assert_eq!(rule, Rule::LessThan { than: Operand::new("10") });

        let rule: Rule = "validAadhaar".parse().unwrap();
        assert_eq!(rule, Rule::ValidAadhaar);

        assert!("minLength".parse::<Rule>().is_err());
    }

    #[test]
    fn test_shorthand_keeps_operand_verbatim() {
        let rule = Rule::from_json(r#"{"rule": "minLength", "length": " 6"}"#).unwrap();
        assert_eq!(rule.to_string(), "minLength: 6");

        let reparsed: Rule = rule.to_string().parse().unwrap();
        assert_eq!(reparsed, rule);
        assert_eq!(reparsed, Rule::MinLength { length: Operand::new(" 6") });
        assert!(!rule.check(Some("abcdef")));
        assert!(!reparsed.check(Some("abcdef")));
    }

    #[test]
    fn test_from_yaml() {
        let rule = Rule::from_yaml("rule: exactLength\nlength: 12\n").unwrap();
        assert_eq!(rule, Rule::ExactLength { length: Operand::new("12") });
        assert!(rule.check(Some("562341964296")));
    }

    #[test]
    fn test_list_from_yaml() {
        let rules = Rule::list_from_yaml(RULE_LIST).unwrap();
        assert_eq!(rules.len(), 4);
        assert_eq!(rules[0], Rule::Required);
        assert_eq!(rules[1], Rule::MinLength { length: Operand::new("6") });
        assert_eq!(rules[2], Rule::GreaterThan { than: Operand::new("0") });
        assert_eq!(rules[3], Rule::ValidPan);
    }

    #[test]
    fn test_from_json() {
        let rule = Rule::from_json(r#"{"rule": "greaterThan", "than": 2.5}"#).unwrap();
        assert_eq!(rule, Rule::GreaterThan { than: Operand::new("2.5") });
        assert!(rule.check(Some("3")));
    }

    #[test]
    fn test_json_schema_rejects_missing_operand() {
        let result = Rule::from_json(r#"{"rule": "maxLength"}"#);
        assert!(matches!(result, Err(RuleError::SchemaError(_))));
    }

    #[test]
    fn test_json_schema_rejects_unknown_rule() {
        let result = Rule::from_json(r#"{"rule": "validSsn"}"#);
        assert!(matches!(result, Err(RuleError::SchemaError(_))));
    }

    #[test]
    fn test_list_reports_offending_index() {
        let json = r#"[{"rule": "required"}, {"rule": "alpha", "length": 3}]"#;
        match Rule::list_from_json(json) {
            Err(RuleError::SchemaError(errors)) => {
                assert!(errors.iter().all(|e| e.starts_with("[1]")), "{:?}", errors);
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_list_requires_sequence() {
        let result = Rule::list_from_yaml("rule: required\n");
        assert!(matches!(result, Err(RuleError::SchemaError(_))));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = Rule::from_yaml("rule: [unclosed");
        assert!(matches!(result, Err(RuleError::YamlError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Rule::from_yaml_file("/nonexistent/rules.yaml");
        assert!(matches!(result, Err(RuleError::IoError(_))));
    }

    #[test]
    fn test_non_numeric_bound_loads_but_never_passes() {
        let rule = Rule::from_yaml("rule: minLength\nlength: abc\n").unwrap();
        assert!(!rule.check(Some("long enough text")));
    }
}
