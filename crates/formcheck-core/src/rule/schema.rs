//! JSON Schema validation for rule descriptors.
//!
//! Descriptors are checked against `schema/rule.schema.json` before they are
//! deserialized, so a descriptor with a missing operand or a stray key is
//! reported with its location instead of a bare serde message.

use std::sync::OnceLock;

/// Embedded rule descriptor schema (loaded at compile time).
const RULE_SCHEMA_JSON: &str = include_str!("../../schema/rule.schema.json");

/// Compiled JSON Schema validator (initialized once, reused).
static COMPILED_SCHEMA: OnceLock<Result<jsonschema::Validator, String>> = OnceLock::new();

fn get_validator() -> Result<&'static jsonschema::Validator, String> {
    let result = COMPILED_SCHEMA.get_or_init(|| {
        let schema_value: serde_json::Value = serde_json::from_str(RULE_SCHEMA_JSON)
            .map_err(|e| format!("Invalid schema JSON: {}", e))?;

        jsonschema::options()
            .build(&schema_value)
            .map_err(|e| format!("Failed to compile schema: {}", e))
    });

    result.as_ref().map_err(Clone::clone)
}

/// Validate one rule descriptor against the schema.
///
/// # Returns
///
/// * `Ok(())` - Descriptor is valid
/// * `Err(Vec<String>)` - One message per violation, with its location
pub fn validate_rule_schema(descriptor: &serde_json::Value) -> Result<(), Vec<String>> {
    let validator = get_validator().map_err(|e| vec![e])?;

    let errors: Vec<String> = validator
        .iter_errors(descriptor)
        .map(|e| format!("{} at {}", e, e.instance_path))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check if a rule descriptor is valid against the schema.
pub fn is_valid_rule(descriptor: &serde_json::Value) -> bool {
    get_validator()
        .map(|v| v.is_valid(descriptor))
        .unwrap_or(false)
}
