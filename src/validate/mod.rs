// Request validation: explicit rule tables (field -> {type, required,
// constraints}) evaluated by a standalone validator against incoming JSON.
// Rule tables for the write endpoints live in `requests`.

pub mod requests;

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleType {
    String,
    Integer,
    Numeric,
    Boolean,
    Date,
    Array,
}

#[derive(Debug, Clone)]
pub enum Constraint {
    MaxLength(usize),
    Min(f64),
    MaxItems(usize),
    OneOf(&'static [&'static str]),
    SnakeCase,
}

#[derive(Debug, Clone)]
pub struct FieldRule {
    pub rule_type: RuleType,
    pub required: bool,
    pub constraints: Vec<Constraint>,
    /// Element rules for Array fields (the `field.*.sub` pattern made explicit).
    pub items: Option<Box<RuleSet>>,
}

impl FieldRule {
    pub fn required(rule_type: RuleType) -> Self {
        Self { rule_type, required: true, constraints: Vec::new(), items: None }
    }

    pub fn optional(rule_type: RuleType) -> Self {
        Self { rule_type, required: false, constraints: Vec::new(), items: None }
    }

    pub fn with(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn each(mut self, items: RuleSet) -> Self {
        self.items = Some(Box::new(items));
        self
    }
}

/// Ordered field -> rule table for one request kind.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<(String, FieldRule)>,
}

/// Validation outcome: one message per failing field, first failure wins.
#[derive(Debug, Error, Clone)]
#[error("The given data was invalid")]
pub struct ValidationErrors {
    pub field_errors: HashMap<String, String>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, rule: FieldRule) -> Self {
        self.rules.push((name.to_string(), rule));
        self
    }

    pub fn validate(&self, input: &Value) -> Result<(), ValidationErrors> {
        let mut field_errors = HashMap::new();

        for (name, rule) in &self.rules {
            let value = input.get(name);
            if let Some(message) = check_field(rule, value) {
                field_errors.insert(name.clone(), message);
                continue;
            }

            if let (Some(items), Some(Value::Array(elements))) = (&rule.items, value) {
                for (index, element) in elements.iter().enumerate() {
                    if let Err(errors) = items.validate(element) {
                        for (sub, message) in errors.field_errors {
                            field_errors.insert(format!("{}.{}.{}", name, index, sub), message);
                        }
                    }
                }
            }
        }

        if field_errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(fields = field_errors.len(), "request validation failed");
            Err(ValidationErrors { field_errors })
        }
    }
}

fn check_field(rule: &FieldRule, value: Option<&Value>) -> Option<String> {
    let value = match value {
        None | Some(Value::Null) => {
            return rule.required.then(|| "This field is required".to_string());
        }
        Some(v) => v,
    };

    if let Some(message) = check_type(rule.rule_type, value) {
        return Some(message);
    }

    for constraint in &rule.constraints {
        if let Some(message) = check_constraint(constraint, value) {
            return Some(message);
        }
    }

    None
}

fn check_type(rule_type: RuleType, value: &Value) -> Option<String> {
    let ok = match rule_type {
        RuleType::String => value.is_string(),
        RuleType::Integer => value.is_i64() || value.is_u64(),
        RuleType::Numeric => value.is_number(),
        RuleType::Boolean => value.is_boolean(),
        RuleType::Array => value.is_array(),
        RuleType::Date => value.as_str().map(is_date_like).unwrap_or(false),
    };

    if ok {
        None
    } else {
        Some(type_message(rule_type))
    }
}

fn type_message(rule_type: RuleType) -> String {
    match rule_type {
        RuleType::String => "Must be a string",
        RuleType::Integer => "Must be an integer",
        RuleType::Numeric => "Must be a number",
        RuleType::Boolean => "Must be a boolean",
        RuleType::Date => "Must be a valid date",
        RuleType::Array => "Must be an array",
    }
    .to_string()
}

fn check_constraint(constraint: &Constraint, value: &Value) -> Option<String> {
    match constraint {
        Constraint::MaxLength(max) => {
            let length = value.as_str().map(|s| s.chars().count()).unwrap_or(0);
            (length > *max).then(|| format!("Must not exceed {} characters", max))
        }
        Constraint::Min(min) => {
            let number = value.as_f64().unwrap_or(0.0);
            (number < *min).then(|| format!("Must be at least {}", min))
        }
        Constraint::MaxItems(max) => {
            let count = value.as_array().map(|a| a.len()).unwrap_or(0);
            (count > *max).then(|| format!("Must not contain more than {} items", max))
        }
        Constraint::OneOf(allowed) => {
            let matched = value.as_str().map(|s| allowed.contains(&s)).unwrap_or(false);
            (!matched).then(|| format!("Must be one of: {}", allowed.join(", ")))
        }
        Constraint::SnakeCase => {
            let ok = value.as_str().map(is_snake_case).unwrap_or(false);
            (!ok).then(|| "Must be a snake_case token".to_string())
        }
    }
}

/// `YYYY-MM-DD`, optionally followed by a `HH:MM:SS` time.
fn is_date_like(s: &str) -> bool {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        || chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").is_ok()
}

fn is_snake_case(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_fails_on_missing_and_null() {
        let rules = RuleSet::new().field("name", FieldRule::required(RuleType::String));

        let err = rules.validate(&json!({})).unwrap_err();
        assert_eq!(err.field_errors["name"], "This field is required");

        let err = rules.validate(&json!({ "name": null })).unwrap_err();
        assert_eq!(err.field_errors["name"], "This field is required");
    }

    #[test]
    fn optional_fields_skip_checks_when_absent() {
        let rules = RuleSet::new()
            .field("leads", FieldRule::optional(RuleType::Integer).with(Constraint::Min(0.0)));
        assert!(rules.validate(&json!({})).is_ok());
        assert!(rules.validate(&json!({ "leads": null })).is_ok());
        assert!(rules.validate(&json!({ "leads": "three" })).is_err());
    }

    #[test]
    fn type_checks_reject_mismatched_values() {
        let rules = RuleSet::new()
            .field("spend", FieldRule::required(RuleType::Numeric))
            .field("spent_in", FieldRule::required(RuleType::Date));

        let err = rules
            .validate(&json!({ "spend": "lots", "spent_in": "yesterday" }))
            .unwrap_err();
        assert_eq!(err.field_errors["spend"], "Must be a number");
        assert_eq!(err.field_errors["spent_in"], "Must be a valid date");
    }

    #[test]
    fn date_accepts_plain_and_datetime_forms() {
        assert!(is_date_like("2024-05-01"));
        assert!(is_date_like("2024-05-01 10:00:00"));
        assert!(!is_date_like("05/01/2024"));
    }

    #[test]
    fn first_failing_constraint_wins() {
        let rules = RuleSet::new().field(
            "name",
            FieldRule::required(RuleType::String)
                .with(Constraint::MaxLength(3))
                .with(Constraint::SnakeCase),
        );

        let err = rules.validate(&json!({ "name": "Too Long" })).unwrap_err();
        assert_eq!(err.field_errors["name"], "Must not exceed 3 characters");
    }

    #[test]
    fn snake_case_constraint() {
        let rules = RuleSet::new()
            .field("name", FieldRule::required(RuleType::String).with(Constraint::SnakeCase));
        assert!(rules.validate(&json!({ "name": "lead_generation" })).is_ok());
        assert!(rules.validate(&json!({ "name": "Lead Generation" })).is_err());
    }

    #[test]
    fn array_element_rules_report_indexed_fields() {
        let rules = RuleSet::new().field(
            "variants",
            FieldRule::required(RuleType::Array).each(
                RuleSet::new()
                    .field("variant_name", FieldRule::required(RuleType::String))
                    .field("quantity", FieldRule::required(RuleType::Integer).with(Constraint::Min(1.0))),
            ),
        );

        let err = rules
            .validate(&json!({
                "variants": [
                    { "variant_name": "Blue / L", "quantity": 3 },
                    { "quantity": 0 },
                ]
            }))
            .unwrap_err();

        assert_eq!(err.field_errors["variants.1.variant_name"], "This field is required");
        assert_eq!(err.field_errors["variants.1.quantity"], "Must be at least 1");
        assert!(!err.field_errors.contains_key("variants.0.variant_name"));
    }
}
