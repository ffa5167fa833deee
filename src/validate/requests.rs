//! Rule tables for the back-office write endpoints, one constructor per
//! request kind. Free-text length ceilings come from config so deployments
//! can tighten them without a rebuild.

use crate::config;

use super::{Constraint, FieldRule, RuleSet, RuleType};

pub fn store_ad_rules() -> RuleSet {
    let max = config::config().validation.max_string_length;

    RuleSet::new()
        .field("product_id", FieldRule::required(RuleType::Integer))
        .field(
            "platform",
            FieldRule::required(RuleType::String).with(Constraint::MaxLength(max)),
        )
        .field(
            "spend",
            FieldRule::required(RuleType::Numeric).with(Constraint::Min(0.0)),
        )
        .field("spent_in", FieldRule::required(RuleType::Date))
        .field(
            "leads",
            FieldRule::optional(RuleType::Integer).with(Constraint::Min(0.0)),
        )
}

pub fn store_document_rules() -> RuleSet {
    let max = config::config().validation.max_string_length;

    RuleSet::new()
        .field(
            "name",
            FieldRule::required(RuleType::String).with(Constraint::MaxLength(max)),
        )
        .field("description", FieldRule::optional(RuleType::String))
        .field(
            "type",
            FieldRule::required(RuleType::String).with(Constraint::MaxLength(50)),
        )
        .field(
            "status",
            FieldRule::optional(RuleType::String)
                .with(Constraint::OneOf(&["active", "archived"])),
        )
}

pub fn store_role_rules() -> RuleSet {
    RuleSet::new().field(
        "name",
        FieldRule::required(RuleType::String)
            .with(Constraint::MaxLength(50))
            .with(Constraint::SnakeCase),
    )
}

pub fn store_sourcing_rules() -> RuleSet {
    let max = config::config().validation.max_string_length;

    RuleSet::new().field(
        "variants",
        FieldRule::required(RuleType::Array)
            .with(Constraint::MaxItems(100))
            .each(
                RuleSet::new()
                    .field(
                        "variant_name",
                        FieldRule::required(RuleType::String).with(Constraint::MaxLength(max)),
                    )
                    .field(
                        "quantity",
                        FieldRule::required(RuleType::Integer).with(Constraint::Min(1.0)),
                    )
                    .field("product_variant_id", FieldRule::required(RuleType::Integer)),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn store_ad_accepts_a_complete_payload() {
        let payload = json!({
            "product_id": 11,
            "platform": "facebook",
            "spend": 120.50,
            "spent_in": "2024-05-01",
            "leads": 42,
        });
        assert!(store_ad_rules().validate(&payload).is_ok());
    }

    #[test]
    fn store_ad_rejects_negative_spend_and_bad_date() {
        let payload = json!({
            "product_id": 11,
            "platform": "facebook",
            "spend": -1,
            "spent_in": "May 1st",
        });
        let err = store_ad_rules().validate(&payload).unwrap_err();
        assert!(err.field_errors.contains_key("spend"));
        assert!(err.field_errors.contains_key("spent_in"));
        assert!(!err.field_errors.contains_key("leads"), "leads is optional");
    }

    #[test]
    fn store_role_rejects_non_snake_case_names() {
        let err = store_role_rules()
            .validate(&json!({ "name": "Lead Generation" }))
            .unwrap_err();
        assert_eq!(err.field_errors["name"], "Must be a snake_case token");
    }

    #[test]
    fn store_document_restricts_status_values() {
        let payload = json!({ "name": "Contract", "type": "contract", "status": "draft" });
        let err = store_document_rules().validate(&payload).unwrap_err();
        assert_eq!(err.field_errors["status"], "Must be one of: active, archived");
    }

    #[test]
    fn store_sourcing_validates_each_variant() {
        let payload = json!({
            "variants": [
                { "variant_name": "Blue / L", "quantity": 40, "product_variant_id": 21 },
                { "variant_name": "Red / M", "quantity": 0, "product_variant_id": 22 },
            ]
        });
        let err = store_sourcing_rules().validate(&payload).unwrap_err();
        assert_eq!(err.field_errors["variants.1.quantity"], "Must be at least 1");
        assert_eq!(err.field_errors.len(), 1);
    }
}
