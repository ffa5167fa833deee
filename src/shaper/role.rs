use serde_json::{json, Map, Value};

use crate::entity::Role;

/// Convert a Role into the public wire format. The label is derived from
/// the snake_case name, never stored.
pub fn role_to_api_value(role: &Role) -> Value {
    let mut obj = Map::new();
    obj.insert("id".into(), json!(role.id));
    obj.insert("name".into(), json!(role.name));
    obj.insert("label".into(), json!(label_from_name(&role.name)));
    Value::Object(obj)
}

pub fn roles_to_api_values(roles: &[Role]) -> Vec<Value> {
    roles.iter().map(role_to_api_value).collect()
}

/// Underscores become spaces, then each word's first letter is capitalized.
fn label_from_name(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_title_cases_snake_case_names() {
        assert_eq!(label_from_name("lead_generation"), "Lead Generation");
        assert_eq!(label_from_name("admin"), "Admin");
        assert_eq!(label_from_name("account_manager"), "Account Manager");
    }

    #[test]
    fn role_shape_includes_derived_label() {
        let role = Role { id: 2, name: "lead_generation".into() };
        let value = role_to_api_value(&role);
        assert_eq!(
            value,
            json!({ "id": 2, "name": "lead_generation", "label": "Lead Generation" })
        );
    }
}
