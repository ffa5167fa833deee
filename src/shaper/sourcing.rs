use serde_json::{json, Map, Value};

use crate::entity::{Sourcing, SourcingVariant};

/// Convert a Sourcing into the public wire format. Base attributes pass
/// through untouched. The `variants` key appears only when the caller
/// pre-loaded the relation; a not-loaded relation leaves the key out
/// entirely rather than emitting null or an empty array.
pub fn sourcing_to_api_value(sourcing: &Sourcing) -> Value {
    let mut obj: Map<String, Value> = sourcing.attributes.clone();

    if let Some(variants) = sourcing.variants.loaded() {
        obj.insert(
            "variants".into(),
            Value::Array(variants.iter().map(sourcing_variant_to_api_value).collect()),
        );
    }

    Value::Object(obj)
}

pub fn sourcings_to_api_values(sourcings: &[Sourcing]) -> Vec<Value> {
    sourcings.iter().map(sourcing_to_api_value).collect()
}

fn sourcing_variant_to_api_value(variant: &SourcingVariant) -> Value {
    let mut obj = Map::new();
    obj.insert("id".into(), json!(variant.id));
    obj.insert("variant_name".into(), json!(variant.variant_name));
    obj.insert("quantity".into(), json!(variant.quantity));
    obj.insert("product_variant_id".into(), json!(variant.product_variant_id));
    obj.insert("sourcing_id".into(), json!(variant.sourcing_id));
    obj.insert("created_at".into(), json!(variant.created_at.to_rfc3339()));
    obj.insert("updated_at".into(), json!(variant.updated_at.to_rfc3339()));
    Value::Object(obj)
}
