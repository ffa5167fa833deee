use serde_json::{json, Map, Value};

use crate::entity::OrderItem;

/// Convert an OrderItem into the public wire format.
///
/// The name pair follows the foreign keys: a set product_id takes the
/// linked product's name with an empty variant_name; otherwise a set
/// product_variant_id takes the variant's parent product name plus the
/// variant's own name. A dangling lookup, or neither key set, degrades to
/// empty strings rather than failing.
pub fn order_item_to_api_value(item: &OrderItem) -> Value {
    let (product_name, variant_name) = display_names(item);

    let mut obj = Map::new();
    obj.insert("id".into(), json!(item.id));
    obj.insert("product_id".into(), json!(item.product_id));
    obj.insert("product_variant_id".into(), json!(item.product_variant_id));
    obj.insert("product_name".into(), json!(product_name));
    obj.insert("variant_name".into(), json!(variant_name));
    obj.insert("price".into(), json!(item.price));
    obj.insert("quantity".into(), json!(item.quantity));
    obj.insert("updated_at".into(), json!(item.updated_at.to_rfc3339()));
    Value::Object(obj)
}

pub fn order_items_to_api_values(items: &[OrderItem]) -> Vec<Value> {
    items.iter().map(order_item_to_api_value).collect()
}

fn display_names(item: &OrderItem) -> (String, String) {
    if item.product_id.is_some() {
        let product_name = item
            .product
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_default();
        (product_name, String::new())
    } else if item.product_variant_id.is_some() {
        match &item.variant {
            Some(variant) => {
                let product_name = variant
                    .product
                    .as_ref()
                    .map(|p| p.name.clone())
                    .unwrap_or_default();
                (product_name, variant.name.clone())
            }
            None => (String::new(), String::new()),
        }
    } else {
        (String::new(), String::new())
    }
}
