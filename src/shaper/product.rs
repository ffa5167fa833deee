use serde_json::{json, Map, Value};

use crate::assets::AssetResolver;
use crate::entity::{Category, Product, ProductVariant};
use crate::shaper::storage_url_value;

/// Convert a Product into the company back-office wire format.
pub fn product_to_api_value(product: &Product, assets: &AssetResolver) -> Value {
    let mut obj = Map::new();
    obj.insert("id".into(), json!(product.id));
    obj.insert("name".into(), json!(product.name));
    obj.insert("description".into(), json!(product.description));
    obj.insert(
        "thumbnail_url".into(),
        storage_url_value(product.thumbnail_path.as_deref(), assets),
    );
    obj.insert("created_at".into(), json!(product.created_at.to_rfc3339()));
    obj.insert(
        "categories".into(),
        Value::Array(product.categories.iter().map(category_to_api_value).collect()),
    );
    Value::Object(obj)
}

pub fn products_to_api_values(products: &[Product], assets: &AssetResolver) -> Vec<Value> {
    products.iter().map(|p| product_to_api_value(p, assets)).collect()
}

fn category_to_api_value(category: &Category) -> Value {
    json!({ "id": category.id, "name": category.name })
}

/// Shaper behind the order-variants listing. Despite that listing role it
/// emits one flat mapping built from a single variant, not an array;
/// callers that want a list apply it per item. Known oddity, kept as-is for
/// wire compatibility until the contract owner rules otherwise.
pub fn product_variant_for_order_to_api_value(variant: &ProductVariant) -> Value {
    let mut obj = Map::new();
    obj.insert("id".into(), json!(variant.id));
    obj.insert("variant_name".into(), json!(variant.variant_name));
    obj.insert("quantity".into(), json!(variant.quantity));
    Value::Object(obj)
}
