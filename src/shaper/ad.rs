use serde_json::{json, Map, Value};

use crate::entity::Ad;

/// Convert an Ad into the public wire format.
/// The stored `leads` count is exposed as `results`.
pub fn ad_to_api_value(ad: &Ad) -> Value {
    let mut obj = Map::new();
    obj.insert("id".into(), json!(ad.id));
    obj.insert("user_id".into(), json!(ad.user_id));
    obj.insert(
        "product".into(),
        json!({ "id": ad.product.id, "name": ad.product.name }),
    );
    obj.insert("spend".into(), json!(ad.spend));
    obj.insert("spent_in".into(), spent_in_value(ad.spent_in.as_deref()));
    obj.insert("results".into(), json!(ad.leads));
    obj.insert("platform".into(), json!(ad.platform));
    obj.insert("created_at".into(), json!(ad.created_at.to_rfc3339()));
    Value::Object(obj)
}

pub fn ads_to_api_values(ads: &[Ad]) -> Vec<Value> {
    ads.iter().map(ad_to_api_value).collect()
}

/// Truncate a stored `spent_in` value to everything before the first space.
/// No space means the whole value; empty or absent means null.
fn spent_in_value(raw: Option<&str>) -> Value {
    match raw {
        Some(s) if !s.is_empty() => {
            let truncated = s.split(' ').next().unwrap_or(s);
            Value::String(truncated.to_string())
        }
        _ => Value::Null,
    }
}
