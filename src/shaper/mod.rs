// Response shaping: per-kind pure transformations from entity snapshots to
// the plain JSON mappings that form the external API contract. Field names
// and null/absence semantics here are wire-compatible contract; shapers
// never mutate the snapshot and never trigger a relation fetch.

pub mod ad;
pub mod city;
pub mod document;
pub mod order_item;
pub mod product;
pub mod role;
pub mod sourcing;

pub use ad::{ad_to_api_value, ads_to_api_values};
pub use city::{cities_to_api_values, city_to_api_value};
pub use document::{document_to_api_value, documents_to_api_values};
pub use order_item::{order_item_to_api_value, order_items_to_api_values};
pub use product::{
    product_to_api_value, product_variant_for_order_to_api_value, products_to_api_values,
};
pub use role::{role_to_api_value, roles_to_api_values};
pub use sourcing::{sourcing_to_api_value, sourcings_to_api_values};

use serde_json::Value;

use crate::assets::AssetResolver;

/// Stored-path to URL rule shared by the Document and Product shapers:
/// a non-null, non-empty path resolves under the storage root; anything
/// else is null, never an empty string.
pub(crate) fn storage_url_value(path: Option<&str>, assets: &AssetResolver) -> Value {
    match path {
        Some(p) if !p.is_empty() => Value::String(assets.storage_url(p)),
        _ => Value::Null,
    }
}
