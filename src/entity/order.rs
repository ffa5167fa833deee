use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::product::ProductSummary;

/// Line item on an order. Points at either a product or a product variant;
/// the foreign keys say which, and the matching lookup may still be absent
/// when the referenced row is gone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub product_id: Option<i64>,
    pub product_variant_id: Option<i64>,
    pub product: Option<ProductSummary>,
    pub variant: Option<OrderItemVariant>,
    pub price: Decimal,
    pub quantity: i64,
    pub updated_at: DateTime<Utc>,
}

/// Variant lookup attached to an order item, with its parent product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemVariant {
    pub name: String,
    pub product: Option<ProductSummary>,
}
