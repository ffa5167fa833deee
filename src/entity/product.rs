use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product as shown in the company back-office view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Relative path under the storage root; empty/absent means no thumbnail.
    pub thumbnail_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Minimal product projection used when another entity links to a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
}

/// Variant row as surfaced in the order workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: i64,
    pub variant_name: String,
    pub quantity: i64,
}
