use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entity::relation::Relation;

/// Sourcing request. The base attributes are opaque to the shaping layer and
/// pass through untouched; only the variants relation gets special handling,
/// and only when the caller pre-loaded it.
#[derive(Debug, Clone)]
pub struct Sourcing {
    pub attributes: Map<String, Value>,
    pub variants: Relation<Vec<SourcingVariant>>,
}

impl Sourcing {
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self {
            attributes,
            variants: Relation::NotLoaded,
        }
    }

    pub fn with_variants(mut self, variants: Vec<SourcingVariant>) -> Self {
        self.variants = Relation::Loaded(variants);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcingVariant {
    pub id: i64,
    pub variant_name: String,
    pub quantity: i64,
    pub product_variant_id: i64,
    pub sourcing_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
