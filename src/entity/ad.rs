use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::product::ProductSummary;

/// Ad campaign row as tracked by the back office.
///
/// `spent_in` is kept in its raw stored form, a date that may carry trailing
/// text after a space; the shaper truncates it on the way out. `leads` is
/// the stored name for what the API exposes as `results`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ad {
    pub id: i64,
    pub user_id: i64,
    pub product: ProductSummary,
    pub spend: Decimal,
    pub spent_in: Option<String>,
    pub leads: i64,
    pub platform: String,
    pub created_at: DateTime<Utc>,
}
