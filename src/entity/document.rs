use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uploaded document metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub thumbnail_path: Option<String>,
    pub file_path: Option<String>,
    pub doc_type: String,
    pub size: i64,
    pub extension: String,
    pub mime_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
