use serde::{Deserialize, Serialize};

/// Role row. `name` is a snake_case token; the human-readable label is
/// derived at shaping time and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
}
