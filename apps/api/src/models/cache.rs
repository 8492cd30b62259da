use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Durable copy of a cached analysis or match result.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CachedDocumentRow {
    pub id: Uuid,
    pub kind: String,
    pub cache_key: String,
    pub input: Value,
    pub result: Value,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
