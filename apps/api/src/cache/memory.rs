use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::cache::{CacheError, CacheGateway, CacheKind, SemanticKey};

struct Entry {
    value: Value,
    expires_at: DateTime<Utc>,
}

/// Process-local gateway for running without Redis/PostgreSQL.
#[derive(Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<(CacheKind, String), Entry>>,
}

#[async_trait]
impl CacheGateway for InMemoryCache {
    async fn get(&self, kind: CacheKind, key: &SemanticKey) -> Result<Option<Value>, CacheError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(&(kind, key.digest.clone()))
            .filter(|entry| entry.expires_at > Utc::now())
            .map(|entry| entry.value.clone()))
    }

    async fn put(
        &self,
        kind: CacheKind,
        key: &SemanticKey,
        value: &Value,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let ttl = chrono::Duration::from_std(ttl).map_err(|_| CacheError::InvalidTtl(ttl))?;
        let entry = Entry {
            value: value.clone(),
            expires_at: Utc::now() + ttl,
        };
        self.entries
            .write()
            .await
            .insert((kind, key.digest.clone()), entry);
        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64, CacheError> {
        let now = Utc::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        Ok((before - entries.len()) as u64)
    }
}
