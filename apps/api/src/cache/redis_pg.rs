//! Redis in front, PostgreSQL behind.
//!
//! Redis holds hot entries under `<kind>:<digest>` with a TTL. The
//! `cached_results` table keeps a durable copy with an explicit expiry so a
//! Redis flush or outage does not lose results.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use redis::AsyncCommands;
use serde_json::Value;
use sqlx::PgPool;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::cache::{CacheError, CacheGateway, CacheKind, SemanticKey};
use crate::models::cache::CachedDocumentRow;

pub struct RedisPgCache {
    redis: redis::Client,
    db: PgPool,
}

impl RedisPgCache {
    pub fn new(redis: redis::Client, db: PgPool) -> Self {
        Self { redis, db }
    }

    async fn redis_get(&self, kind: CacheKind, key: &SemanticKey) -> Result<Option<Value>, CacheError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(kind.redis_key(&key.digest)).await?;
        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn redis_put(
        &self,
        kind: CacheKind,
        key: &SemanticKey,
        value: &Value,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;
        let _: () = conn
            .set_ex(kind.redis_key(&key.digest), value.to_string(), ttl.as_secs())
            .await?;
        Ok(())
    }

    async fn durable_get(&self, kind: CacheKind, key: &SemanticKey) -> Result<Option<Value>, CacheError> {
        let row: Option<CachedDocumentRow> = sqlx::query_as(
            "SELECT * FROM cached_results WHERE kind = $1 AND cache_key = $2 AND expires_at > NOW()",
        )
        .bind(kind.as_str())
        .bind(&key.digest)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(|row| row.result))
    }

    async fn durable_put(
        &self,
        kind: CacheKind,
        key: &SemanticKey,
        value: &Value,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let expires_at =
            Utc::now() + chrono::Duration::from_std(ttl).map_err(|_| CacheError::InvalidTtl(ttl))?;

        sqlx::query(
            r#"
            INSERT INTO cached_results (id, kind, cache_key, input, result, expires_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (kind, cache_key) DO UPDATE
            SET input = EXCLUDED.input,
                result = EXCLUDED.result,
                created_at = NOW(),
                expires_at = EXCLUDED.expires_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(kind.as_str())
        .bind(&key.digest)
        .bind(&key.input)
        .bind(value)
        .bind(expires_at)
        .execute(&self.db)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl CacheGateway for RedisPgCache {
    async fn get(&self, kind: CacheKind, key: &SemanticKey) -> Result<Option<Value>, CacheError> {
        match self.redis_get(kind, key).await {
            Ok(Some(value)) => return Ok(Some(value)),
            Ok(None) => {}
            Err(e) => warn!(kind = kind.as_str(), error = %e, "Redis read failed, trying PostgreSQL"),
        }

        let value = self.durable_get(kind, key).await?;
        if value.is_some() {
            debug!(kind = kind.as_str(), key = %key.digest, "served from durable store");
        }
        Ok(value)
    }

    /// Writes both tiers. The PostgreSQL write still runs when Redis fails;
    /// the first error is returned.
    async fn put(
        &self,
        kind: CacheKind,
        key: &SemanticKey,
        value: &Value,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        if ttl.as_secs() == 0 {
            return Err(CacheError::InvalidTtl(ttl));
        }
        let hot = self.redis_put(kind, key, value, ttl).await;
        let durable = self.durable_put(kind, key, value, ttl).await;
        hot.and(durable)
    }

    async fn purge_expired(&self) -> Result<u64, CacheError> {
        let result = sqlx::query("DELETE FROM cached_results WHERE expires_at <= NOW()")
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected())
    }
}
