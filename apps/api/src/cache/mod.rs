//! Cache/Store Gateway — memoizes analysis and match results by content hash.
//!
//! The gateway is an optimization, never a correctness dependency: lookup
//! failures read as misses, write failures are logged and dropped.
//!
//! `AppState` holds an `Arc<dyn CacheGateway>`, picked at startup via config.

pub mod key;
pub mod memory;
pub mod redis_pg;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub use key::SemanticKey;

/// What a cached value is. Doubles as the Redis key prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKind {
    ResumeAnalysis,
    ResumeMatch,
}

impl CacheKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CacheKind::ResumeAnalysis => "resume_analysis",
            CacheKind::ResumeMatch => "resume_match",
        }
    }

    pub fn redis_key(self, digest: &str) -> String {
        format!("{}:{}", self.as_str(), digest)
    }
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TTL out of range: {0:?}")]
    InvalidTtl(Duration),
}

#[async_trait]
pub trait CacheGateway: Send + Sync {
    /// Unexpired value for the key, if any.
    async fn get(&self, kind: CacheKind, key: &SemanticKey) -> Result<Option<Value>, CacheError>;

    async fn put(
        &self,
        kind: CacheKind,
        key: &SemanticKey,
        value: &Value,
        ttl: Duration,
    ) -> Result<(), CacheError>;

    /// Drops expired durable entries. Returns how many were removed.
    async fn purge_expired(&self) -> Result<u64, CacheError>;
}

/// Cached value for `key`, or `None` on a miss, a gateway failure, or a
/// value that no longer deserializes.
pub async fn lookup<T: DeserializeOwned>(
    gateway: &dyn CacheGateway,
    kind: CacheKind,
    key: &SemanticKey,
) -> Option<T> {
    match gateway.get(kind, key).await {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(hit) => {
                debug!(kind = kind.as_str(), key = %key.digest, "cache hit");
                Some(hit)
            }
            Err(e) => {
                warn!(kind = kind.as_str(), key = %key.digest, error = %e, "discarding undecodable cache entry");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!(kind = kind.as_str(), key = %key.digest, error = %e, "cache lookup failed, recomputing");
            None
        }
    }
}

/// Writes `result` through to the gateway. Failures are logged only.
pub async fn write_through<T: Serialize>(
    gateway: &dyn CacheGateway,
    kind: CacheKind,
    key: &SemanticKey,
    result: &T,
    ttl: Duration,
) {
    let value = match serde_json::to_value(result) {
        Ok(value) => value,
        Err(e) => {
            warn!(kind = kind.as_str(), error = %e, "result not cacheable");
            return;
        }
    };
    if let Err(e) = gateway.put(kind, key, &value, ttl).await {
        warn!(kind = kind.as_str(), key = %key.digest, error = %e, "cache write failed");
    }
}

/// Runs `purge_expired` every `every` until the runtime shuts down.
pub fn spawn_purge_task(gateway: Arc<dyn CacheGateway>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match gateway.purge_expired().await {
                Ok(0) => {}
                Ok(removed) => info!(removed, "purged expired cache entries"),
                Err(e) => warn!(error = %e, "cache purge failed"),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Gateway whose every call fails.
    struct DownGateway;

    #[async_trait]
    impl CacheGateway for DownGateway {
        async fn get(&self, _: CacheKind, _: &SemanticKey) -> Result<Option<Value>, CacheError> {
            Err(CacheError::InvalidTtl(Duration::ZERO))
        }

        async fn put(
            &self,
            _: CacheKind,
            _: &SemanticKey,
            _: &Value,
            _: Duration,
        ) -> Result<(), CacheError> {
            Err(CacheError::InvalidTtl(Duration::ZERO))
        }

        async fn purge_expired(&self) -> Result<u64, CacheError> {
            Err(CacheError::InvalidTtl(Duration::ZERO))
        }
    }

    #[test]
    fn test_redis_key_prefix() {
        assert_eq!(CacheKind::ResumeAnalysis.redis_key("abc"), "resume_analysis:abc");
        assert_eq!(CacheKind::ResumeMatch.redis_key("abc"), "resume_match:abc");
    }

    #[tokio::test]
    async fn test_lookup_treats_failure_as_miss() {
        let key = SemanticKey::derive(&json!({}));
        let hit: Option<Value> = lookup(&DownGateway, CacheKind::ResumeAnalysis, &key).await;
        assert!(hit.is_none());
    }

    #[tokio::test]
    async fn test_write_through_swallows_failure() {
        let key = SemanticKey::derive(&json!({}));
        write_through(
            &DownGateway,
            CacheKind::ResumeMatch,
            &key,
            &json!({"ok": true}),
            Duration::from_secs(60),
        )
        .await;
    }

    #[tokio::test]
    async fn test_lookup_discards_wrong_shape() {
        let gateway = memory::InMemoryCache::default();
        let key = SemanticKey::derive(&json!({}));
        gateway
            .put(CacheKind::ResumeAnalysis, &key, &json!("not a number"), Duration::from_secs(60))
            .await
            .unwrap();
        let hit: Option<u32> = lookup(&gateway, CacheKind::ResumeAnalysis, &key).await;
        assert!(hit.is_none());
    }
}
