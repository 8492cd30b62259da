use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::extraction::vocabulary::DEFAULT_TOP_SKILLS;

/// Which gateway backs the result cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheBackend {
    /// Redis fast path with a PostgreSQL durable store.
    Redis {
        database_url: String,
        redis_url: String,
    },
    /// Process-local map. Nothing survives a restart.
    Memory,
}

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or a number does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub cache_backend: CacheBackend,
    pub cache_ttl: Duration,
    pub purge_interval: Duration,
    pub max_upload_bytes: usize,
    pub top_skills: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8000,
            rust_log: "info".to_string(),
            cache_backend: CacheBackend::Memory,
            cache_ttl: Duration::from_secs(24 * 60 * 60),
            purge_interval: Duration::from_secs(60 * 60),
            max_upload_bytes: 10 * 1024 * 1024,
            top_skills: DEFAULT_TOP_SKILLS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let backend = std::env::var("CACHE_BACKEND").unwrap_or_else(|_| "redis".to_string());
        let cache_backend = match backend.to_ascii_lowercase().as_str() {
            "redis" => CacheBackend::Redis {
                database_url: require_env("DATABASE_URL")?,
                redis_url: require_env("REDIS_URL")?,
            },
            "memory" => CacheBackend::Memory,
            other => bail!("CACHE_BACKEND must be 'redis' or 'memory', got '{other}'"),
        };

        let ttl_hours: u64 = env_or("CACHE_TTL_HOURS", 24)?;
        if ttl_hours == 0 {
            bail!("CACHE_TTL_HOURS must be at least 1");
        }
        let purge_secs: u64 = env_or("CACHE_PURGE_INTERVAL_SECS", defaults.purge_interval.as_secs())?;
        if purge_secs == 0 {
            bail!("CACHE_PURGE_INTERVAL_SECS must be at least 1");
        }

        Ok(Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            cache_backend,
            cache_ttl: Duration::from_secs(ttl_hours * 60 * 60),
            purge_interval: Duration::from_secs(purge_secs),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            top_skills: env_or("TOP_SKILLS", defaults.top_skills)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("{key} must be a valid number, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.cache_ttl, Duration::from_secs(86_400));
        assert_eq!(config.max_upload_bytes, 10_485_760);
        assert_eq!(config.top_skills, 5);
    }

    #[test]
    fn test_parse_value_trims() {
        let port: u16 = parse_value("PORT", " 9000 ").unwrap();
        assert_eq!(port, 9000);
    }

    #[test]
    fn test_parse_value_names_the_variable() {
        let err = parse_value::<u16>("PORT", "eighty").unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
