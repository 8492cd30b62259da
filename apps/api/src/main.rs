mod cache;
mod config;
mod db;
mod errors;
mod extraction;
mod matching;
mod models;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cache::memory::InMemoryCache;
use crate::cache::redis_pg::RedisPgCache;
use crate::cache::{spawn_purge_task, CacheGateway};
use crate::config::{CacheBackend, Config};
use crate::db::create_pool;
use crate::extraction::extractor::EntityExtractor;
use crate::extraction::vocabulary::ExtractionVocabulary;
use crate::matching::job_matcher::JobMatcher;
use crate::routes::build_router;
use crate::scoring::resume_scorer::ResumeScorer;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    let cache = build_cache(&config).await?;
    spawn_purge_task(cache.clone(), config.purge_interval);
    info!(
        "Result cache ready (ttl {}h, purge every {}s)",
        config.cache_ttl.as_secs() / 3600,
        config.purge_interval.as_secs()
    );

    let vocabulary = ExtractionVocabulary::default().with_top_skills(config.top_skills);
    let extractor = EntityExtractor::new(vocabulary)?;

    // Build app state
    let state = AppState {
        cache,
        extractor: Arc::new(extractor),
        scorer: Arc::new(ResumeScorer::default()),
        matcher: Arc::new(JobMatcher::default()),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Connects the cache backend selected by `CACHE_BACKEND`.
async fn build_cache(config: &Config) -> Result<Arc<dyn CacheGateway>> {
    match &config.cache_backend {
        CacheBackend::Redis {
            database_url,
            redis_url,
        } => {
            let db = create_pool(database_url).await?;
            let redis = redis::Client::open(redis_url.as_str())?;
            info!("Redis client initialized");
            Ok(Arc::new(RedisPgCache::new(redis, db)))
        }
        CacheBackend::Memory => {
            info!("Using in-memory result cache");
            Ok(Arc::new(InMemoryCache::default()))
        }
    }
}
