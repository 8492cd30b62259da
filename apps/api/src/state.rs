use std::sync::Arc;

use crate::cache::CacheGateway;
use crate::config::Config;
use crate::extraction::extractor::EntityExtractor;
use crate::matching::job_matcher::JobMatcher;
use crate::scoring::resume_scorer::ResumeScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable result cache. Redis+PostgreSQL or in-memory, per `CACHE_BACKEND`.
    pub cache: Arc<dyn CacheGateway>,
    pub extractor: Arc<EntityExtractor>,
    pub scorer: Arc<ResumeScorer>,
    pub matcher: Arc<JobMatcher>,
    pub config: Config,
}
