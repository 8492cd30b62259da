pub mod health;
pub mod resume;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/upload/resume", post(resume::handle_upload))
        .route("/analyze/resume", post(resume::handle_analyze))
        .route("/match/resume", post(resume::handle_match))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
