use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::cache::{self, CacheKind, SemanticKey};
use crate::errors::{AnalysisFailure, AppError};
use crate::extraction::pdf::read_pdf_text;
use crate::models::job::JobRequirements;
use crate::models::report::{MatchReport, ScoreReport};
use crate::models::resume::StructuredResume;
use crate::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub resume_info: StructuredResume,
}

#[derive(Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub resume_info: Value,
    #[serde(default)]
    pub job_description: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResponse {
    pub match_result: MatchReport,
}

/// POST /upload/resume
/// Multipart upload with a `file` field holding a PDF.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("resume.pdf").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;

        info!(filename = %filename, bytes = bytes.len(), "resume uploaded");
        let text = read_pdf_text(bytes).await;
        let resume_info = state.extractor.extract(&text);
        return Ok(Json(UploadResponse {
            filename,
            resume_info,
        }));
    }

    Err(AppError::Validation(
        "Multipart field 'file' is required".to_string(),
    ))
}

/// POST /analyze/resume
/// Body is a structured résumé or raw résumé text.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(input): Json<Value>,
) -> Result<Json<ScoreReport>, AppError> {
    let key = SemanticKey::for_analysis(&input);
    if let Some(report) =
        cache::lookup::<ScoreReport>(state.cache.as_ref(), CacheKind::ResumeAnalysis, &key).await
    {
        return Ok(Json(report));
    }

    let resume = resume_from_value(&state, &input)?;
    let report = state.scorer.score(&resume);
    info!(score = report.comprehensive_score, "resume analyzed");

    cache::write_through(
        state.cache.as_ref(),
        CacheKind::ResumeAnalysis,
        &key,
        &report,
        state.config.cache_ttl,
    )
    .await;
    Ok(Json(report))
}

/// POST /match/resume
pub async fn handle_match(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let key = SemanticKey::for_match(&req.resume_info, &req.job_description);
    if let Some(cached) =
        cache::lookup::<MatchResponse>(state.cache.as_ref(), CacheKind::ResumeMatch, &key).await
    {
        return Ok(Json(cached));
    }

    let resume = resume_from_value(&state, &req.resume_info)?;
    let job = job_from_value(&req.job_description)?;
    let match_result = state.matcher.match_resume(&resume, &job);
    info!(
        score = match_result.comprehensive_match_score,
        required_skills = job.required_skills.len(),
        "resume matched"
    );

    let response = MatchResponse { match_result };
    cache::write_through(
        state.cache.as_ref(),
        CacheKind::ResumeMatch,
        &key,
        &response,
        state.config.cache_ttl,
    )
    .await;
    Ok(Json(response))
}

/// Accepts a record (possibly partial) or raw text.
fn resume_from_value(state: &AppState, input: &Value) -> Result<StructuredResume, AppError> {
    if !(input.is_object() || input.is_string()) {
        return Err(AppError::Analysis(AnalysisFailure::new(
            "Resume analysis failed",
            "expected a resume object or resume text",
            input,
        )));
    }
    state.extractor.extract_value(input).map_err(|e| {
        AppError::Analysis(AnalysisFailure::new("Resume analysis failed", e, input))
    })
}

/// A string becomes the description of an otherwise empty posting; null is
/// an empty posting.
fn job_from_value(input: &Value) -> Result<JobRequirements, AppError> {
    match input {
        Value::String(description) => Ok(JobRequirements::from_description(description.as_str())),
        Value::Null => Ok(JobRequirements::default()),
        Value::Object(_) => JobRequirements::deserialize(input).map_err(|e| {
            AppError::Analysis(AnalysisFailure::new("Job matching failed", e, input))
        }),
        other => Err(AppError::Analysis(AnalysisFailure::new(
            "Job matching failed",
            "expected a job object or job description text",
            other,
        ))),
    }
}
