use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Input of the wrong shape. Rendered as the analysis failure envelope.
    #[error("Analysis failed: {}", .0.details)]
    Analysis(AnalysisFailure),
}

/// Body returned when a request value cannot be read as the expected record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisFailure {
    pub error: String,
    pub details: String,
    pub input_type: String,
    pub input_keys: Option<Vec<String>>,
}

impl AnalysisFailure {
    pub fn new(error: &str, details: impl ToString, input: &Value) -> Self {
        Self {
            error: error.to_string(),
            details: details.to_string(),
            input_type: json_type_name(input).to_string(),
            input_keys: input
                .as_object()
                .map(|map| map.keys().cloned().collect()),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            AppError::Analysis(failure) => {
                tracing::warn!(
                    input_type = %failure.input_type,
                    details = %failure.details,
                    "analysis failed"
                );
                return (StatusCode::UNPROCESSABLE_ENTITY, Json(failure)).into_response();
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
