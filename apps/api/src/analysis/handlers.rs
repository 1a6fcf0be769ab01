//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::models::AnalysisOutcome;
use crate::analysis::service::Analyzer;
use crate::analysis::AnalysisError;
use crate::documents::extract_text;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub content: String,
    /// Overrides the configured model API key for this request only.
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(flatten)]
    pub outcome: AnalysisOutcome,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

async fn run_analysis(
    state: &AppState,
    content: &str,
    api_key: Option<&str>,
) -> Result<AnalysisOutcome, AppError> {
    if content.trim().is_empty() {
        return Err(AnalysisError::EmptyInput.into());
    }
    if state.is_demo() {
        return Ok(Analyzer::demo_outcome());
    }
    Ok(state
        .analyzer_for(api_key)
        .analyze_with_fallback(content)
        .await?)
}

/// POST /api/v1/analyze
///
/// Analyzes raw resume text. Falls back to the canned analysis (with a warning)
/// when the model call or normalization fails and fallback is enabled.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let outcome = run_analysis(&state, &request.content, request.api_key.as_deref()).await?;
    Ok(Json(AnalyzeResponse {
        filename: None,
        outcome,
    }))
}

/// POST /api/v1/analyze/upload
///
/// Multipart upload: a `file` field and an optional `api_key` text field.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut file = None;
    let mut api_key = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("resume").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                file = Some((filename, content_type, bytes));
            }
            Some("api_key") => {
                api_key = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::Validation(format!("Invalid api_key field: {e}")))?,
                );
            }
            _ => {}
        }
    }

    let (filename, content_type, bytes) =
        file.ok_or_else(|| AppError::Validation("No resume file uploaded".to_string()))?;
    let content = extract_text(&filename, content_type.as_deref(), &bytes)?;

    let outcome = run_analysis(&state, &content, api_key.as_deref()).await?;
    Ok(Json(AnalyzeResponse {
        filename: Some(filename),
        outcome,
    }))
}

/// GET /api/v1/analyze/sample
///
/// Returns the canned analysis without calling the model.
pub async fn handle_sample() -> Json<AnalysisOutcome> {
    Json(Analyzer::demo_outcome())
}
