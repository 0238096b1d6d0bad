//! Axum route handlers for the Analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::analysis::analyzer::{analyze, AnalysisOutcome};
use crate::errors::AppError;
use crate::state::AppState;

/// Request body for `POST /api/analyze`. Fields are optional so an absent
/// field surfaces as a validation error instead of a body rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
    pub job_description: Option<String>,
}

/// POST /api/analyze
///
/// Scores a resume and optional cover letter against a job description.
/// Always returns a complete report; `source` tells whether defaults were used.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisOutcome>, AppError> {
    let Json(request) = payload?;

    let outcome = analyze(
        state.generator.as_ref(),
        state.config.max_input_chars,
        request.resume.as_deref(),
        request.cover_letter.as_deref(),
        request.job_description.as_deref(),
    )
    .await?;

    Ok(Json(outcome))
}
