//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::generator::{generate, GenerationOutcome};
use crate::state::AppState;

/// Request body for `POST /api/generate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub job_description: Option<String>,
    pub experience: Option<String>,
}

/// POST /api/generate
///
/// Drafts a resume and cover letter from a job description and the candidate's
/// free-form experience. Falls back to a template draft when the model is
/// unreachable.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerationOutcome>, AppError> {
    let Json(request) = payload?;

    let outcome = generate(
        state.generator.as_ref(),
        state.config.max_input_chars,
        request.job_description.as_deref(),
        request.experience.as_deref(),
    )
    .await?;

    Ok(Json(outcome))
}
