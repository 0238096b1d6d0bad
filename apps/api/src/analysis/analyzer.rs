//! Document Analysis: scores a resume (and optional cover letter) against a job description.
//!
//! Flow: require inputs → truncate → build prompt → upstream call (JSON mode) →
//!       validate → keyword overlap → response.
//!
//! Upstream and malformed-response failures are absorbed here: the caller always
//! gets a complete report, marked with `ResultSource::Fallback` when defaults were used.

use serde::Serialize;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::analysis::validator::{default_report, validate, FallbackReason};
use crate::errors::{require_text, AppError};
use crate::llm_client::prompts::{
    JSON_ONLY_INSTRUCTION, NO_COVER_LETTER, SCORE_RANGE_INSTRUCTION,
};
use crate::llm_client::{ResponseFormat, TextGenerator};
use crate::models::analysis::{AnalysisReport, KeywordMatch, ResultSource};
use crate::text::keywords::match_score;
use crate::text::normalizer::{truncate, truncate_opt};

/// Analysis outcome returned to the HTTP layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    #[serde(flatten)]
    pub report: AnalysisReport,
    pub keyword_match: KeywordMatch,
    pub source: ResultSource,
}

/// Runs the analysis path for one request.
///
/// Fails only with `AppError::Validation` when the resume or job description is
/// absent or blank. A blank cover letter is treated as absent.
pub async fn analyze(
    generator: &dyn TextGenerator,
    max_chars: usize,
    resume_text: Option<&str>,
    cover_letter_text: Option<&str>,
    job_description: Option<&str>,
) -> Result<AnalysisOutcome, AppError> {
    let resume_text = require_text(resume_text, "resume")?;
    let job_description = require_text(job_description, "jobDescription")?;
    let cover_letter_text = cover_letter_text
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let span = info_span!("analyze", request_id = %Uuid::new_v4());
    async move {
        let resume_text = truncate(resume_text, max_chars);
        let job_description = truncate(job_description, max_chars);
        let cover_letter_text = truncate_opt(cover_letter_text, max_chars);

        info!(
            "Analyzing resume ({} chars), cover letter: {}",
            resume_text.chars().count(),
            cover_letter_text.is_some()
        );

        let prompt = build_analysis_prompt(
            &resume_text,
            cover_letter_text.as_deref(),
            &job_description,
        );

        let (report, source) = match generator
            .generate_text(&prompt, ANALYSIS_SYSTEM, ResponseFormat::JsonObject)
            .await
        {
            Ok(raw) => {
                let validated = validate(&raw);
                (validated.report, validated.source)
            }
            Err(e) => {
                warn!("Analysis upstream call failed, using defaults: {e}");
                (
                    default_report(FallbackReason::UpstreamUnavailable),
                    ResultSource::Fallback,
                )
            }
        };

        let keyword_match = KeywordMatch {
            resume: match_score(&resume_text, &job_description),
            cover_letter: cover_letter_text
                .as_deref()
                .map(|t| match_score(t, &job_description)),
        };

        info!(
            "Analysis complete: resume ats={} interview={} source={:?}",
            report.resume.ats_score, report.resume.interview_chance, source
        );

        Ok(AnalysisOutcome {
            report,
            keyword_match,
            source,
        })
    }
    .instrument(span)
    .await
}

/// Fills the analysis template with the (already truncated) inputs.
fn build_analysis_prompt(
    resume_text: &str,
    cover_letter_text: Option<&str>,
    job_description: &str,
) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{json_only_instruction}", JSON_ONLY_INSTRUCTION)
        .replace("{score_range_instruction}", SCORE_RANGE_INSTRUCTION)
        .replace("{cover_letter_text}", cover_letter_text.unwrap_or(NO_COVER_LETTER))
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}
