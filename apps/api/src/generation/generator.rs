//! Document Generation: drafts a tailored resume and cover letter.
//!
//! Flow: require inputs → truncate → build prompt → upstream call (plain text) →
//!       parse sections → response.
//!
//! When the upstream call fails the deterministic fallback draft is parsed in
//! its place, so a valid request always gets a complete result.

use serde::Serialize;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::{require_text, AppError};
use crate::generation::fallback::build_fallback;
use crate::generation::parser::{parse, ParsedGeneration};
use crate::generation::prompts::{GENERATION_PROMPT_TEMPLATE, GENERATION_SYSTEM};
use crate::llm_client::{ResponseFormat, TextGenerator};
use crate::models::analysis::ResultSource;
use crate::models::generation::{GenerationMetrics, GenerationResult};
use crate::text::normalizer::truncate;

/// Generation outcome returned to the HTTP layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOutcome {
    #[serde(flatten)]
    pub result: GenerationResult,
    pub metrics: GenerationMetrics,
    pub source: ResultSource,
}

/// Runs the generation path for one request.
///
/// Fails only with `AppError::Validation` when the job description or the
/// experience text is absent or blank.
pub async fn generate(
    generator: &dyn TextGenerator,
    max_chars: usize,
    job_description: Option<&str>,
    experience: Option<&str>,
) -> Result<GenerationOutcome, AppError> {
    let job_description = require_text(job_description, "jobDescription")?;
    let experience = require_text(experience, "experience")?;

    let span = info_span!("generate", request_id = %Uuid::new_v4());
    async move {
        let job_description = truncate(job_description, max_chars);
        let experience = truncate(experience, max_chars);

        info!(
            "Generating documents (jd {} chars, experience {} chars)",
            job_description.chars().count(),
            experience.chars().count()
        );

        let prompt = build_generation_prompt(&job_description, &experience);

        let (raw, source) = match generator
            .generate_text(&prompt, GENERATION_SYSTEM, ResponseFormat::Text)
            .await
        {
            Ok(raw) => {
                debug!("Raw generation response: {raw}");
                (raw, ResultSource::Upstream)
            }
            Err(e) => {
                warn!("Generation upstream call failed, using fallback draft: {e}");
                (
                    build_fallback(&job_description, &experience),
                    ResultSource::Fallback,
                )
            }
        };

        let ParsedGeneration { result, metrics } = parse(&raw);

        if source == ResultSource::Upstream && result.generated_resume.is_empty() {
            warn!("Upstream reply had no RESUME section");
        }

        info!(
            "Generation complete: ats={} interview={} suggestions={} source={:?}",
            metrics.ats_score,
            metrics.interview_chance,
            result.suggestions.len(),
            source
        );

        Ok(GenerationOutcome {
            result,
            metrics,
            source,
        })
    }
    .instrument(span)
    .await
}

fn build_generation_prompt(job_description: &str, experience: &str) -> String {
    GENERATION_PROMPT_TEMPLATE
        .replace("{experience}", experience)
        .replace("{job_description}", job_description)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;

    struct StubGenerator {
        reply: Option<String>,
        calls: Mutex<Vec<(String, ResponseFormat)>>,
    }

    impl StubGenerator {
        fn new(reply: Option<&str>) -> Self {
            Self {
                reply: reply.map(str::to_string),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate_text(
            &self,
            prompt: &str,
            _system: &str,
            format: ResponseFormat,
        ) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), format));
            self.reply.clone().ok_or(LlmError::MissingApiKey)
        }
    }

    #[tokio::test]
    async fn test_upstream_reply_is_parsed() {
        let generator = StubGenerator::new(Some(
            "=== RESUME ===\nJane Doe\n=== COVER LETTER ===\nDear team\n\
             === METRICS ===\nSCORE: 91\nCHANCE: 64%\n=== OPTIMIZATION TIPS ===\n- Add links",
        ));
        let outcome = generate(&generator, 6000, Some("Rust role"), Some("Wrote Rust"))
            .await
            .unwrap();

        assert_eq!(outcome.source, ResultSource::Upstream);
        assert_eq!(outcome.result.generated_resume, "Jane Doe");
        assert_eq!(outcome.result.generated_cover_letter, "Dear team");
        assert_eq!(outcome.result.suggestions, vec!["Add links"]);
        assert_eq!(outcome.metrics.ats_score, 91);
        assert_eq!(outcome.metrics.interview_chance, 64);
    }

    #[tokio::test]
    async fn test_failing_upstream_yields_parsed_fallback() {
        let generator = StubGenerator::new(None);
        let outcome = generate(
            &generator,
            6000,
            Some("Senior Python engineer with AWS"),
            Some("Ten years of backend work"),
        )
        .await
        .unwrap();

        assert_eq!(outcome.source, ResultSource::Fallback);
        assert!(outcome
            .result
            .generated_resume
            .contains("Senior Software Engineer"));
        assert!(!outcome.result.generated_cover_letter.is_empty());
        assert_eq!(outcome.metrics.ats_score, 85);
        assert_eq!(outcome.metrics.interview_chance, 78);
        assert_eq!(outcome.result.suggestions.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_inputs_are_rejected_before_upstream_call() {
        let generator = StubGenerator::new(Some("unused"));

        let missing_jd = generate(&generator, 6000, None, Some("experience")).await;
        assert!(matches!(missing_jd, Err(AppError::Validation(_))));

        let blank_experience = generate(&generator, 6000, Some("jd"), Some(" \t ")).await;
        assert!(matches!(blank_experience, Err(AppError::Validation(_))));

        assert!(generator.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_prompt_uses_plain_text_and_truncated_inputs() {
        let generator = StubGenerator::new(Some(""));
        let experience = format!("Shipped a compiler. {}", "y".repeat(300));
        let outcome = generate(&generator, 40, Some("Compiler engineer"), Some(&experience))
            .await
            .unwrap();

        let calls = generator.calls.lock().unwrap();
        let (prompt, format) = &calls[0];
        assert_eq!(*format, ResponseFormat::Text);
        assert!(prompt.contains("Compiler engineer"));
        assert!(prompt.contains("Shipped a compiler."));
        assert!(!prompt.contains(&"y".repeat(50)));

        // An empty reply parses to the defaults rather than the fallback.
        assert_eq!(outcome.source, ResultSource::Upstream);
        assert_eq!(outcome.metrics, GenerationMetrics::default());
    }

    #[test]
    fn test_outcome_serializes_flat_result() {
        let outcome = GenerationOutcome {
            result: GenerationResult {
                generated_resume: "R".to_string(),
                generated_cover_letter: "C".to_string(),
                suggestions: vec!["S".to_string()],
            },
            metrics: GenerationMetrics::default(),
            source: ResultSource::Upstream,
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["generatedResume"], "R");
        assert_eq!(value["generatedCoverLetter"], "C");
        assert_eq!(value["suggestions"][0], "S");
        assert_eq!(value["metrics"]["atsScore"], 85);
        assert_eq!(value["metrics"]["interviewChance"], 75);
        assert_eq!(value["source"], "upstream");
    }
}
