//! Analysis Result Validator: turns the model's JSON-ish reply into a fixed-shape report.
//!
//! Every field is read through a typed accessor with its own default, so a partially
//! valid reply still produces a complete report:
//!
//! | field path                                        | default                              |
//! |---------------------------------------------------|--------------------------------------|
//! | `{resume,cover_letter}_analysis.metrics.ats_score`        | 50                           |
//! | `{resume,cover_letter}_analysis.metrics.interview_chance` | 50                           |
//! | `{resume,cover_letter}_analysis.missing_keywords`         | `[]`                         |
//! | `{resume,cover_letter}_analysis.suggestions`              | `[]`                         |
//! | `overall_feedback.summary`                        | `"Analysis completed successfully."` |
//! | `overall_feedback.improvement_areas`              | `[]`                                 |
//! | `overall_feedback.strengths`                      | `[]`                                 |
//!
//! Scores are numbers (integers or floats, rounded) clamped to 0 – 100. Any other
//! JSON type falls back to the default. List fields keep only their string elements.

use serde_json::Value;
use tracing::{debug, warn};

use crate::llm_client::{strip_json_fences, LlmError};
use crate::models::analysis::{
    AnalysisReport, AnalysisResult, OverallFeedback, ResultSource, DEFAULT_SCORE,
    DEFAULT_SUMMARY,
};

const RESUME_ANALYSIS: &str = "resume_analysis";
const COVER_LETTER_ANALYSIS: &str = "cover_letter_analysis";
const OVERALL_FEEDBACK: &str = "overall_feedback";

/// Why the default report was substituted for a real one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The model replied, but not with decodable JSON.
    MalformedResponse,
    /// The upstream call itself failed.
    UpstreamUnavailable,
}

impl FallbackReason {
    fn summary(self) -> &'static str {
        match self {
            FallbackReason::MalformedResponse => {
                "Analysis completed with default values due to parsing error."
            }
            FallbackReason::UpstreamUnavailable => {
                "Analysis completed with default values because the analysis service was unavailable."
            }
        }
    }
}

/// A validated report and whether it came from the reply or from defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    pub report: AnalysisReport,
    pub source: ResultSource,
}

/// Validates a raw model reply. Never fails: undecodable input yields [`default_report`].
pub fn validate(raw_text: &str) -> Validated {
    match try_extract(raw_text) {
        Ok(report) => Validated {
            report,
            source: ResultSource::Upstream,
        },
        Err(e) => {
            warn!("Analysis response is not valid JSON, using defaults: {e}");
            debug!("Raw analysis response: {raw_text}");
            Validated {
                report: default_report(FallbackReason::MalformedResponse),
                source: ResultSource::Fallback,
            }
        }
    }
}

/// Decodes `raw_text` and extracts the report field by field.
///
/// Fails only when the text is not JSON at all (`LlmError::Parse`); structural
/// problems inside valid JSON are absorbed by per-field defaults.
fn try_extract(raw_text: &str) -> Result<AnalysisReport, LlmError> {
    let root: Value = serde_json::from_str(strip_json_fences(raw_text))?;
    Ok(extract_report(&root))
}

/// Placeholder report used when no usable analysis is available.
pub fn default_report(reason: FallbackReason) -> AnalysisReport {
    AnalysisReport {
        resume: AnalysisResult {
            ats_score: DEFAULT_SCORE,
            interview_chance: DEFAULT_SCORE,
            keywords: owned(&["skill1", "skill2"]),
            suggestions: owned(&[
                "Add more quantifiable achievements",
                "Include relevant keywords from job description",
            ]),
        },
        cover_letter: AnalysisResult {
            ats_score: DEFAULT_SCORE,
            interview_chance: DEFAULT_SCORE,
            keywords: owned(&["keyword1", "keyword2"]),
            suggestions: owned(&["Personalize the letter more", "Add specific examples"]),
        },
        overall_feedback: OverallFeedback {
            summary: reason.summary().to_string(),
            improvement_areas: owned(&[
                "Add more specific achievements",
                "Include more relevant keywords",
            ]),
            strengths: owned(&["Basic structure is good", "Contains relevant information"]),
        },
    }
}

fn extract_report(root: &Value) -> AnalysisReport {
    AnalysisReport {
        resume: document_analysis(root, RESUME_ANALYSIS),
        cover_letter: document_analysis(root, COVER_LETTER_ANALYSIS),
        overall_feedback: OverallFeedback {
            summary: text_at(root, &[OVERALL_FEEDBACK, "summary"], DEFAULT_SUMMARY),
            improvement_areas: strings_at(root, &[OVERALL_FEEDBACK, "improvement_areas"]),
            strengths: strings_at(root, &[OVERALL_FEEDBACK, "strengths"]),
        },
    }
}

fn document_analysis(root: &Value, key: &str) -> AnalysisResult {
    AnalysisResult {
        ats_score: score_at(root, &[key, "metrics", "ats_score"]),
        interview_chance: score_at(root, &[key, "metrics", "interview_chance"]),
        keywords: strings_at(root, &[key, "missing_keywords"]),
        suggestions: strings_at(root, &[key, "suggestions"]),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Typed accessors
// ────────────────────────────────────────────────────────────────────────────

/// Walks object keys; any missing key or non-object node yields `None`.
fn lookup<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, key| node.get(*key))
}

fn score_at(root: &Value, path: &[&str]) -> u8 {
    lookup(root, path)
        .and_then(Value::as_f64)
        .map(clamp_score)
        .unwrap_or(DEFAULT_SCORE)
}

fn strings_at(root: &Value, path: &[&str]) -> Vec<String> {
    lookup(root, path)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn text_at(root: &Value, path: &[&str], default: &str) -> String {
    lookup(root, path)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn clamp_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESPONSE: &str = r#"{
        "resume_analysis": {
            "missing_keywords": ["Kubernetes", "Terraform"],
            "suggestions": ["Quantify impact", "Mention AWS certifications"],
            "metrics": {"interview_chance": 62, "ats_score": 71}
        },
        "cover_letter_analysis": {
            "missing_keywords": ["leadership"],
            "suggestions": ["Open with a hook"],
            "metrics": {"interview_chance": 55, "ats_score": 48}
        },
        "overall_feedback": {
            "summary": "Solid backend profile with cloud gaps.",
            "improvement_areas": ["Cloud infrastructure"],
            "strengths": ["Python depth", "Clear structure"]
        }
    }"#;

    #[test]
    fn test_full_response_extracts_every_field() {
        let validated = validate(FULL_RESPONSE);
        assert_eq!(validated.source, ResultSource::Upstream);
        let report = validated.report;

        assert_eq!(report.resume.ats_score, 71);
        assert_eq!(report.resume.interview_chance, 62);
        assert_eq!(report.resume.keywords, vec!["Kubernetes", "Terraform"]);
        assert_eq!(report.resume.suggestions.len(), 2);

        assert_eq!(report.cover_letter.ats_score, 48);
        assert_eq!(report.cover_letter.interview_chance, 55);
        assert_eq!(report.cover_letter.keywords, vec!["leadership"]);

        assert_eq!(
            report.overall_feedback.summary,
            "Solid backend profile with cloud gaps."
        );
        assert_eq!(report.overall_feedback.improvement_areas, vec!["Cloud infrastructure"]);
        assert_eq!(report.overall_feedback.strengths.len(), 2);
    }

    #[test]
    fn test_not_json_returns_default_report() {
        let validated = validate("not json");
        assert_eq!(validated.source, ResultSource::Fallback);
        let report = validated.report;
        assert_eq!(report, default_report(FallbackReason::MalformedResponse));
        assert_eq!(report.resume.ats_score, 50);
        assert_eq!(report.resume.keywords, vec!["skill1", "skill2"]);
        assert_eq!(report.cover_letter.keywords, vec!["keyword1", "keyword2"]);
        assert!(report.overall_feedback.summary.contains("parsing error"));
    }

    #[test]
    fn test_try_extract_reports_malformed_json() {
        let result = try_extract("{\"resume_analysis\": ");
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }

    #[test]
    fn test_out_of_range_score_is_clamped() {
        let report = validate(r#"{"resume_analysis":{"metrics":{"ats_score":150}}}"#).report;
        assert_eq!(report.resume.ats_score, 100);
        // Everything else falls back field by field.
        assert_eq!(report.resume.interview_chance, 50);
        assert!(report.resume.keywords.is_empty());
        assert!(report.resume.suggestions.is_empty());
        assert_eq!(report.cover_letter.ats_score, 50);
        assert_eq!(report.overall_feedback.summary, DEFAULT_SUMMARY);
        assert!(report.overall_feedback.strengths.is_empty());
    }

    #[test]
    fn test_negative_score_is_clamped_to_zero() {
        let report =
            validate(r#"{"cover_letter_analysis":{"metrics":{"interview_chance":-5}}}"#).report;
        assert_eq!(report.cover_letter.interview_chance, 0);
    }

    #[test]
    fn test_string_score_falls_back_to_default() {
        let report = validate(r#"{"resume_analysis":{"metrics":{"ats_score":"80"}}}"#).report;
        assert_eq!(report.resume.ats_score, 50);
    }

    #[test]
    fn test_float_score_is_rounded() {
        let report = validate(r#"{"resume_analysis":{"metrics":{"ats_score":72.6}}}"#).report;
        assert_eq!(report.resume.ats_score, 73);
    }

    #[test]
    fn test_wrong_intermediate_types_fall_back() {
        let report = validate(
            r#"{"resume_analysis": "oops", "cover_letter_analysis": {"metrics": [1, 2]},
                "overall_feedback": 42}"#,
        )
        .report;
        assert_eq!(report.resume.ats_score, 50);
        assert!(report.resume.keywords.is_empty());
        assert_eq!(report.cover_letter.interview_chance, 50);
        assert_eq!(report.overall_feedback.summary, DEFAULT_SUMMARY);
    }

    #[test]
    fn test_list_fields_keep_only_strings() {
        let report = validate(
            r#"{"resume_analysis": {"missing_keywords": ["Go", 7, null, "Rust"],
                                    "suggestions": "not a list"}}"#,
        )
        .report;
        assert_eq!(report.resume.keywords, vec!["Go", "Rust"]);
        assert!(report.resume.suggestions.is_empty());
    }

    #[test]
    fn test_non_object_json_yields_field_defaults() {
        let report = validate("[1, 2, 3]").report;
        assert_eq!(report.resume.ats_score, 50);
        assert!(report.resume.keywords.is_empty());
        assert_eq!(report.overall_feedback.summary, DEFAULT_SUMMARY);
    }

    #[test]
    fn test_fenced_json_is_accepted() {
        let raw = "```json\n{\"resume_analysis\":{\"metrics\":{\"ats_score\":90}}}\n```";
        assert_eq!(validate(raw).report.resume.ats_score, 90);
    }

    #[test]
    fn test_upstream_fallback_summary_differs() {
        let report = default_report(FallbackReason::UpstreamUnavailable);
        assert!(report.overall_feedback.summary.contains("unavailable"));
        assert_eq!(report.resume.ats_score, 50);
        assert_eq!(report.cover_letter.interview_chance, 50);
    }

    #[test]
    fn test_lookup_walks_nested_objects() {
        let root: Value = serde_json::json!({"a": {"b": {"c": 1}}});
        assert_eq!(lookup(&root, &["a", "b", "c"]), Some(&Value::from(1)));
        assert_eq!(lookup(&root, &["a", "x", "c"]), None);
        assert_eq!(lookup(&root, &[]), Some(&root));
    }
}
