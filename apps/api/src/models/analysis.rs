use serde::{Deserialize, Serialize};

/// Score used when the model omits a metric or returns it with the wrong type.
pub const DEFAULT_SCORE: u8 = 50;

/// Summary used when the model omits `overall_feedback.summary`.
pub const DEFAULT_SUMMARY: &str = "Analysis completed successfully.";

/// Per-document analysis (resume or cover letter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 0 – 100, always clamped.
    pub ats_score: u8,
    /// 0 – 100, always clamped.
    pub interview_chance: u8,
    /// Keywords from the job description missing in the document.
    pub keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallFeedback {
    pub summary: String,
    pub improvement_areas: Vec<String>,
    pub strengths: Vec<String>,
}

/// The fixed-shape triple produced by the analysis validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub resume: AnalysisResult,
    pub cover_letter: AnalysisResult,
    pub overall_feedback: OverallFeedback,
}

/// Keyword-overlap ratios (0.0 – 1.0) of each document against the job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMatch {
    pub resume: f64,
    pub cover_letter: Option<f64>,
}

/// Which path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    /// Parsed from the upstream model's response.
    Upstream,
    /// Substituted locally because the upstream call failed or was unusable.
    Fallback,
}
