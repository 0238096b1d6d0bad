use serde::{Deserialize, Serialize};

/// ATS score reported when the model's response has no usable `SCORE:` line.
pub const DEFAULT_GENERATED_ATS_SCORE: u8 = 85;
/// Interview chance reported when the model's response has no usable `CHANCE:` line.
pub const DEFAULT_GENERATED_INTERVIEW_CHANCE: u8 = 75;

/// Draft documents produced for a job description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub generated_resume: String,
    pub generated_cover_letter: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetrics {
    pub ats_score: u8,
    pub interview_chance: u8,
}

impl Default for GenerationMetrics {
    fn default() -> Self {
        Self {
            ats_score: DEFAULT_GENERATED_ATS_SCORE,
            interview_chance: DEFAULT_GENERATED_INTERVIEW_CHANCE,
        }
    }
}
