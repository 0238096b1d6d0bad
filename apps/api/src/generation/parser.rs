//! Generation Response Parser: splits the model's sectioned plain-text reply.
//!
//! Expected shape (sections may be missing, repeated, or out of order):
//!
//! ```text
//! === RESUME ===
//! ...
//! === COVER LETTER ===
//! ...
//! === METRICS ===
//! SCORE: 87
//! CHANCE: 70%
//! === OPTIMIZATION TIPS ===
//! - Add a certifications section
//! ```
//!
//! Parsing is a finite-state machine: `step` is a pure transition from
//! (section, line) to (next section, emitted item), and `parse` folds the
//! emitted items into the result. It never fails.

use crate::models::generation::{GenerationMetrics, GenerationResult};

/// Parser state: the section the current line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Before any marker, or under an unrecognized marker. Lines are discarded.
    None,
    Resume,
    CoverLetter,
    Metrics,
    Tips,
}

impl Section {
    /// Maps a marker label (`RESUME`, `COVER LETTER`, ...) to a section.
    /// Unknown labels map to `Section::None`.
    pub fn from_label(label: &str) -> Self {
        const LABELS: [(&str, Section); 4] = [
            ("RESUME", Section::Resume),
            ("COVER LETTER", Section::CoverLetter),
            ("METRICS", Section::Metrics),
            ("OPTIMIZATION TIPS", Section::Tips),
        ];
        LABELS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(label))
            .map(|(_, section)| *section)
            .unwrap_or(Section::None)
    }
}

/// What a single line contributes to the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emit<'a> {
    Nothing,
    ResumeLine(&'a str),
    CoverLetterLine(&'a str),
    AtsScore(u8),
    InterviewChance(u8),
    Suggestion(&'a str),
}

/// Parsed generation reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedGeneration {
    pub result: GenerationResult,
    pub metrics: GenerationMetrics,
}

/// Pure transition function of the section state machine.
pub fn step(state: Section, raw_line: &str) -> (Section, Emit<'_>) {
    let line = raw_line.trim();
    if line.is_empty() {
        return (state, Emit::Nothing);
    }

    if let Some(label) = marker_label(line) {
        return (Section::from_label(label), Emit::Nothing);
    }

    let emit = match state {
        Section::None => Emit::Nothing,
        Section::Resume => Emit::ResumeLine(line),
        Section::CoverLetter => Emit::CoverLetterLine(line),
        Section::Metrics => {
            if let Some(value) = line.strip_prefix("SCORE:") {
                parse_metric(value).map_or(Emit::Nothing, Emit::AtsScore)
            } else if let Some(value) = line.strip_prefix("CHANCE:") {
                parse_metric(value).map_or(Emit::Nothing, Emit::InterviewChance)
            } else {
                Emit::Nothing
            }
        }
        Section::Tips => bullet_text(line).map_or(Emit::Nothing, Emit::Suggestion),
    };

    (state, emit)
}

/// Parses a sectioned generation reply into documents, metrics and tips.
///
/// Missing sections leave empty documents and the default metrics (85 / 75).
pub fn parse(raw_text: &str) -> ParsedGeneration {
    let mut resume = String::new();
    let mut cover_letter = String::new();
    let mut suggestions = Vec::new();
    let mut metrics = GenerationMetrics::default();

    let mut state = Section::None;
    for raw_line in raw_text.lines() {
        let (next, emit) = step(state, raw_line);
        state = next;

        match emit {
            Emit::Nothing => {}
            Emit::ResumeLine(line) => push_line(&mut resume, line),
            Emit::CoverLetterLine(line) => push_line(&mut cover_letter, line),
            Emit::AtsScore(score) => metrics.ats_score = score,
            Emit::InterviewChance(chance) => metrics.interview_chance = chance,
            Emit::Suggestion(text) => suggestions.push(text.to_string()),
        }
    }

    ParsedGeneration {
        result: GenerationResult {
            generated_resume: resume.trim().to_string(),
            generated_cover_letter: cover_letter.trim().to_string(),
            suggestions,
        },
        metrics,
    }
}

/// Returns the label of a `=== LABEL ===` marker line (already trimmed).
fn marker_label(line: &str) -> Option<&str> {
    if line.starts_with("=== ") && line.ends_with(" ===") {
        Some(line.trim_matches(|c: char| c == '=' || c == ' ').trim())
    } else {
        None
    }
}

/// Parses `85`, ` [85] `, `85%`, `[85%]` as an integer clamped to 0 – 100.
fn parse_metric(value: &str) -> Option<u8> {
    let cleaned = value
        .trim()
        .trim_matches(|c: char| c == '[' || c == ']')
        .trim()
        .trim_end_matches('%')
        .trim();
    cleaned
        .parse::<i64>()
        .ok()
        .map(|n| n.clamp(0, 100) as u8)
}

/// Strips leading `-` / `•` markers; `None` for non-bullets and empty bullets.
fn bullet_text(line: &str) -> Option<&str> {
    if !line.starts_with('-') && !line.starts_with('•') {
        return None;
    }
    let text = line.trim_start_matches(|c: char| c == '-' || c == '•').trim();
    (!text.is_empty()).then_some(text)
}

fn push_line(buffer: &mut String, line: &str) {
    buffer.push_str(line);
    buffer.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_REPLY: &str = "\
Here is your optimized application.

=== RESUME ===
Jane Doe
Senior Data Engineer

SKILLS
Python, AWS, SQL

=== COVER LETTER ===
Dear Hiring Manager,

I am excited to apply.

=== METRICS ===
SCORE: [92]
CHANCE: 81%

=== OPTIMIZATION TIPS ===
- Add a certifications section
• Quantify the migration project
1. Numbered lines are not bullets
-
- Mention Spark tuning
";

    #[test]
    fn test_full_reply() {
        let parsed = parse(FULL_REPLY);
        assert_eq!(
            parsed.result.generated_resume,
            "Jane Doe\nSenior Data Engineer\nSKILLS\nPython, AWS, SQL"
        );
        assert_eq!(
            parsed.result.generated_cover_letter,
            "Dear Hiring Manager,\nI am excited to apply."
        );
        assert_eq!(parsed.metrics.ats_score, 92);
        assert_eq!(parsed.metrics.interview_chance, 81);
        assert_eq!(
            parsed.result.suggestions,
            vec![
                "Add a certifications section",
                "Quantify the migration project",
                "Mention Spark tuning"
            ]
        );
    }

    #[test]
    fn test_metrics_are_clamped() {
        let parsed = parse("=== RESUME ===\nLine1\n\n=== METRICS ===\nSCORE: 150%\nCHANCE: -10");
        assert_eq!(parsed.metrics.ats_score, 100);
        assert_eq!(parsed.metrics.interview_chance, 0);
        assert_eq!(parsed.result.generated_resume, "Line1");
    }

    #[test]
    fn test_no_headers_yields_defaults() {
        let parsed = parse("Just some prose.\nSCORE: 10\n- a bullet\n");
        assert_eq!(parsed.result.generated_resume, "");
        assert_eq!(parsed.result.generated_cover_letter, "");
        assert!(parsed.result.suggestions.is_empty());
        assert_eq!(parsed.metrics.ats_score, 85);
        assert_eq!(parsed.metrics.interview_chance, 75);
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        assert_eq!(parse(""), ParsedGeneration::default());
    }

    #[test]
    fn test_non_numeric_metric_keeps_prior_value() {
        let parsed = parse("=== METRICS ===\nSCORE: 60\nSCORE: high\nCHANCE: [Provide estimate]");
        assert_eq!(parsed.metrics.ats_score, 60);
        assert_eq!(parsed.metrics.interview_chance, 75);
    }

    #[test]
    fn test_repeated_sections_accumulate() {
        let parsed = parse(
            "=== RESUME ===\nPart one\n=== COVER LETTER ===\nLetter\n=== RESUME ===\nPart two",
        );
        assert_eq!(parsed.result.generated_resume, "Part one\nPart two");
        assert_eq!(parsed.result.generated_cover_letter, "Letter");
    }

    #[test]
    fn test_unknown_section_is_discarded() {
        let parsed = parse("=== RESUME ===\nKeep\n=== NOTES ===\nDrop me\n- drop too");
        assert_eq!(parsed.result.generated_resume, "Keep");
        assert!(parsed.result.suggestions.is_empty());
    }

    #[test]
    fn test_labels_match_case_insensitively() {
        let parsed = parse("=== Resume ===\nMine\n=== Optimization Tips ===\n- Tip");
        assert_eq!(parsed.result.generated_resume, "Mine");
        assert_eq!(parsed.result.suggestions, vec!["Tip"]);
    }

    #[test]
    fn test_crlf_and_indented_lines() {
        let parsed = parse("   === RESUME ===  \r\n    Indented line  \r\n");
        assert_eq!(parsed.result.generated_resume, "Indented line");
    }

    #[test]
    fn test_step_transitions() {
        assert_eq!(
            step(Section::None, "=== METRICS ==="),
            (Section::Metrics, Emit::Nothing)
        );
        assert_eq!(
            step(Section::Resume, "=== UNKNOWN ==="),
            (Section::None, Emit::Nothing)
        );
        assert_eq!(step(Section::Tips, "   "), (Section::Tips, Emit::Nothing));
        assert_eq!(
            step(Section::Metrics, "CHANCE: 42"),
            (Section::Metrics, Emit::InterviewChance(42))
        );
        assert_eq!(
            step(Section::Tips, "-- Double dash"),
            (Section::Tips, Emit::Suggestion("Double dash"))
        );
        assert_eq!(step(Section::None, "text"), (Section::None, Emit::Nothing));
    }

    #[test]
    fn test_marker_label() {
        assert_eq!(marker_label("=== COVER LETTER ==="), Some("COVER LETTER"));
        assert_eq!(marker_label("===  METRICS  ==="), Some("METRICS"));
        assert_eq!(marker_label("==== METRICS ===="), None);
        assert_eq!(marker_label("=== RESUME"), None);
        assert_eq!(marker_label("RESUME ==="), None);
    }

    #[test]
    fn test_parse_metric_variants() {
        assert_eq!(parse_metric(" 85"), Some(85));
        assert_eq!(parse_metric(" [85] "), Some(85));
        assert_eq!(parse_metric("85%"), Some(85));
        assert_eq!(parse_metric("[85%]"), Some(85));
        assert_eq!(parse_metric("+7"), Some(7));
        assert_eq!(parse_metric("999999999999999999999"), None);
        assert_eq!(parse_metric("eighty"), None);
        assert_eq!(parse_metric(""), None);
    }
}
