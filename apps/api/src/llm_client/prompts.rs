// Shared prompt fragments.
// Each service that needs upstream calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_INSTRUCTION: &str = "You must return ONLY valid JSON with no additional \
    text or explanation. Do NOT use markdown code fences.";

/// Reminder appended to prompts that ask for numeric scores.
pub const SCORE_RANGE_INSTRUCTION: &str =
    "Ensure all numbers are integers between 0 and 100.";

/// Placeholder substituted for an absent cover letter.
pub const NO_COVER_LETTER: &str = "No cover letter provided";
