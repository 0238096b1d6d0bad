//! Keyword overlap: a cheap auxiliary signal reported next to the model's analysis.
//!
//! score = |candidate ∩ reference| / |reference|, over deduplicated, lowercased,
//! stopword-free alphanumeric tokens.

use std::collections::HashSet;

/// Standard English stopword list (NLTK corpus).
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "ain", "all", "am", "an", "and", "any",
    "are", "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "couldn", "d", "did", "didn", "do", "does", "doesn", "doing",
    "don", "down", "during", "each", "few", "for", "from", "further", "had", "hadn", "has",
    "hasn", "have", "haven", "having", "he", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "just", "ll", "m",
    "ma", "me", "mightn", "more", "most", "mustn", "my", "myself", "needn", "no", "nor", "not",
    "now", "o", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "re", "s", "same", "shan", "she", "should", "shouldn", "so", "some",
    "such", "t", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "ve",
    "very", "was", "wasn", "we", "were", "weren", "what", "when", "where", "which", "while",
    "who", "whom", "why", "will", "with", "won", "wouldn", "y", "you", "your", "yours",
    "yourself", "yourselves",
];

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}

/// Lowercased alphanumeric tokens of `text`, stopwords removed, deduplicated.
pub fn keyword_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty() && !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

/// Fraction of the reference keywords that also appear in the candidate text.
///
/// Returns 0.0 when the reference has no keywords.
pub fn match_score(candidate_text: &str, reference_text: &str) -> f64 {
    let reference = keyword_set(reference_text);
    if reference.is_empty() {
        return 0.0;
    }
    let candidate = keyword_set(candidate_text);
    let matched = reference.intersection(&candidate).count();
    matched as f64 / reference.len() as f64
}
