//! Input normalization: bounds caller text before it is placed into a prompt.

/// Default bound applied to every caller-supplied text.
pub const DEFAULT_MAX_CHARS: usize = 6000;

/// Truncates `text` to at most `max_chars` characters without splitting a sentence.
///
/// Text within the bound is returned unchanged. Otherwise the prefix is cut back to
/// the last `.` it contains (inclusive). If the prefix has no period past position 0,
/// the raw prefix is returned instead.
///
/// Lengths are counted in `char`s so a cut never lands inside a multi-byte character.
pub fn truncate(text: &str, max_chars: usize) -> String {
    // Byte offset of the first char past the bound; None means the text fits.
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    let prefix = &text[..cut];
    match prefix.rfind('.') {
        Some(last_period) if last_period > 0 => prefix[..=last_period].to_string(),
        _ => prefix.to_string(),
    }
}

/// Same as [`truncate`] for optional fields. An absent text stays absent.
pub fn truncate_opt(text: Option<&str>, max_chars: usize) -> Option<String> {
    text.map(|t| truncate(t, max_chars))
}
