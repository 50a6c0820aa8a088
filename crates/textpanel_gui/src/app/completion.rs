//! Word-prefix completion for the code surface.
//!
//! The surface owns no language service; it matches the word left of the
//! cursor against the suggestion labels handed to it by the content editor.

use textpanel_core::models::SuggestionItem;

/// Popup never lists more than this many entries.
pub(crate) const MAX_VISIBLE_SUGGESTIONS: usize = 8;

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '_' | '$' | '{' | '.')
}

/// Word immediately left of `cursor` (a char index).
///
/// # Returns
/// `(start_char, prefix)`; the prefix is empty when the cursor does not follow
/// a word character.
pub(crate) fn word_prefix(text: &str, cursor: usize) -> (usize, String) {
    let before: Vec<char> = text.chars().take(cursor).collect();
    let start = before
        .iter()
        .rposition(|ch| !is_word_char(*ch))
        .map_or(0, |idx| idx + 1);
    (start, before[start..].iter().collect())
}

/// Suggestions whose label starts with `prefix`, case-insensitively.
///
/// An exact match is dropped so a finished word does not keep the popup open.
pub(crate) fn filter_suggestions<'a>(
    suggestions: &'a [SuggestionItem],
    prefix: &str,
) -> Vec<&'a SuggestionItem> {
    if prefix.is_empty() {
        return Vec::new();
    }
    let needle = prefix.to_lowercase();
    suggestions
        .iter()
        .filter(|item| item.label != prefix && item.label.to_lowercase().starts_with(&needle))
        .take(MAX_VISIBLE_SUGGESTIONS)
        .collect()
}

/// Replace the chars `start..cursor` with `label`.
///
/// # Returns
/// The new text and the char index right after the inserted label.
pub(crate) fn apply_completion(
    text: &str,
    start: usize,
    cursor: usize,
    label: &str,
) -> (String, usize) {
    let mut out: String = text.chars().take(start).collect();
    out.push_str(label);
    out.extend(text.chars().skip(cursor));
    (out, start + label.chars().count())
}
