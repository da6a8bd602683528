//! Text helpers for summaries: character-safe truncation and the cleanup
//! applied before main content is used as a description.

use crate::patterns::{HTML_TAG, NEW_LINES, WHITESPACE_NORMALIZE};

/// Maximum number of characters in a description derived from main content.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

const ELLIPSIS: &str = "...";

/// Truncate `text` to at most `max_chars` characters.
///
/// Counts Unicode scalar values, never bytes, so multi-byte characters are
/// never split. Text that already fits is returned unchanged. Otherwise the
/// last three kept characters are replaced by `...`, so the result is exactly
/// `max_chars` characters long. Limits below four characters cut without an
/// ellipsis.
///
/// # Examples
/// ```
/// use rs_htmlinfo::text::truncate;
///
/// assert_eq!(truncate("short", 10), "short");
/// assert_eq!(truncate("abcdefghij", 8), "abcde...");
/// assert_eq!(truncate("ééééé", 4), "é...");
/// ```
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    let Some((cutoff, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    if max_chars <= ELLIPSIS.len() {
        return text[..cutoff].to_string();
    }

    let keep = text
        .char_indices()
        .nth(max_chars - ELLIPSIS.len())
        .map_or(cutoff, |(idx, _)| idx);

    let mut out = String::with_capacity(keep + ELLIPSIS.len());
    out.push_str(&text[..keep]);
    out.push_str(ELLIPSIS);
    out
}

/// Collapse markup into a single line of plain text.
///
/// Tags are removed, line breaks become spaces, whitespace runs collapse to
/// one space and the result is trimmed.
#[must_use]
pub fn normalize_markup(html: &str) -> String {
    let without_tags = HTML_TAG.replace_all(html, " ");
    let single_line = NEW_LINES.replace_all(&without_tags, " ");
    WHITESPACE_NORMALIZE
        .replace_all(&single_line, " ")
        .trim()
        .to_string()
}

/// Short description derived from main content.
#[must_use]
pub fn description_from_content(main_content: &str) -> String {
    truncate(&normalize_markup(main_content), DESCRIPTION_MAX_CHARS)
}
