//! Compiled regex patterns used during extraction and oembed synthesis.
//!
//! All patterns are compiled once on first use via `LazyLock` and shared by
//! every `HtmlInfo` instance.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Head Patterns
// =============================================================================

/// Matches `rel` values that carry an icon or `image_src` token.
///
/// Word boundaries let `shortcut icon` and `apple-touch-icon` through.
pub static ICON_REL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(icon|image_src)\b").expect("ICON_REL regex")
});

/// Matches a `sizes` token such as `32x32`: digits, separator, digits.
pub static ICON_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\D+(\d+)").expect("ICON_SIZE regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches a single HTML tag.
pub static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^>]*>").expect("HTML_TAG regex")
});

/// Matches runs of carriage returns and line feeds.
pub static NEW_LINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\r\n]+").expect("NEW_LINES regex")
});

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

// =============================================================================
// Content Patterns
// =============================================================================

/// Captures the `src` of the first `<img>` tag in a markup fragment.
pub static IMG_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img\b[^>]*?\ssrc\s*=\s*["']?([^"'\s>]+)"#).expect("IMG_SRC regex")
});
