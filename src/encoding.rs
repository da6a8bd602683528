//! Character encoding detection and transcoding.
//!
//! The source document is decoded to UTF-8 before tree building. The
//! encoding is taken from a byte-order mark, then the `charset` parameter of
//! the caller-supplied content type, then `<meta>` declarations in the first
//! kilobyte. Undeclared input is read as UTF-8 when it is valid UTF-8 and
//! as windows-1252 otherwise.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use regex::Regex;
use std::sync::LazyLock;

/// Content type assumed when the caller supplies none.
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Match the `charset` parameter of a MIME content type.
#[allow(clippy::expect_used)]
static CHARSET_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// Decode a document to UTF-8 according to its content type.
///
/// `content_type` is a MIME type such as `text/html; charset=utf-8`; only
/// its `charset` parameter is consulted, the media type itself is ignored.
/// Invalid byte sequences are replaced with U+FFFD.
///
/// # Examples
///
/// ```
/// use rs_htmlinfo::encoding::decode;
///
/// let html = b"<html><body>Caf\xE9</body></html>";
/// let text = decode(html, "text/html; charset=ISO-8859-1");
/// assert!(text.contains("Café"));
/// ```
#[must_use]
pub fn decode(html: &[u8], content_type: &str) -> String {
    let encoding = detect_encoding(html, content_type);

    // `decode` sniffs and strips a BOM itself, overriding the label
    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}

/// Detect character encoding from HTML bytes and the declared content type.
///
/// Looks for charset declarations in the following order:
/// 1. Byte-order mark
/// 2. `charset=` parameter of `content_type`
/// 3. `<meta charset="...">`
/// 4. `<meta http-equiv="Content-Type" content="...; charset=...">`
/// 5. UTF-8 if the bytes are valid UTF-8, windows-1252 otherwise
///
/// Only the first 1024 bytes are examined for meta declarations.
#[must_use]
pub fn detect_encoding(html: &[u8], content_type: &str) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    if let Some(encoding) = extract_content_type_param(content_type)
        .and_then(|charset| Encoding::for_label(charset.as_bytes()))
    {
        return encoding;
    }

    // Only look at first 1024 bytes for performance
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    if let Some(encoding) = extract_charset(&head_str)
        .and_then(|charset| Encoding::for_label(charset.as_bytes()))
    {
        return encoding;
    }

    if let Some(encoding) = extract_content_type_charset(&head_str)
        .and_then(|charset| Encoding::for_label(charset.as_bytes()))
    {
        return encoding;
    }

    if std::str::from_utf8(html).is_ok() {
        UTF_8
    } else {
        WINDOWS_1252
    }
}

/// Extract charset from the `charset` parameter of a content type.
fn extract_content_type_param(content_type: &str) -> Option<String> {
    CHARSET_PARAM_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract charset from `<meta charset="...">` tag.
fn extract_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract charset from `<meta http-equiv="Content-Type" content="...; charset=...">` tag.
fn extract_content_type_charset(html: &str) -> Option<String> {
    CONTENT_TYPE_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
