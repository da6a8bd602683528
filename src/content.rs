//! Main content extraction.
//!
//! The serialized body is run through a Readability implementation
//! (`dom_smoothie`). Its article markup is reduced to `div`, `p` and `img`
//! elements, with only `src`, `title` and `alt` kept on images. Character
//! entities are then unescaped and surrounding whitespace trimmed.
//!
//! Failures are swallowed: the caller just gets `None`.

use url::Url;

use crate::patterns::HTML_TAG;

/// Tags kept in extracted main content.
pub const WHITELIST_TAGS: &[&str] = &["div", "p", "img"];

/// Attributes kept on `<img>` elements in extracted main content.
pub const WHITELIST_IMG_ATTRS: &[&str] = &["src", "title", "alt"];

/// Extract the main content of a serialized `<body>`.
///
/// With `leave_tags` false every tag is stripped and plain text returned.
/// Returns `None` when nothing usable was extracted.
#[must_use]
pub fn extract_main_content(body_html: &str, base: Option<&Url>, leave_tags: bool) -> Option<String> {
    let article_html = readability_content(body_html, base)?;

    let fragment = if leave_tags {
        sanitize(&article_html)
    } else {
        HTML_TAG.replace_all(&article_html, "").into_owned()
    };

    let content = html_escape::decode_html_entities(&fragment)
        .trim_matches(|c| c == '\r' || c == '\n' || c == ' ')
        .to_string();

    if content.is_empty() {
        None
    } else {
        Some(content)
    }
}

#[cfg(feature = "readability")]
fn readability_content(body_html: &str, base: Option<&Url>) -> Option<String> {
    use dom_smoothie::Readability;

    let mut reader = match Readability::new(body_html, base.map(Url::as_str), None) {
        Ok(reader) => reader,
        Err(err) => {
            tracing::debug!(error = %err, "readability setup failed");
            return None;
        }
    };

    match reader.parse() {
        Ok(article) => Some(article.content.to_string()),
        Err(err) => {
            tracing::debug!(error = %err, "readability found no main content");
            None
        }
    }
}

#[cfg(not(feature = "readability"))]
fn readability_content(_body_html: &str, _base: Option<&Url>) -> Option<String> {
    tracing::trace!("main content extraction requires the `readability` feature");
    None
}

/// Reduce article markup to the whitelisted tags and attributes.
fn sanitize(article_html: &str) -> String {
    use crate::dom::{self, Document};

    let doc = Document::from(article_html);
    let body = doc.select("body");

    let mut foreign: Vec<String> = Vec::new();
    for node in doc.select("body *").nodes() {
        if let Some(tag) = dom::tag_name(node) {
            if !WHITELIST_TAGS.contains(&tag.as_str()) && !foreign.contains(&tag) {
                foreign.push(tag);
            }
        }
    }
    let foreign: Vec<&str> = foreign.iter().map(String::as_str).collect();
    dom::strip_tags(&body, &foreign);

    for node in doc.select("body *").nodes() {
        let allowed: &[&str] = if dom::tag_name(node).as_deref() == Some("img") {
            WHITELIST_IMG_ATTRS
        } else {
            &[]
        };
        for name in dom::attribute_names(node) {
            if !allowed.contains(&name.as_str()) {
                dom::remove_attribute(node, &name);
            }
        }
    }

    dom::inner_html(&body)
}
