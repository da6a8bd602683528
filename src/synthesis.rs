//! Oembed synthesis.
//!
//! Builds a `link`-type oembed summary for pages that publish no endpoint,
//! falling back through Open Graph data, head metadata and main content.

use url::Url;

use crate::html_info::HtmlInfo;
use crate::oembed::OembedInfo;
use crate::patterns::IMG_SRC;
use crate::text;
use crate::url_utils::{self, to_absolute_url};

/// Oembed type of every synthesized summary.
pub const SYNTHESIZED_TYPE: &str = "link";

/// Synthesize an oembed summary of `page_url` from extracted page data.
///
/// Returns `None` when `page_url` is not a valid absolute URL. Relative
/// image URLs are resolved against the URL the page was parsed with, or
/// `page_url` when it was parsed without one.
#[must_use]
pub fn synthesize(page_url: &str, info: &HtmlInfo) -> Option<OembedInfo> {
    let page = url_utils::parse_url(page_url)?;
    let base: &Url = info.base_url().unwrap_or(&page);
    let og = &info.opengraph;

    let provider_name = first_non_empty(&[&og.site_name], || url_utils::host_with_port(&page));
    let title = first_non_empty(&[&og.title, &info.title], String::new);
    let description = first_non_empty(&[&og.description, &info.description], || {
        if info.main_content.is_empty() {
            String::new()
        } else {
            text::description_from_content(&info.main_content)
        }
    });

    let mut summary = OembedInfo {
        kind: SYNTHESIZED_TYPE.to_string(),
        url: page_url.to_string(),
        provider_name,
        provider_url: url_utils::provider_url(&page),
        title,
        description,
        author_name: info.author_name.clone(),
        ..OembedInfo::default()
    };

    if let Some(image) = og.first_image().filter(|image| !image.url.is_empty()) {
        summary.thumbnail_url = to_absolute_url(Some(base), &image.url);
        summary.thumbnail_width = Some(image.width).filter(|w| *w > 0);
        summary.thumbnail_height = Some(image.height).filter(|h| *h > 0);
    } else if !info.image_src_url.is_empty() {
        summary.thumbnail_url = to_absolute_url(Some(base), &info.image_src_url);
    } else if let Some(src) = first_content_image(&info.main_content) {
        summary.thumbnail_url = to_absolute_url(Some(base), src);
    }

    Some(summary)
}

/// `src` of the first `<img>` in a markup fragment.
fn first_content_image(main_content: &str) -> Option<&str> {
    IMG_SRC
        .captures(main_content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn first_non_empty(candidates: &[&String], fallback: impl FnOnce() -> String) -> String {
    candidates
        .iter()
        .find(|s| !s.is_empty())
        .map_or_else(fallback, |s| (*s).clone())
}
