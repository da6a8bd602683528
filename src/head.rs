//! Head extraction.
//!
//! Walks the direct children of `<head>` (no recursion) and fills the page
//! fields of [`HtmlInfo`]. Missing or malformed attributes never fail the
//! walk; the affected field is simply left unset.

use std::collections::HashMap;

use url::Url;

use crate::dom::{self, NodeRef};
use crate::html_info::HtmlInfo;
use crate::icons;
use crate::patterns::ICON_REL;
use crate::url_utils::to_absolute_url;

const OEMBED_JSON_TYPE: &str = "application/json+oembed";
const OEMBED_XML_TYPE: &str = "application/xml+oembed";

/// Extract title, meta and link data from the children of `head`.
///
/// A later `<title>` overwrites an earlier one. Every `<meta>` is also
/// forwarded to the Open Graph parser.
pub fn extract_head(head: &NodeRef, info: &mut HtmlInfo) {
    let base = info.base_url().cloned();

    for child in dom::element_children(head) {
        match dom::tag_name(&child).as_deref() {
            Some("title") => {
                if let Some(title) = dom::first_child_text(&child) {
                    info.title = title;
                }
            }
            Some("link") => parse_link(&dom::attribute_map(&child), base.as_ref(), info),
            Some("meta") => parse_meta(&dom::attribute_map(&child), info),
            _ => {}
        }
    }
}

fn parse_link(attrs: &HashMap<String, String>, base: Option<&Url>, info: &mut HtmlInfo) {
    let rel = attr(attrs, "rel");
    let Some(href) = attrs.get("href").filter(|h| !h.trim().is_empty()) else {
        return;
    };

    if rel == "canonical" {
        info.canonical_url = to_absolute_url(base, href);
    } else if rel == "alternate" && attr(attrs, "type") == OEMBED_JSON_TYPE {
        info.oembed_json_url = to_absolute_url(base, href);
    } else if rel == "alternate" && attr(attrs, "type") == OEMBED_XML_TYPE {
        info.oembed_xml_url = to_absolute_url(base, href);
    } else if ICON_REL.is_match(rel) {
        parse_icon_link(rel, &to_absolute_url(base, href), attrs.get("sizes"), info);
    }
}

/// Handle each `rel` token of an icon or `image_src` link on its own.
fn parse_icon_link(rel: &str, url: &str, sizes: Option<&String>, info: &mut HtmlInfo) {
    for token in rel.split_whitespace() {
        match token {
            "image_src" => info.image_src_url = url.to_string(),
            "icon" => {
                info.favicon_url = url.to_string();
                push_touch_icons(url, token, sizes, info);
            }
            "apple-touch-icon" | "apple-touch-icon-precomposed" => {
                push_touch_icons(url, token, sizes, info);
            }
            _ => {}
        }
    }
}

fn push_touch_icons(url: &str, rel_type: &str, sizes: Option<&String>, info: &mut HtmlInfo) {
    let tokens = icons::size_tokens(sizes.map(String::as_str));
    info.touch_icons
        .extend(icons::collect_touch_icons(url, rel_type, &tokens));
}

fn parse_meta(attrs: &HashMap<String, String>, info: &mut HtmlInfo) {
    if let Some(content) = attrs.get("content") {
        match attr(attrs, "name") {
            "description" => info.description.clone_from(content),
            "author" => info.author_name.clone_from(content),
            _ => {}
        }
    }

    info.opengraph.process_meta(attrs);
}

fn attr<'a>(attrs: &'a HashMap<String, String>, key: &str) -> &'a str {
    attrs.get(key).map_or("", String::as_str)
}
