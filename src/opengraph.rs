//! Open Graph metadata
//!
//! Accumulates [Open Graph](https://ogp.me/) `<meta property="og:...">` tags.
//! The head extractor forwards every `<meta>` element here as an attribute
//! map; tags that are not Open Graph are ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// Cap per media collection
const MAX_MEDIA_ITEMS: usize = 100;

/// Open Graph data of a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenGraph {
    /// Object type (`website`, `article`, `video.movie`, ...).
    #[serde(rename = "type")]
    pub og_type: String,

    /// Canonical URL of the object.
    pub url: String,

    /// Title of the object.
    pub title: String,

    /// Short description.
    pub description: String,

    /// Word that appears before the title (`a`, `the`, ...).
    pub determiner: String,

    /// Name of the overall site.
    pub site_name: String,

    /// Locale of the content, e.g. `en_US`.
    pub locale: String,

    /// Other locales the page is available in.
    pub locales_alternate: Vec<String>,

    /// Images, in declaration order.
    pub images: Vec<Media>,

    /// Videos, in declaration order.
    pub videos: Vec<Media>,

    /// Audio files, in declaration order.
    pub audios: Vec<Media>,

    /// `article:*` properties.
    pub article: Option<Article>,
}

/// An image, video or audio object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
    pub secure_url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub width: u64,
    pub height: u64,
}

/// `article:*` properties of an article page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub published_time: String,
    pub modified_time: String,
    pub expiration_time: String,
    pub section: String,
    pub tags: Vec<String>,
    pub authors: Vec<String>,
}

impl OpenGraph {
    /// Create an empty Open Graph record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process the attributes of one `<meta>` element.
    ///
    /// Reads `property` and `content`; anything without a known `og:` or
    /// `article:` property is ignored.
    pub fn process_meta(&mut self, attrs: &HashMap<String, String>) {
        let (Some(property), Some(content)) = (attrs.get("property"), attrs.get("content")) else {
            return;
        };

        if let Some(name) = property.strip_prefix("og:") {
            self.extend(name, content);
        } else if let Some(name) = property.strip_prefix("article:") {
            self.extend_article(name, content);
        }
    }

    fn extend(&mut self, property: &str, content: &str) {
        match property {
            "type" => self.og_type = content.to_string(),
            "url" => self.url = content.to_string(),
            "title" => self.title = content.to_string(),
            "description" => self.description = content.to_string(),
            "determiner" => self.determiner = content.to_string(),
            "site_name" => self.site_name = content.to_string(),
            "locale" => self.locale = content.to_string(),
            "locale:alternate" => self.locales_alternate.push(content.to_string()),
            _ if property.starts_with("image") => {
                extend_media("image", property, content, &mut self.images);
            }
            _ if property.starts_with("video") => {
                extend_media("video", property, content, &mut self.videos);
            }
            _ if property.starts_with("audio") => {
                extend_media("audio", property, content, &mut self.audios);
            }
            _ => {}
        }
    }

    fn extend_article(&mut self, property: &str, content: &str) {
        let article = self.article.get_or_insert_with(Article::default);
        match property {
            "published_time" => article.published_time = content.to_string(),
            "modified_time" => article.modified_time = content.to_string(),
            "expiration_time" => article.expiration_time = content.to_string(),
            "section" => article.section = content.to_string(),
            "tag" => article.tags.push(content.to_string()),
            "author" => article.authors.push(content.to_string()),
            _ => {}
        }
    }

    /// First declared image, if any.
    #[must_use]
    pub fn first_image(&self) -> Option<&Media> {
        self.images.first()
    }

    /// Check if the record holds no meaningful content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.og_type.is_empty()
            && self.title.is_empty()
            && self.description.is_empty()
            && self.url.is_empty()
            && self.site_name.is_empty()
            && self.images.is_empty()
    }
}

/// Apply a media property (`image`, `image:url`, `image:width`, ...).
///
/// `image` and `image:url` start a new item; other sub-properties modify
/// the last one. A sub-property with no preceding item starts one.
fn extend_media(kind: &str, property: &str, content: &str, items: &mut Vec<Media>) {
    let suffix = property
        .strip_prefix(kind)
        .map(|rest| rest.trim_start_matches(':'))
        .unwrap_or_default();

    if suffix.is_empty() || suffix == "url" {
        if items.len() < MAX_MEDIA_ITEMS {
            items.push(Media {
                url: content.to_string(),
                ..Media::default()
            });
        }
        return;
    }

    if !matches!(suffix, "secure_url" | "type" | "width" | "height") {
        return;
    }
    if items.is_empty() {
        items.push(Media::default());
    }
    let Some(media) = items.last_mut() else {
        return;
    };

    match suffix {
        "secure_url" => media.secure_url = content.to_string(),
        "type" => media.mime_type = content.to_string(),
        "width" => media.width = content.trim().parse().unwrap_or(0),
        "height" => media.height = content.trim().parse().unwrap_or(0),
        _ => {}
    }
}
