//! Touch icon descriptors built from `<link rel="icon" sizes="...">` tags.

use serde::{Deserialize, Serialize};

use crate::patterns::ICON_SIZE;

/// Size token assumed for icon links without a `sizes` attribute.
pub const DEFAULT_SIZE_TOKEN: &str = "0x0";

/// `sizes` keyword marking a scalable (vector) icon.
pub const SCALABLE_SIZE_TOKEN: &str = "any";

/// One icon reference declared in the document head.
///
/// A link declaring several sizes yields one `TouchIcon` per size, all
/// sharing the same `url` and `rel_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchIcon {
    /// Absolute icon URL.
    pub url: String,

    /// The `rel` token that declared the icon (`icon`, `apple-touch-icon`, ...).
    #[serde(rename = "type")]
    pub rel_type: String,

    /// Declared width in pixels, 0 when unknown.
    pub width: u64,

    /// Declared height in pixels, 0 when unknown.
    pub height: u64,

    /// The size token was `any`.
    pub is_scalable: bool,
}

/// Split a `sizes` attribute into tokens.
///
/// A missing or blank attribute becomes the single token `0x0`.
#[must_use]
pub fn size_tokens(sizes: Option<&str>) -> Vec<&str> {
    let tokens: Vec<&str> = sizes.map(|s| s.split_whitespace().collect()).unwrap_or_default();
    if tokens.is_empty() {
        vec![DEFAULT_SIZE_TOKEN]
    } else {
        tokens
    }
}

/// Build one [`TouchIcon`] per size token.
///
/// For a `AxB` token the first number is stored as the height and the
/// second as the width. Tokens without two numbers leave both at 0.
#[must_use]
pub fn collect_touch_icons(url: &str, rel_type: &str, sizes: &[&str]) -> Vec<TouchIcon> {
    sizes
        .iter()
        .map(|token| {
            let mut icon = TouchIcon {
                url: url.to_string(),
                rel_type: rel_type.to_string(),
                is_scalable: *token == SCALABLE_SIZE_TOKEN,
                ..TouchIcon::default()
            };
            if let Some(caps) = ICON_SIZE.captures(token) {
                icon.height = caps[1].parse().unwrap_or(0);
                icon.width = caps[2].parse().unwrap_or(0);
            }
            icon
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_tokens_default() {
        assert_eq!(size_tokens(None), vec!["0x0"]);
        assert_eq!(size_tokens(Some("   ")), vec!["0x0"]);
        assert_eq!(size_tokens(Some("16x16  32x32")), vec!["16x16", "32x32"]);
    }

    #[test]
    fn test_one_icon_per_size() {
        let icons = collect_touch_icons("https://e.com/i.png", "icon", &["32x32", "64x64"]);
        assert_eq!(icons.len(), 2);
        assert!(icons.iter().all(|i| i.url == "https://e.com/i.png" && i.rel_type == "icon"));
        assert_eq!((icons[0].width, icons[0].height), (32, 32));
        assert_eq!((icons[1].width, icons[1].height), (64, 64));
    }

    #[test]
    fn test_first_number_is_height() {
        // Regression pin: "57x72" stores 57 as height and 72 as width.
        let icons = collect_touch_icons("u", "apple-touch-icon", &["57x72"]);
        assert_eq!(icons[0].height, 57);
        assert_eq!(icons[0].width, 72);
    }

    #[test]
    fn test_any_is_scalable() {
        let icons = collect_touch_icons("u", "icon", &["any"]);
        assert!(icons[0].is_scalable);
        assert_eq!((icons[0].width, icons[0].height), (0, 0));
    }

    #[test]
    fn test_unmatched_token_has_zero_size() {
        let icons = collect_touch_icons("u", "icon", &["big"]);
        assert!(!icons[0].is_scalable);
        assert_eq!((icons[0].width, icons[0].height), (0, 0));
    }

    #[test]
    fn test_overflowing_size_falls_back_to_zero() {
        let icons = collect_touch_icons("u", "icon", &["99999999999999999999999x16"]);
        assert_eq!(icons[0].height, 0);
        assert_eq!(icons[0].width, 16);
    }

    #[test]
    fn test_serialized_field_names() {
        let icon = TouchIcon {
            url: "u".to_string(),
            rel_type: "icon".to_string(),
            width: 1,
            height: 2,
            is_scalable: false,
        };
        let json = serde_json::to_value(&icon).unwrap_or_default();
        assert_eq!(json["type"], "icon");
        assert_eq!(json["is_scalable"], false);
        assert_eq!(json["height"], 2);
    }
}
