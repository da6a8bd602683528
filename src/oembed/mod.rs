//! Oembed records.
//!
//! [`OembedInfo`] is both the shape of a record fetched from a provider's
//! endpoint and the shape of the summary synthesized from page metadata.
//! The two meet in [`OembedInfo::merge_with`].

pub mod fetch;

use serde::{Deserialize, Deserializer, Serialize};

pub use fetch::{fetch_oembed, OembedEndpoint, OembedFormat};

/// Oembed description of a page.
///
/// Empty strings and `None` dimensions mean "not provided" and are left out
/// when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OembedInfo {
    /// Resource type: `link`, `photo`, `video` or `rich`.
    #[serde(rename = "type", deserialize_with = "de_string", skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(deserialize_with = "de_string", skip_serializing_if = "String::is_empty")]
    pub version: String,

    #[serde(deserialize_with = "de_string", skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(deserialize_with = "de_string", skip_serializing_if = "String::is_empty")]
    pub provider_name: String,

    #[serde(deserialize_with = "de_string", skip_serializing_if = "String::is_empty")]
    pub provider_url: String,

    #[serde(deserialize_with = "de_string", skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(deserialize_with = "de_string", skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(deserialize_with = "de_string", skip_serializing_if = "String::is_empty")]
    pub author_name: String,

    #[serde(deserialize_with = "de_string", skip_serializing_if = "String::is_empty")]
    pub author_url: String,

    /// Embed markup for `video` and `rich` types.
    #[serde(deserialize_with = "de_string", skip_serializing_if = "String::is_empty")]
    pub html: String,

    #[serde(deserialize_with = "de_dimension", skip_serializing_if = "Option::is_none")]
    pub width: Option<u64>,

    #[serde(deserialize_with = "de_dimension", skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,

    #[serde(deserialize_with = "de_string", skip_serializing_if = "String::is_empty")]
    pub thumbnail_url: String,

    #[serde(deserialize_with = "de_dimension", skip_serializing_if = "Option::is_none")]
    pub thumbnail_width: Option<u64>,

    #[serde(deserialize_with = "de_dimension", skip_serializing_if = "Option::is_none")]
    pub thumbnail_height: Option<u64>,

    /// Suggested cache lifetime in seconds.
    #[serde(deserialize_with = "de_dimension", skip_serializing_if = "Option::is_none")]
    pub cache_age: Option<u64>,

    /// HTTP status of the fetch that produced this record, 0 if synthesized.
    #[serde(skip)]
    pub status: u16,
}

impl OembedInfo {
    /// Fill the empty fields of `self` from `other`.
    ///
    /// Fields already set on `self` always win; `status` is never touched.
    pub fn merge_with(&mut self, other: &OembedInfo) {
        fill(&mut self.kind, &other.kind);
        fill(&mut self.version, &other.version);
        fill(&mut self.url, &other.url);
        fill(&mut self.provider_name, &other.provider_name);
        fill(&mut self.provider_url, &other.provider_url);
        fill(&mut self.title, &other.title);
        fill(&mut self.description, &other.description);
        fill(&mut self.author_name, &other.author_name);
        fill(&mut self.author_url, &other.author_url);
        fill(&mut self.html, &other.html);
        fill(&mut self.thumbnail_url, &other.thumbnail_url);
        self.width = self.width.or(other.width);
        self.height = self.height.or(other.height);
        self.thumbnail_width = self.thumbnail_width.or(other.thumbnail_width);
        self.thumbnail_height = self.thumbnail_height.or(other.thumbnail_height);
        self.cache_age = self.cache_age.or(other.cache_age);
    }
}

fn fill(target: &mut String, source: &str) {
    if target.is_empty() && !source.is_empty() {
        *target = source.to_string();
    }
}

/// Scalar as found in provider responses: numbers are sometimes sent as
/// strings, and XML gives everything as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Unsigned(u64),
    Float(f64),
    Text(String),
    Bool(bool),
}

fn de_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(s)) => s,
        Some(Scalar::Unsigned(n)) => n.to_string(),
        Some(Scalar::Float(f)) => f.to_string(),
        Some(Scalar::Bool(b)) => b.to_string(),
        None => String::new(),
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn de_dimension<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Unsigned(n)) => Some(n),
        Some(Scalar::Float(f)) if f.is_finite() && f >= 0.0 => Some(f.round() as u64),
        Some(Scalar::Text(s)) => {
            let s = s.trim();
            s.parse::<u64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f.round() as u64)
            })
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_own_fields() {
        let mut fetched = OembedInfo {
            kind: "video".to_string(),
            title: "Fetched".to_string(),
            thumbnail_width: Some(480),
            status: 200,
            ..OembedInfo::default()
        };
        let synthesized = OembedInfo {
            kind: "link".to_string(),
            title: "Synthesized".to_string(),
            description: "From page".to_string(),
            thumbnail_width: Some(100),
            thumbnail_height: Some(50),
            ..OembedInfo::default()
        };

        fetched.merge_with(&synthesized);

        assert_eq!(fetched.kind, "video");
        assert_eq!(fetched.title, "Fetched");
        assert_eq!(fetched.description, "From page");
        assert_eq!(fetched.thumbnail_width, Some(480));
        assert_eq!(fetched.thumbnail_height, Some(50));
        assert_eq!(fetched.status, 200);
    }

    #[test]
    fn test_deserialize_lenient_numbers() {
        let json = r#"{"type":"photo","version":1.0,"width":"640","height":480.0,"thumbnail_width":null,"title":null}"#;
        let info: OembedInfo = serde_json::from_str(json).unwrap_or_default();
        assert_eq!(info.kind, "photo");
        assert_eq!(info.version, "1");
        assert_eq!(info.width, Some(640));
        assert_eq!(info.height, Some(480));
        assert_eq!(info.thumbnail_width, None);
        assert_eq!(info.title, "");
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let info = OembedInfo {
            kind: "link".to_string(),
            title: "T".to_string(),
            status: 200,
            ..OembedInfo::default()
        };
        let json = serde_json::to_value(&info).unwrap_or_default();
        assert_eq!(json, serde_json::json!({"type": "link", "title": "T"}));
    }
}
