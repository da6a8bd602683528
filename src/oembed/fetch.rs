//! Fetching oembed records from a discovered endpoint.
//!
//! The discovery URL found in the page head is complete: it already carries
//! the page URL and format parameters, so it is requested as-is.

use reqwest::header::{HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use serde::Deserialize;

use super::OembedInfo;
use crate::{Error, Result};

/// Serialization format advertised by a discovery link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OembedFormat {
    /// `application/json+oembed`
    Json,
    /// `application/xml+oembed`
    Xml,
}

impl OembedFormat {
    fn accept(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "text/xml",
        }
    }
}

/// A discovered oembed endpoint plus the provider identity used to fill
/// gaps in its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OembedEndpoint {
    /// Complete endpoint URL.
    pub url: String,
    pub format: OembedFormat,
    pub provider_name: String,
    pub provider_url: String,
}

/// Fetch and decode the oembed record behind `endpoint`.
///
/// The response body is read up to `max_body` bytes. When the record lacks
/// `url`, `provider_name` or `provider_url` they are filled from `page_url`
/// and the endpoint's provider identity.
///
/// # Errors
///
/// * [`Error::Http`] on transport failure
/// * [`Error::OembedStatus`] when the endpoint does not answer 2xx
/// * [`Error::OembedFormat`] when the body cannot be decoded
pub async fn fetch_oembed(
    client: &Client,
    endpoint: &OembedEndpoint,
    page_url: &str,
    accept_language: &str,
    max_body: usize,
) -> Result<OembedInfo> {
    let mut request = client
        .get(&endpoint.url)
        .header(ACCEPT, endpoint.format.accept());
    if let Ok(language) = HeaderValue::from_str(accept_language) {
        request = request.header(ACCEPT_LANGUAGE, language);
    }

    tracing::debug!(endpoint = %endpoint.url, "fetching oembed record");
    let mut response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::OembedStatus(status.as_u16()));
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let room = max_body.saturating_sub(body.len());
        body.extend_from_slice(&chunk[..chunk.len().min(room)]);
        if body.len() >= max_body {
            tracing::trace!(max_body, "oembed body truncated");
            break;
        }
    }

    let mut info = decode(&body, endpoint.format)?;
    info.status = status.as_u16();

    if info.url.is_empty() {
        info.url = page_url.to_string();
    }
    if info.provider_url.is_empty() {
        info.provider_url.clone_from(&endpoint.provider_url);
    }
    if info.provider_name.is_empty() {
        info.provider_name.clone_from(&endpoint.provider_name);
    }

    Ok(info)
}

/// Decode an oembed response body.
///
/// # Errors
///
/// Returns [`Error::OembedFormat`] when the body is not a valid record.
pub fn decode(body: &[u8], format: OembedFormat) -> Result<OembedInfo> {
    match format {
        OembedFormat::Json => {
            serde_json::from_slice(body).map_err(|e| Error::OembedFormat(e.to_string()))
        }
        OembedFormat::Xml => {
            let text = String::from_utf8_lossy(body);
            quick_xml::de::from_str::<XmlOembed>(&text)
                .map(OembedInfo::from)
                .map_err(|e| Error::OembedFormat(e.to_string()))
        }
    }
}

/// `<oembed>` document; every element arrives as text.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct XmlOembed {
    #[serde(rename = "type")]
    kind: Option<String>,
    version: Option<String>,
    url: Option<String>,
    provider_name: Option<String>,
    provider_url: Option<String>,
    title: Option<String>,
    description: Option<String>,
    author_name: Option<String>,
    author_url: Option<String>,
    html: Option<String>,
    width: Option<String>,
    height: Option<String>,
    thumbnail_url: Option<String>,
    thumbnail_width: Option<String>,
    thumbnail_height: Option<String>,
    cache_age: Option<String>,
}

impl From<XmlOembed> for OembedInfo {
    fn from(xml: XmlOembed) -> Self {
        let text = |value: Option<String>| value.map(|s| s.trim().to_string()).unwrap_or_default();
        let number = |value: Option<String>| value.and_then(|s| s.trim().parse::<u64>().ok());
        Self {
            kind: text(xml.kind),
            version: text(xml.version),
            url: text(xml.url),
            provider_name: text(xml.provider_name),
            provider_url: text(xml.provider_url),
            title: text(xml.title),
            description: text(xml.description),
            author_name: text(xml.author_name),
            author_url: text(xml.author_url),
            html: text(xml.html),
            width: number(xml.width),
            height: number(xml.height),
            thumbnail_url: text(xml.thumbnail_url),
            thumbnail_width: number(xml.thumbnail_width),
            thumbnail_height: number(xml.thumbnail_height),
            cache_age: number(xml.cache_age),
            status: 0,
        }
    }
}
