//! The page metadata record and the operations that fill it.
//!
//! A parse runs in two phases. Head and body extraction are synchronous and
//! in-memory ([`HtmlInfo::parse_document`]). The optional oembed fetch is the
//! only network step and the only one that observes cancellation
//! ([`HtmlInfo::parse_with_cancellation`]).

use std::fmt;
use std::io::Read;

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::dom::{self, Document};
use crate::encoding::{self, DEFAULT_CONTENT_TYPE};
use crate::icons::TouchIcon;
use crate::oembed::{self, OembedEndpoint, OembedFormat, OembedInfo};
use crate::opengraph::OpenGraph;
use crate::url_utils;
use crate::{content, head, synthesis, Error, Options, Result};

/// Metadata extracted from one HTML page.
///
/// Fields are filled by a parse call and read afterwards. Empty strings mean
/// the page did not provide the value.
///
/// # Example
///
/// ```rust
/// use rs_htmlinfo::{HtmlInfo, Options};
///
/// let html = r#"<html><head>
///     <title>Hello</title>
///     <link rel="icon" href="/favicon.ico">
/// </head><body></body></html>"#;
///
/// let mut info = HtmlInfo::with_options(Options {
///     allow_main_content_extraction: false,
///     ..Options::default()
/// });
/// info.parse_document(html.as_bytes(), Some("https://example.com/page"), None)?;
///
/// assert_eq!(info.title, "Hello");
/// assert_eq!(info.favicon_url, "https://example.com/favicon.ico");
///
/// let summary = info.generate_oembed_for("https://example.com/page");
/// assert_eq!(summary.map(|s| s.title), Some("Hello".to_string()));
/// # Ok::<(), rs_htmlinfo::Error>(())
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct HtmlInfo {
    /// Text of the `<title>` element.
    pub title: String,

    /// `<meta name="description">` content.
    pub description: String,

    /// `<meta name="author">` content.
    pub author_name: String,

    /// Absolute `<link rel="canonical">` target.
    pub canonical_url: String,

    /// Absolute JSON oembed discovery URL.
    pub oembed_json_url: String,

    /// Absolute XML oembed discovery URL.
    pub oembed_xml_url: String,

    /// Absolute URL of the last `rel="icon"` link.
    pub favicon_url: String,

    /// Icons in document order, one per declared size.
    pub touch_icons: Vec<TouchIcon>,

    /// Absolute `<link rel="image_src">` target.
    pub image_src_url: String,

    /// Main content markup (or text), empty when not extracted.
    pub main_content: String,

    /// Open Graph data.
    pub opengraph: OpenGraph,

    /// Oembed record fetched from the page's endpoint.
    pub oembed: Option<OembedInfo>,

    /// Extraction settings.
    #[serde(skip)]
    pub options: Options,

    #[serde(skip)]
    url: Option<Url>,
}

impl HtmlInfo {
    /// Create an empty record with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record with custom options.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// URL the current data was parsed against, if one was given and valid.
    #[must_use]
    pub fn base_url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    pub(crate) fn set_base_url(&mut self, page_url: Option<&str>) {
        self.url = page_url.and_then(url_utils::parse_url);
    }

    /// Parse a document and fetch its oembed record.
    ///
    /// `content_type` defaults to `text/html`; its `charset` parameter takes
    /// part in encoding detection. Without `page_url` relative links stay
    /// relative and no oembed fetch is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the source cannot be read. Fetch failures
    /// are logged and leave `oembed` unset.
    pub async fn parse<R: Read>(
        &mut self,
        source: R,
        page_url: Option<&str>,
        content_type: Option<&str>,
    ) -> Result<()> {
        self.parse_with_cancellation(source, page_url, content_type, &CancellationToken::new())
            .await
    }

    /// [`parse`](Self::parse) with a cancellation token for the oembed fetch.
    ///
    /// Cancelling aborts only the network wait; head and body data extracted
    /// before the fetch are kept and the call still returns `Ok(())`.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse).
    pub async fn parse_with_cancellation<R: Read>(
        &mut self,
        source: R,
        page_url: Option<&str>,
        content_type: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.parse_document(source, page_url, content_type)?;

        let Some(page_url) = page_url else {
            return Ok(());
        };
        if !self.options.allow_oembed_fetching {
            return Ok(());
        }
        let Some(endpoint) = self.oembed_endpoint() else {
            return Ok(());
        };

        let fetched = tokio::select! {
            () = cancel.cancelled() => Err(Error::Cancelled),
            fetched = self.fetch_oembed(&endpoint, page_url) => fetched,
        };

        match fetched {
            Ok(info) => self.oembed = Some(info),
            Err(err) => {
                tracing::debug!(endpoint = %endpoint.url, error = %err, "oembed fetch abandoned");
            }
        }

        Ok(())
    }

    /// Parse a document without any network access.
    ///
    /// Fills head metadata and, when enabled, main content. All previously
    /// extracted data is cleared first, so a failed parse leaves an empty
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the source cannot be read.
    pub fn parse_document<R: Read>(
        &mut self,
        mut source: R,
        page_url: Option<&str>,
        content_type: Option<&str>,
    ) -> Result<()> {
        self.reset();

        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;
        let html = encoding::decode(&bytes, content_type.unwrap_or(DEFAULT_CONTENT_TYPE));

        self.set_base_url(page_url);

        let doc = Document::from(html.as_str());

        if let Some(head_node) = dom::first_match(&doc, "head") {
            head::extract_head(&head_node, self);
        }

        if self.options.allow_main_content_extraction {
            let body = doc.select("body");
            if !body.nodes().is_empty() {
                let body_html = dom::outer_html(&body);
                let leave_tags = self.options.leave_main_content_tags;
                if let Some(main) = content::extract_main_content(&body_html, self.base_url(), leave_tags) {
                    self.main_content = main;
                }
            }
        }

        tracing::trace!(
            title = %self.title,
            icons = self.touch_icons.len(),
            has_opengraph = !self.opengraph.is_empty(),
            has_oembed_link = !self.oembed_json_url.is_empty() || !self.oembed_xml_url.is_empty(),
            "document parsed"
        );

        Ok(())
    }

    /// Oembed summary of `page_url` built from the parsed data.
    ///
    /// When a record was fetched during parsing, the synthesized summary only
    /// fills its empty fields; the stored record is updated in place and a
    /// copy returned. Returns `None` when `page_url` is not a valid URL.
    pub fn generate_oembed_for(&mut self, page_url: &str) -> Option<OembedInfo> {
        let summary = synthesis::synthesize(page_url, self)?;

        match self.oembed.as_mut() {
            Some(fetched) => {
                fetched.merge_with(&summary);
                Some(fetched.clone())
            }
            None => Some(summary),
        }
    }

    /// JSON representation of the extracted data.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Discovered endpoint to fetch, preferring JSON over XML.
    fn oembed_endpoint(&self) -> Option<OembedEndpoint> {
        let (endpoint_url, format) = if !self.oembed_json_url.is_empty() {
            (&self.oembed_json_url, OembedFormat::Json)
        } else if !self.oembed_xml_url.is_empty() {
            (&self.oembed_xml_url, OembedFormat::Xml)
        } else {
            return None;
        };

        let parsed = url_utils::parse_url(endpoint_url)?;
        let provider_name = if self.opengraph.site_name.is_empty() {
            url_utils::host_with_port(&parsed)
        } else {
            self.opengraph.site_name.clone()
        };

        Some(OembedEndpoint {
            url: endpoint_url.clone(),
            format,
            provider_name,
            provider_url: url_utils::provider_url(&parsed),
        })
    }

    async fn fetch_oembed(&self, endpoint: &OembedEndpoint, page_url: &str) -> Result<OembedInfo> {
        let client = match &self.options.http_client {
            Some(client) => client.clone(),
            None => reqwest::Client::builder()
                .timeout(self.options.fetch_timeout)
                .build()
                .map_err(Error::Http)?,
        };

        oembed::fetch_oembed(
            &client,
            endpoint,
            page_url,
            &self.options.accept_language,
            self.options.max_oembed_body,
        )
        .await
    }

    fn reset(&mut self) {
        *self = Self::with_options(std::mem::take(&mut self.options));
    }
}

impl fmt::Display for HtmlInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json() {
            Ok(json) => f.write_str(&json),
            Err(err) => write!(f, "{err}"),
        }
    }
}
