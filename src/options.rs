//! Configuration options for metadata extraction.
//!
//! The `Options` struct controls which optional stages of a parse run and
//! how the oembed endpoint is contacted.

use std::time::Duration;

/// Configuration options for metadata extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_htmlinfo::Options;
///
/// let options = Options {
///     allow_oembed_fetching: false,
///     accept_language: "de-de".to_string(),
///     ..Options::default()
/// };
/// assert!(options.allow_main_content_extraction);
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Fetch the oembed record when the page advertises an endpoint.
    ///
    /// Default: `true`
    pub allow_oembed_fetching: bool,

    /// Run main-content extraction over the document body.
    ///
    /// Requires the `readability` feature flag.
    ///
    /// Default: `true`
    pub allow_main_content_extraction: bool,

    /// Keep the whitelisted markup (`div`, `p`, `img`) in `main_content`.
    ///
    /// When false, every tag is stripped and `main_content` is plain text.
    ///
    /// Default: `true`
    pub leave_main_content_tags: bool,

    /// Value of the `Accept-Language` header sent to oembed endpoints.
    ///
    /// Default: `"en-us"`
    pub accept_language: String,

    /// HTTP client used for the oembed fetch.
    ///
    /// When `None` a client is built on demand with `fetch_timeout`.
    ///
    /// Default: `None`
    pub http_client: Option<reqwest::Client>,

    /// Request timeout for the on-demand client.
    ///
    /// Ignored when `http_client` is set.
    ///
    /// Default: 10 seconds
    pub fetch_timeout: Duration,

    /// Maximum number of oembed response bytes read before decoding.
    ///
    /// Default: `50_000`
    pub max_oembed_body: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            allow_oembed_fetching: true,
            allow_main_content_extraction: true,
            leave_main_content_tags: true,
            accept_language: "en-us".to_string(),
            http_client: None,
            fetch_timeout: Duration::from_secs(10),
            max_oembed_body: 50_000,
        }
    }
}
