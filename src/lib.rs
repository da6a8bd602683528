//! # rs-htmlinfo
//!
//! Extracts structured metadata from an already-fetched HTML page and
//! synthesizes an oembed-shaped summary of it.
//!
//! The caller fetches a URL and hands the response body, the URL and the
//! response content type to [`HtmlInfo::parse`]. The page head yields the
//! title, description, author, canonical URL, favicon and touch icons,
//! `image_src`, Open Graph data and oembed discovery links. The body can be
//! reduced to its main content. When the page advertises an oembed endpoint
//! the record is fetched as well.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rs_htmlinfo::HtmlInfo;
//!
//! # async fn demo(body: Vec<u8>) -> rs_htmlinfo::Result<()> {
//! let page_url = "https://example.com/article";
//! let mut info = HtmlInfo::new();
//! info.parse(body.as_slice(), Some(page_url), Some("text/html; charset=utf-8")).await?;
//!
//! println!("Title: {}", info.title);
//! println!("Favicon: {}", info.favicon_url);
//! if let Some(oembed) = info.generate_oembed_for(page_url) {
//!     println!("Thumbnail: {}", oembed.thumbnail_url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Head metadata**: title, description, author, canonical URL, icons
//! - **Open Graph**: `og:*` and `article:*` properties
//! - **Oembed**: discovery, JSON/XML fetch, and synthesis for pages without one
//! - **Main content**: Readability extraction (`readability` feature, default)
//!
//! Extraction is best-effort: malformed tags, bad URLs and failed fetches
//! leave fields empty instead of failing the parse.

mod error;
mod options;
mod patterns;

/// Head element extraction.
mod head;

/// Main content extraction.
mod content;

/// Oembed summary synthesis.
mod synthesis;

mod html_info;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// URL resolution and provider helpers.
pub mod url_utils;

/// Character-safe truncation and text cleanup.
pub mod text;

/// Touch icon descriptors.
pub mod icons;

/// Open Graph metadata.
pub mod opengraph;

/// Oembed records, merging and fetching.
pub mod oembed;

// Public API - re-exports
pub use error::{Error, Result};
pub use html_info::HtmlInfo;
pub use icons::TouchIcon;
pub use oembed::OembedInfo;
pub use opengraph::OpenGraph;
pub use options::Options;
