//! Error types for rs-htmlinfo.
//!
//! Only reading the source document is fatal to a parse; decoding is
//! lossy and never fails.
//! The oembed variants are produced by the fetch step and absorbed by
//! [`HtmlInfo::parse`](crate::HtmlInfo::parse); they are still returned
//! by [`fetch_oembed`](crate::oembed::fetch_oembed) for direct callers.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the source stream failed.
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// Transport failure while talking to an oembed endpoint.
    #[error("oembed request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The oembed endpoint answered with a non-success status.
    #[error("oembed endpoint returned status {0}")]
    OembedStatus(u16),

    /// The oembed response body could not be decoded.
    #[error("invalid oembed response: {0}")]
    OembedFormat(String),

    /// The fetch was aborted through a cancellation token.
    #[error("oembed fetch cancelled")]
    Cancelled,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
