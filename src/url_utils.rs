//! URL Utility Functions
//!
//! Resolution of link targets found in a page against the page URL, and the
//! host/provider helpers used when describing a page as an oembed provider.
//!
//! Resolution is best-effort: a candidate that cannot be parsed is handed
//! back unchanged instead of producing an error.

use url::{ParseError, Url};

/// Convert a relative or absolute URL to absolute form.
///
/// * No base: the candidate is returned unchanged.
/// * Absolute candidate (has a scheme): returned unchanged.
/// * Scheme-relative candidate (`//host/path`): the base scheme is applied.
/// * Host-less candidate: scheme, credentials and host come from the base.
///   A path starting with `/` replaces the base path; any other path
///   (including an empty one) is appended to the base path as-is.
///
/// # Examples
/// ```
/// use rs_htmlinfo::url_utils::to_absolute_url;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/blog/").ok();
/// assert_eq!(to_absolute_url(base.as_ref(), "/a.png"), "https://example.com/a.png");
/// assert_eq!(to_absolute_url(base.as_ref(), "a.png"), "https://example.com/blog/a.png");
/// assert_eq!(to_absolute_url(None, "a.png"), "a.png");
/// ```
#[must_use]
pub fn to_absolute_url(base: Option<&Url>, candidate: &str) -> String {
    let Some(base) = base else {
        return candidate.to_string();
    };

    let trimmed = candidate.trim();

    match Url::parse(trimmed) {
        Ok(_) => trimmed.to_string(),
        Err(ParseError::RelativeUrlWithoutBase) => {
            if let Some(rest) = trimmed.strip_prefix("//") {
                return Url::parse(&format!("{}://{}", base.scheme(), rest))
                    .map_or_else(|_| candidate.to_string(), |u| u.to_string());
            }
            resolve_hostless(base, trimmed).unwrap_or_else(|| candidate.to_string())
        }
        Err(_) => candidate.to_string(),
    }
}

/// Resolve a reference without scheme or host onto `base`.
fn resolve_hostless(base: &Url, reference: &str) -> Option<String> {
    if base.cannot_be_a_base() {
        return None;
    }

    let (rest, fragment) = match reference.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (reference, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    // `set_path` resolves `.` and `..` segments of the joined path.
    let mut resolved = base.clone();
    if path.starts_with('/') {
        resolved.set_path(path);
    } else {
        let joined = format!("{}{}", base.path(), path);
        resolved.set_path(&joined);
    }
    resolved.set_query(query);
    resolved.set_fragment(fragment);

    Some(resolved.to_string())
}

/// Host of a URL including a non-default port, e.g. `example.com:8080`.
///
/// Returns an empty string for URLs without a host.
#[must_use]
pub fn host_with_port(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        _ => String::new(),
    }
}

/// Provider URL of a page: lowercase scheme, `://`, host.
///
/// `HTTPS://Example.com/a/b?c` gives `https://example.com`.
#[must_use]
pub fn provider_url(url: &Url) -> String {
    format!("{}://{}", url.scheme().to_lowercase(), host_with_port(url))
}

/// Parse a URL string, logging instead of failing on invalid input.
#[must_use]
pub fn parse_url(url_str: &str) -> Option<Url> {
    match Url::parse(url_str.trim()) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::debug!(url = url_str, error = %err, "ignoring unparseable URL");
            None
        }
    }
}
