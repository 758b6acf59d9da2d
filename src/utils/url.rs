//! URL helpers for the preview page.
//!
//! - `base_path()` - directory part of the location the feed is served from
//! - `asset_href()` - asset reference relative to that directory
//! - `sanitize_href()` - drop entry links with script-capable schemes

use url::{ParseError, Url};

/// Schemes an entry link may carry into an `href`.
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Directory portion of the current location, including the trailing slash.
///
/// Accepts either a full URL or a bare path. A location without any `/`
/// yields `""`, so assets resolve relative to whatever the viewer uses.
///
/// # Examples
/// ```ignore
/// base_path("https://example.com/blog/atom.xml") -> "/blog/"
/// base_path("/feeds/atom.xml")                   -> "/feeds/"
/// base_path("atom.xml")                          -> ""
/// ```
pub fn base_path(location: &str) -> String {
    let path = match Url::parse(location) {
        Ok(url) => url.path().to_string(),
        Err(_) => location
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    match path.rfind('/') {
        Some(idx) => path[..=idx].to_string(),
        None => String::new(),
    }
}

/// Resolve an asset file name against the base path.
#[inline]
pub fn asset_href(base_path: &str, file_name: &str) -> String {
    format!("{base_path}{file_name}")
}

/// Keep a link only if following it cannot execute script.
///
/// Absolute URLs must use one of `SAFE_SCHEMES`; relative references pass
/// through. Everything else becomes `""`.
pub fn sanitize_href(link: &str) -> &str {
    match Url::parse(link) {
        Ok(url) if SAFE_SCHEMES.contains(&url.scheme()) => link,
        Ok(_) => "",
        Err(ParseError::RelativeUrlWithoutBase) => link,
        Err(_) => "",
    }
}
