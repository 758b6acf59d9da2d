//! MIME type detection utilities.
//!
//! Decides whether a loaded document is a raw feed (needs the preview
//! transform) or already a presentation page.

use std::path::Path;

/// Common MIME type constants.
pub mod types {
    pub const HTML: &str = "text/html";
    pub const XHTML: &str = "application/xhtml+xml";
    pub const XML: &str = "application/xml";
    pub const TEXT_XML: &str = "text/xml";
    pub const RSS: &str = "application/rss+xml";
    pub const ATOM: &str = "application/atom+xml";
    pub const OCTET_STREAM: &str = "application/octet-stream";

    // Icons
    pub const SVG: &str = "image/svg+xml";
    pub const PNG: &str = "image/png";
    pub const ICO: &str = "image/x-icon";
}

/// What a declared content type says about the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Machine-readable feed XML, as served to newsreaders.
    Feed,
    /// Already a human-readable page.
    Presentation,
    /// Anything else; never transformed.
    Other,
}

/// Strip parameters (`; charset=utf-8`) and normalize case.
pub fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Classify a declared content type.
pub fn classify(content_type: &str) -> DocumentKind {
    match essence(content_type).as_str() {
        types::ATOM | types::RSS | types::XML | types::TEXT_XML => DocumentKind::Feed,
        types::HTML | types::XHTML => DocumentKind::Presentation,
        _ => DocumentKind::Other,
    }
}

/// Guess the declared content type from a file extension.
pub fn from_path(path: &Path) -> &'static str {
    from_extension(path.extension().and_then(|e| e.to_str()))
}

/// Guess MIME type from file extension string.
pub fn from_extension(ext: Option<&str>) -> &'static str {
    match ext.map(str::to_ascii_lowercase).as_deref() {
        Some("atom") => types::ATOM,
        Some("rss") => types::RSS,
        Some("xml") => types::XML,
        Some("html" | "htm") => types::HTML,
        Some("xhtml") => types::XHTML,
        _ => types::OCTET_STREAM,
    }
}

/// Get MIME type for favicon/icon files.
///
/// Defaults to `image/x-icon` for unknown types, which is what browsers
/// assume for favicons anyway.
pub fn for_icon(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("svg") => types::SVG,
        Some("png") => types::PNG,
        _ => types::ICO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_path() {
        assert_eq!(from_path(&PathBuf::from("feed.atom")), types::ATOM);
        assert_eq!(from_path(&PathBuf::from("feed.xml")), types::XML);
        assert_eq!(from_path(&PathBuf::from("index.rss")), types::RSS);
        assert_eq!(from_path(&PathBuf::from("index.HTML")), types::HTML);
        assert_eq!(from_path(&PathBuf::from("unknown.xyz")), types::OCTET_STREAM);
        assert_eq!(from_path(&PathBuf::from("no_extension")), types::OCTET_STREAM);
    }

    #[test]
    fn test_for_icon() {
        assert_eq!(for_icon(&PathBuf::from("favicon.svg")), types::SVG);
        assert_eq!(for_icon(&PathBuf::from("favicon.PNG")), types::PNG);
        assert_eq!(for_icon(&PathBuf::from("favicon.ico")), types::ICO);
        assert_eq!(for_icon(&PathBuf::from("favicon")), types::ICO);
    }

    #[test]
    fn test_classify_feed() {
        assert_eq!(classify("application/atom+xml"), DocumentKind::Feed);
        assert_eq!(classify("application/rss+xml"), DocumentKind::Feed);
        assert_eq!(classify("text/xml; charset=utf-8"), DocumentKind::Feed);
        assert_eq!(classify(" Application/XML "), DocumentKind::Feed);
    }

    #[test]
    fn test_classify_presentation() {
        assert_eq!(classify("text/html"), DocumentKind::Presentation);
        assert_eq!(classify("text/html; charset=utf-8"), DocumentKind::Presentation);
        assert_eq!(classify("application/xhtml+xml"), DocumentKind::Presentation);
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(classify("image/png"), DocumentKind::Other);
        assert_eq!(classify(""), DocumentKind::Other);
    }

    #[test]
    fn test_essence() {
        assert_eq!(essence("Text/HTML; charset=UTF-8"), "text/html");
        assert_eq!(essence(""), "");
    }
}
