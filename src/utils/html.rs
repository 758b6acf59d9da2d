//! HTML utility functions.
//!
//! Provides the markup-safety half of the formatter:
//! - `escape_text()`, `escape_attr()` - HTML entity escaping
//! - `Escaped` - text that has already been neutralized for markup
//! - `is_void_element()` - Self-closing elements (br, img, etc.)
//! - `is_block_element()` - Block-level elements (div, p, etc.)

use std::borrow::Cow;
use std::fmt;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape_text("<script>"), "&lt;script&gt;");
/// assert_eq!(escape_text("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape_text(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Escape HTML attribute values.
///
/// Identical to `escape_text()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Internal: escape with specified character set.
#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

// =============================================================================
// Escaped Text
// =============================================================================

/// Text that is safe to splice into an HTML text node or quoted attribute.
///
/// The only ways to build one are escaping untrusted input or wrapping a
/// `&'static str` literal, so every string that reaches the serializer has
/// gone through `escape_text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Escaped(Cow<'static, str>);

impl Escaped {
    /// Escape untrusted text.
    pub fn text(raw: &str) -> Self {
        Self(Cow::Owned(escape_text(raw).into_owned()))
    }

    /// Escape untrusted attribute content.
    pub fn attr(raw: &str) -> Self {
        Self(Cow::Owned(escape_attr(raw).into_owned()))
    }

    /// Wrap a literal that contains no markup-significant characters.
    pub const fn trusted(literal: &'static str) -> Self {
        Self(Cow::Borrowed(literal))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Escaped {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Element Classification
// =============================================================================

/// Check if an HTML tag is a void element (self-closing).
///
/// Void elements cannot have children and have no closing tag.
#[inline]
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Check if tag is a block-level element (or a document-structure element
/// that the serializer puts on its own line).
#[inline]
pub fn is_block_element(tag: &str) -> bool {
    matches!(
        tag,
        "html"
            | "head"
            | "body"
            | "title"
            | "meta"
            | "link"
            | "article"
            | "aside"
            | "div"
            | "footer"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "header"
            | "main"
            | "nav"
            | "p"
            | "section"
    )
}

// =============================================================================
// Tests
// =============================================================================
