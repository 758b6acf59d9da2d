//! Feed parsing errors.

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Errors raised while turning feed bytes into a document tree.
///
/// Missing elements and attributes are not errors; only input that cannot be
/// read as namespace-well-formed XML ends up here.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("failed to write XML: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("XML content is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("namespace prefix `{0}` is not bound")]
    UnboundPrefix(String),

    #[error("element `{0}` is never closed")]
    UnclosedElement(String),

    #[error("document has no root element")]
    MissingRoot,
}
