//! Feed reading: XML tree, qualified lookups, metadata extraction.
//!
//! ```text
//! feed/
//! ├── xml       # XmlDocument: namespace-resolved tree (quick-xml)
//! ├── lookup    # QualifiedNode + get_text / get_attribute
//! ├── decorate  # stylesheet + viewer script injection for served feeds
//! └── error     # FeedError
//! ```
//!
//! Extraction never fails: a field missing from the source is an empty
//! string, and entries come out in document order, one per `<entry>`.

pub mod decorate;
mod error;
pub mod lookup;
pub mod xml;

pub use error::FeedError;
pub use lookup::{QualifiedNode, get_attribute, get_text};
pub use xml::XmlDocument;

use crate::debug;

/// Atom 1.0 namespace.
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// XHTML namespace, used for elements injected into served feeds.
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Feed-level fields, taken once from the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedMetadata {
    pub title: String,
    pub subtitle: String,
    /// Raw timestamp as written in the feed.
    pub updated_at: String,
}

/// Per-entry fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryMetadata {
    pub title: String,
    pub link: String,
    /// Raw timestamp as written in the feed.
    pub published_at: String,
    pub summary: String,
}

/// Extract feed-level metadata from the feed root.
pub fn extract_feed<N: QualifiedNode>(root: &N, namespace: &str) -> FeedMetadata {
    FeedMetadata {
        title: get_text(root, "title", namespace),
        subtitle: get_text(root, "subtitle", namespace),
        updated_at: get_text(root, "updated", namespace),
    }
}

/// Extract one `EntryMetadata` per `{namespace}entry` descendant, in
/// document order, without filtering.
pub fn extract_entries<N: QualifiedNode>(root: &N, namespace: &str) -> Vec<EntryMetadata> {
    let entries: Vec<EntryMetadata> = root
        .descendants_named(namespace, "entry")
        .into_iter()
        .map(|entry| extract_entry(entry, namespace))
        .collect();

    debug!("extract"; "{} entries", entries.len());
    entries
}

fn extract_entry<N: QualifiedNode>(entry: &N, namespace: &str) -> EntryMetadata {
    EntryMetadata {
        title: get_text(entry, "title", namespace),
        link: get_attribute(entry, "link", namespace, "href"),
        published_at: get_text(entry, "published", namespace),
        summary: get_text(entry, "summary", namespace),
    }
}
