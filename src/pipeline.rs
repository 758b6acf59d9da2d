//! Feed → preview pipeline.
//!
//! ```text
//! feed root ──extract──▶ FeedMetadata + [EntryMetadata]
//!           ──format───▶ DisplayFeed + [DisplayEntry]   (inside render)
//!           ──render───▶ HtmlDocument
//! ```
//!
//! Run-to-completion and stateless: every call reads one tree and returns
//! one freshly built document.

use crate::{
    feed::{ATOM_NS, QualifiedNode, extract_entries, extract_feed},
    render::{HtmlDocument, PageTemplate, render},
    utils::url::base_path,
};

/// Inputs to a transform run that do not come from the feed itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSettings {
    /// Namespace the feed elements live in.
    pub namespace: String,
    pub template: PageTemplate,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            namespace: ATOM_NS.to_string(),
            template: PageTemplate::default(),
        }
    }
}

/// Extract, format and render a feed rooted at `root`.
///
/// `location` is where the feed is being viewed from; only its directory
/// part is used, to resolve asset references.
pub fn transform<N: QualifiedNode>(
    root: &N,
    location: &str,
    settings: &PreviewSettings,
) -> HtmlDocument {
    let feed = extract_feed(root, &settings.namespace);
    let entries = extract_entries(root, &settings.namespace);
    render(&feed, &entries, &base_path(location), &settings.template)
}
