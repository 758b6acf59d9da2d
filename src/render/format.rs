//! Formatter stage: extracted metadata → display-ready, escaped values.

use crate::feed::{EntryMetadata, FeedMetadata};
use crate::utils::{
    date::format_date,
    html::Escaped,
    url::sanitize_href,
};

/// Feed-level values ready for the page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFeed {
    /// Unescaped title, still needed to compose the page `<title>`.
    pub raw_title: String,
    pub subtitle: Escaped,
    pub updated: Escaped,
}

/// Entry values ready for one entry block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub title: Escaped,
    pub href: Escaped,
    pub published: Escaped,
    /// `None` when the source summary is empty; no paragraph is emitted.
    pub summary: Option<Escaped>,
}

/// Normalize feed metadata.
pub fn format_feed(feed: &FeedMetadata) -> DisplayFeed {
    DisplayFeed {
        raw_title: feed.title.trim().to_string(),
        subtitle: Escaped::text(feed.subtitle.trim()),
        updated: Escaped::text(&format_date(feed.updated_at.trim())),
    }
}

/// Normalize one entry.
pub fn format_entry(entry: &EntryMetadata) -> DisplayEntry {
    let summary = entry.summary.trim();
    DisplayEntry {
        title: Escaped::text(entry.title.trim()),
        href: Escaped::attr(sanitize_href(entry.link.trim())),
        published: Escaped::text(&format_date(entry.published_at.trim())),
        summary: (!summary.is_empty()).then(|| Escaped::text(summary)),
    }
}
