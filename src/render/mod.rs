//! Renderer: builds the preview page from feed metadata.
//!
//! # Page Structure
//!
//! ```text
//! html[lang]
//! ├── head
//! │   ├── meta[charset], meta[viewport]
//! │   ├── title            "{title_prefix} | {feed title}"
//! │   └── link[stylesheet], link[icon]
//! └── body > main
//!     ├── header
//!     │   ├── img          logo
//!     │   ├── h1           heading
//!     │   ├── p.meta       "Updated on {updated}"
//!     │   ├── p            subtitle
//!     │   └── p            instructions
//!     ├── h2               entries heading
//!     └── article*         one per entry, document order
//!         ├── h3 > a[href] title
//!         ├── p.meta       "Published on {published}"
//!         └── p            summary (only if non-empty)
//! ```

pub mod format;
pub mod node;

pub use format::{DisplayEntry, DisplayFeed, format_entry, format_feed};
pub use node::{HtmlDocument, HtmlElement};

use crate::{
    debug,
    feed::{EntryMetadata, FeedMetadata},
    utils::{html::Escaped, mime, url::asset_href},
};
use std::path::Path;

/// Labels and asset names for the preview page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    pub lang: String,
    pub title_prefix: String,
    pub heading: String,
    pub entries_heading: String,
    pub instructions: String,
    pub stylesheet: String,
    pub icon: String,
    pub logo: String,
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self {
            lang: "en".into(),
            title_prefix: "RSS feed preview".into(),
            heading: "RSS feed preview".into(),
            entries_heading: "Recent blog posts".into(),
            instructions: "Subscribe by copying the URL from the address bar into your newsreader."
                .into(),
            stylesheet: "styles.css".into(),
            icon: "favicon.svg".into(),
            logo: "rss.svg".into(),
        }
    }
}

/// Build the presentation document.
///
/// `base_path` is the directory of the current location; asset references
/// are resolved against it. Every field may be empty.
pub fn render(
    feed: &FeedMetadata,
    entries: &[EntryMetadata],
    base_path: &str,
    template: &PageTemplate,
) -> HtmlDocument {
    let feed = format_feed(feed);

    let mut main = HtmlElement::new("main")
        .child(render_header(&feed, base_path, template))
        .child(HtmlElement::new("h2").text(Escaped::text(&template.entries_heading)));
    for entry in entries {
        main.push(render_entry(&format_entry(entry)));
    }

    debug!("render"; "{} entry blocks, base path `{}`", entries.len(), base_path);

    HtmlDocument::new(
        HtmlElement::new("html")
            .attr("lang", Escaped::attr(&template.lang))
            .child(render_head(&feed, base_path, template))
            .child(HtmlElement::new("body").child(main)),
    )
}

fn render_head(feed: &DisplayFeed, base_path: &str, template: &PageTemplate) -> HtmlElement {
    let title = format!("{} | {}", template.title_prefix, feed.raw_title);
    let icon_type = mime::for_icon(Path::new(&template.icon));

    HtmlElement::new("head")
        .child(HtmlElement::new("meta").attr("charset", Escaped::trusted("utf-8")))
        .child(
            HtmlElement::new("meta")
                .attr("name", Escaped::trusted("viewport"))
                .attr("content", Escaped::trusted("width=device-width, initial-scale=1")),
        )
        .child(HtmlElement::new("title").text(Escaped::text(&title)))
        .child(
            HtmlElement::new("link")
                .attr("rel", Escaped::trusted("stylesheet"))
                .attr("href", Escaped::attr(&asset_href(base_path, &template.stylesheet))),
        )
        .child(
            HtmlElement::new("link")
                .attr("rel", Escaped::trusted("icon"))
                .attr("type", Escaped::attr(icon_type))
                .attr("href", Escaped::attr(&asset_href(base_path, &template.icon))),
        )
}

fn render_header(feed: &DisplayFeed, base_path: &str, template: &PageTemplate) -> HtmlElement {
    HtmlElement::new("header")
        .child(
            HtmlElement::new("img")
                .attr("src", Escaped::attr(&asset_href(base_path, &template.logo)))
                .attr("class", Escaped::trusted("rim"))
                .attr("style", Escaped::trusted("width:100px"))
                .attr("alt", Escaped::trusted("RSS icon")),
        )
        .child(HtmlElement::new("h1").text(Escaped::text(&template.heading)))
        .child(
            HtmlElement::new("p")
                .attr("class", Escaped::trusted("meta"))
                .text(Escaped::trusted("Updated on "))
                .text(feed.updated.clone()),
        )
        .child(HtmlElement::new("p").text(feed.subtitle.clone()))
        .child(HtmlElement::new("p").text(Escaped::text(&template.instructions)))
}

fn render_entry(entry: &DisplayEntry) -> HtmlElement {
    let heading = HtmlElement::new("h3").child(
        HtmlElement::new("a")
            .attr("href", entry.href.clone())
            .text(entry.title.clone()),
    );
    let published = HtmlElement::new("p")
        .attr("class", Escaped::trusted("meta"))
        .text(Escaped::trusted("Published on "))
        .text(entry.published.clone());

    let mut article = HtmlElement::new("article").child(heading).child(published);
    if let Some(summary) = &entry.summary {
        article.push(HtmlElement::new("p").text(summary.clone()));
    }
    article
}
