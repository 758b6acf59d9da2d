//! Trigger and swap: the one-shot feed → preview transition.
//!
//! A `Viewer` holds the currently displayed document and moves through two
//! states:
//!
//! ```text
//! Pending ──(document parsed && content type is a feed)──▶ Transformed
//! ```
//!
//! The transition fires at most once per loaded document. It happens when
//! the host reports the document as parsed, or immediately on load if it
//! already is. The new page is built completely before the displayed root
//! is replaced, so observers only ever see the old root or the new one.

use crate::{
    debug,
    feed::XmlDocument,
    log,
    pipeline::{PreviewSettings, transform},
    render::HtmlDocument,
    utils::mime::{self, DocumentKind},
};

/// Parse progress reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Parsed,
}

/// Whether the preview has replaced the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformState {
    Pending,
    Transformed,
}

/// What is currently on display.
#[derive(Debug, Clone)]
pub enum DisplayedRoot {
    Feed(XmlDocument),
    Presentation(HtmlDocument),
}

/// A document as loaded by the host, with its declared content type and
/// the location it was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    content_type: String,
    location: String,
    ready: ReadyState,
    root: DisplayedRoot,
}

impl LoadedDocument {
    /// A document still being parsed.
    pub fn loading(
        root: DisplayedRoot,
        content_type: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            content_type: content_type.into(),
            location: location.into(),
            ready: ReadyState::Loading,
            root,
        }
    }

    /// A document that is already fully parsed.
    pub fn parsed(
        root: DisplayedRoot,
        content_type: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            ready: ReadyState::Parsed,
            ..Self::loading(root, content_type, location)
        }
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready
    }

    pub fn root(&self) -> &DisplayedRoot {
        &self.root
    }

    /// The displayed page, once the preview is showing.
    pub fn presentation(&self) -> Option<&HtmlDocument> {
        match &self.root {
            DisplayedRoot::Presentation(page) => Some(page),
            DisplayedRoot::Feed(_) => None,
        }
    }

    /// Swap the displayed root, returning the previous one.
    fn replace_root(&mut self, root: DisplayedRoot) -> DisplayedRoot {
        std::mem::replace(&mut self.root, root)
    }
}

/// Display surface that runs the preview transform once per load.
#[derive(Debug)]
pub struct Viewer {
    document: LoadedDocument,
    settings: PreviewSettings,
    state: TransformState,
}

impl Viewer {
    /// Load a document. If it is already parsed, the trigger is evaluated
    /// right away; otherwise it waits for `document_parsed()`.
    pub fn load(document: LoadedDocument, settings: PreviewSettings) -> Self {
        let mut viewer = Self {
            document,
            settings,
            state: TransformState::Pending,
        };
        if viewer.document.ready == ReadyState::Parsed {
            viewer.fire();
        }
        viewer
    }

    /// Host event: the document finished parsing.
    ///
    /// Returns `true` if this call performed the transition.
    pub fn document_parsed(&mut self) -> bool {
        if self.document.ready == ReadyState::Parsed {
            return false;
        }
        self.document.ready = ReadyState::Parsed;
        self.fire()
    }

    pub fn state(&self) -> TransformState {
        self.state
    }

    pub fn document(&self) -> &LoadedDocument {
        &self.document
    }

    pub fn into_document(self) -> LoadedDocument {
        self.document
    }

    /// Whether the transform should run now.
    fn applies(&self) -> bool {
        self.state == TransformState::Pending
            && self.document.ready == ReadyState::Parsed
            && mime::classify(&self.document.content_type) == DocumentKind::Feed
            && matches!(self.document.root, DisplayedRoot::Feed(_))
    }

    fn fire(&mut self) -> bool {
        if !self.applies() {
            debug!(
                "trigger";
                "skipped: state {:?}, content type `{}`",
                self.state,
                self.document.content_type
            );
            return false;
        }

        let DisplayedRoot::Feed(feed) = &self.document.root else {
            return false;
        };
        let page = transform(feed.root(), &self.document.location, &self.settings);

        self.document
            .replace_root(DisplayedRoot::Presentation(page));
        self.state = TransformState::Transformed;

        log!("swap"; "feed at `{}` replaced with preview", self.document.location);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<feed xmlns="http://www.w3.org/2005/Atom">
        <title>My Blog</title>
        <entry><title>Hello</title><link href="https://example.com/1"/></entry>
    </feed>"#;

    fn feed_root() -> DisplayedRoot {
        DisplayedRoot::Feed(XmlDocument::parse(FEED).unwrap())
    }

    #[test]
    fn test_fires_immediately_when_already_parsed() {
        let doc = LoadedDocument::parsed(feed_root(), "application/atom+xml", "/atom.xml");
        let viewer = Viewer::load(doc, PreviewSettings::default());

        assert_eq!(viewer.state(), TransformState::Transformed);
        let page = viewer.document().presentation().unwrap();
        assert_eq!(
            page.root().find("title").unwrap().text_content(),
            "RSS feed preview | My Blog"
        );
    }

    #[test]
    fn test_waits_for_parsed_event() {
        let doc = LoadedDocument::loading(feed_root(), "application/atom+xml", "/atom.xml");
        let mut viewer = Viewer::load(doc, PreviewSettings::default());

        assert_eq!(viewer.state(), TransformState::Pending);
        assert!(matches!(viewer.document().root(), DisplayedRoot::Feed(_)));

        assert!(viewer.document_parsed());
        assert_eq!(viewer.state(), TransformState::Transformed);
        assert_eq!(viewer.document().ready_state(), ReadyState::Parsed);
    }

    #[test]
    fn test_fires_only_once() {
        let doc = LoadedDocument::loading(feed_root(), "application/atom+xml", "/atom.xml");
        let mut viewer = Viewer::load(doc, PreviewSettings::default());

        assert!(viewer.document_parsed());
        let first = viewer.document().presentation().cloned();

        assert!(!viewer.document_parsed());
        assert_eq!(viewer.state(), TransformState::Transformed);
        assert_eq!(viewer.document().presentation().cloned(), first);
    }

    #[test]
    fn test_presentation_content_type_is_left_alone() {
        let doc = LoadedDocument::parsed(feed_root(), "text/html; charset=utf-8", "/index.html");
        let viewer = Viewer::load(doc, PreviewSettings::default());

        assert_eq!(viewer.state(), TransformState::Pending);
        assert!(viewer.document().presentation().is_none());
    }

    #[test]
    fn test_unknown_content_type_is_left_alone() {
        let doc = LoadedDocument::loading(feed_root(), "application/octet-stream", "/blob");
        let mut viewer = Viewer::load(doc, PreviewSettings::default());

        assert!(!viewer.document_parsed());
        assert_eq!(viewer.state(), TransformState::Pending);
    }

    #[test]
    fn test_presentation_root_is_never_transformed() {
        let page = crate::render::render(
            &Default::default(),
            &[],
            "/",
            &crate::render::PageTemplate::default(),
        );
        let doc = LoadedDocument::parsed(
            DisplayedRoot::Presentation(page.clone()),
            "application/atom+xml",
            "/atom.xml",
        );
        let viewer = Viewer::load(doc, PreviewSettings::default());

        assert_eq!(viewer.state(), TransformState::Pending);
        assert_eq!(viewer.document().presentation(), Some(&page));
    }

    #[test]
    fn test_location_sets_asset_base() {
        let doc = LoadedDocument::parsed(feed_root(), "application/xml", "https://example.com/links/atom.xml");
        let viewer = Viewer::load(doc, PreviewSettings::default());
        let html = viewer.into_document().presentation().unwrap().to_html();
        assert!(html.contains(r#"href="/links/styles.css""#));
    }
}
