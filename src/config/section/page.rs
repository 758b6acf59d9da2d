//! `[page]` section: labels shown on the preview page.

use crate::render::PageTemplate;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `lang` attribute of the root element.
    pub lang: String,
    /// Text before the feed title in `<title>`.
    pub title_prefix: String,
    pub heading: String,
    pub entries_heading: String,
    /// Subscription hint under the subtitle.
    pub instructions: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        let PageTemplate {
            lang,
            title_prefix,
            heading,
            entries_heading,
            instructions,
            ..
        } = PageTemplate::default();
        Self {
            lang,
            title_prefix,
            heading,
            entries_heading,
            instructions,
        }
    }
}
