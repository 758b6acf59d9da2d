//! `[assets]` section: file names of the static assets next to the feed.
//!
//! Every value is a file name resolved against the directory the feed is
//! served from, so absolute paths are rejected.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::render::PageTemplate;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub stylesheet: String,
    pub icon: String,
    pub logo: String,
    /// Viewer script injected into feeds by `decorate`.
    pub script: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        let PageTemplate {
            stylesheet,
            icon,
            logo,
            ..
        } = PageTemplate::default();
        Self {
            stylesheet,
            icon,
            logo,
            script: "rss.js".into(),
        }
    }
}

impl AssetsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let fields = [
            (FieldPath::new("assets.stylesheet"), &self.stylesheet),
            (FieldPath::new("assets.icon"), &self.icon),
            (FieldPath::new("assets.logo"), &self.logo),
            (FieldPath::new("assets.script"), &self.script),
        ];

        for (field, value) in fields {
            if value.trim().is_empty() {
                diag.error(field, "must not be empty");
            } else if value.starts_with('/') {
                diag.error_with_hint(
                    field,
                    format!("absolute path `{value}` is not allowed"),
                    format!("use a name relative to the feed, e.g. `{}`", value.trim_start_matches('/')),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults_are_valid() {
        let config = test_parse_config("");
        assert_eq!(config.assets.stylesheet, "styles.css");
        assert_eq!(config.assets.script, "rss.js");

        let mut diag = ConfigDiagnostics::new();
        config.assets.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_rejects_empty_and_absolute() {
        let config = test_parse_config("[assets]\nstylesheet = \"\"\nlogo = \"/rss.svg\"");

        let mut diag = ConfigDiagnostics::new();
        config.assets.validate(&mut diag);

        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field.as_str(), "assets.stylesheet");
        assert_eq!(diag.errors()[1].field.as_str(), "assets.logo");
        assert!(diag.errors()[1].hint.as_deref().unwrap().contains("`rss.svg`"));
    }

    #[test]
    fn test_subdirectory_names_are_allowed() {
        let config = test_parse_config("[assets]\nicon = \"static/favicon.png\"");
        let mut diag = ConfigDiagnostics::new();
        config.assets.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
