//! Preview configuration management for `feed-preview.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── page       # [page]
//! │   ├── assets     # [assets]
//! │   └── feed       # [feed]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # PreviewConfig (this file)
//! ```
//!
//! The file is optional. When it is missing every section keeps its
//! defaults, which reproduce the stock preview page.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{AssetsConfig, FeedConfig, PageConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, RenderArgs},
    debug,
    log,
    pipeline::PreviewSettings,
    render::PageTemplate,
    utils::url::asset_href,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `feed-preview.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PreviewConfig {
    /// Path of the loaded config file, empty when defaults are used
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Page labels
    #[serde(default)]
    pub page: PageConfig,

    /// Asset file names
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Feed recognition
    #[serde(default)]
    pub feed: FeedConfig,
}

impl PreviewConfig {
    /// Load configuration for the parsed command line.
    ///
    /// Searches upward from cwd for the config file, applies command
    /// overrides, then validates the result.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "`{}` not found, using defaults", cli.config.display());
                Self::default()
            }
        };

        config.apply_command_options(cli);
        if !config.config_path.as_os_str().is_empty() {
            debug!("config"; "loaded {}", config.config_path.display());
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        match &cli.command {
            Commands::Render { args } => self.apply_render_args(args),
            Commands::Decorate { .. } => {}
        }
    }

    fn apply_render_args(&mut self, args: &RenderArgs) {
        Self::update_option(&mut self.feed.namespace, args.namespace.as_ref());
        Self::update_option(&mut self.page.lang, args.lang.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, reporting all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.assets.validate(&mut diag);
        self.feed.validate(&mut diag);

        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    // ========================================================================
    // conversions
    // ========================================================================

    /// Page labels and asset names for the renderer.
    pub fn template(&self) -> PageTemplate {
        PageTemplate {
            lang: self.page.lang.clone(),
            title_prefix: self.page.title_prefix.clone(),
            heading: self.page.heading.clone(),
            entries_heading: self.page.entries_heading.clone(),
            instructions: self.page.instructions.clone(),
            stylesheet: self.assets.stylesheet.clone(),
            icon: self.assets.icon.clone(),
            logo: self.assets.logo.clone(),
        }
    }

    /// Everything a transform run needs besides the feed.
    pub fn settings(&self) -> PreviewSettings {
        PreviewSettings {
            namespace: self.feed.namespace.clone(),
            template: self.template(),
        }
    }

    /// Asset references injected by `decorate`, under `web_path`.
    pub fn decorate_hrefs(&self, web_path: &str) -> (String, String) {
        (
            asset_href(web_path, &self.assets.stylesheet),
            asset_href(web_path, &self.assets.script),
        )
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> PreviewConfig {
    let (parsed, ignored) = PreviewConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::ATOM_NS;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("feed-preview").chain(args.iter().copied()))
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(PreviewConfig::from_str("[page\nlang = \"en\"").is_err());
    }

    #[test]
    fn test_empty_config_matches_defaults() {
        let config = PreviewConfig::from_str("").unwrap();
        assert_eq!(config, PreviewConfig::default());
        assert_eq!(config.template(), PageTemplate::default());
        assert_eq!(config.settings(), PreviewSettings::default());
    }

    #[test]
    fn test_parse_with_ignored_reports_unknown_fields() {
        let (config, ignored) =
            PreviewConfig::parse_with_ignored("[page]\nlang = \"nl\"\ncolour = \"red\"\n[extra]\nx = 1")
                .unwrap();
        assert_eq!(config.page.lang, "nl");
        assert_eq!(ignored, vec!["page.colour".to_string(), "extra".to_string()]);
    }

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("feed-preview.toml");
        let cli = cli(&["-C", missing.to_str().unwrap(), "render", "atom.xml"]);

        let config = PreviewConfig::load(&cli).unwrap();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.feed.namespace, ATOM_NS);
    }

    #[test]
    fn test_load_reads_file_and_applies_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feed-preview.toml");
        fs::write(
            &path,
            "[page]\nlang = \"de\"\ntitle_prefix = \"Vorschau\"\n[assets]\nlogo = \"logo.png\"\n",
        )
        .unwrap();

        let cli = cli(&[
            "-C",
            path.to_str().unwrap(),
            "render",
            "atom.xml",
            "--lang",
            "sv",
            "--namespace",
            "urn:example:feed",
        ]);
        let config = PreviewConfig::load(&cli).unwrap();

        assert_eq!(config.config_path, path);
        assert_eq!(config.page.lang, "sv");
        assert_eq!(config.page.title_prefix, "Vorschau");
        assert_eq!(config.assets.logo, "logo.png");
        assert_eq!(config.settings().namespace, "urn:example:feed");
        assert_eq!(config.settings().template.logo, "logo.png");
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feed-preview.toml");
        fs::write(&path, "[assets]\nicon = \"/favicon.svg\"\n[feed]\nnamespace = \"\"\n").unwrap();

        let cli = cli(&["-C", path.to_str().unwrap(), "decorate", "atom.xml"]);
        let err = PreviewConfig::load(&cli).unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feed-preview.toml");
        fs::write(&path, "[page]\nlang = en\n").unwrap();

        let cli = cli(&["-C", path.to_str().unwrap(), "render", "atom.xml"]);
        let err = PreviewConfig::load(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse"));
    }

    #[test]
    fn test_decorate_hrefs() {
        let config = PreviewConfig::default();
        let hrefs = config.decorate_hrefs("/feeds/");
        assert_eq!(hrefs, ("/feeds/styles.css".to_string(), "/feeds/rss.js".to_string()));
    }
}
