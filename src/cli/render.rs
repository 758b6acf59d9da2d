//! `render`: load a feed into a viewer and emit the page it swaps in.

use anyhow::{Context, Result};
use std::path::Path;

use super::common::{read_input, write_output};
use crate::{
    cli::RenderArgs,
    config::PreviewConfig,
    debug,
    feed::XmlDocument,
    log,
    utils::mime::{self, DocumentKind},
    viewer::{DisplayedRoot, LoadedDocument, Viewer},
};

/// Run the render command.
pub fn render_feed(args: &RenderArgs, config: &PreviewConfig) -> Result<()> {
    let content = read_input(&args.input)?;
    let content_type = args
        .content_type
        .clone()
        .unwrap_or_else(|| mime::from_path(&args.input).to_string());
    let location = args
        .location
        .clone()
        .unwrap_or_else(|| default_location(&args.input));

    debug!("render"; "`{}` as `{}` at `{}`", args.input.display(), content_type, location);

    let Some(html) = preview(&content, &content_type, &location, config)
        .with_context(|| format!("could not parse `{}`", args.input.display()))?
    else {
        log!("render"; "skipped `{}`: not a feed ({})", args.input.display(), content_type);
        return Ok(());
    };

    write_output("render", args.output.as_deref(), &html)
}

/// Load `content` the way a browser would and return the preview page, or
/// `None` if the trigger does not apply.
///
/// Parse failures are only errors for feed content types; anything else
/// that isn't XML simply stays as it is.
fn preview(
    content: &str,
    content_type: &str,
    location: &str,
    config: &PreviewConfig,
) -> Result<Option<String>> {
    let document = match XmlDocument::parse(content) {
        Ok(document) => document,
        Err(err) if mime::classify(content_type) == DocumentKind::Feed => return Err(err.into()),
        Err(err) => {
            debug!("render"; "not XML: {}", err);
            return Ok(None);
        }
    };

    let loaded = LoadedDocument::loading(DisplayedRoot::Feed(document), content_type, location);
    let mut viewer = Viewer::load(loaded, config.settings());
    if !viewer.document_parsed() {
        return Ok(None);
    }

    Ok(viewer
        .into_document()
        .presentation()
        .map(|page| page.to_html()))
}

/// `/` + file name of the input.
fn default_location(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    format!("/{name}")
}
