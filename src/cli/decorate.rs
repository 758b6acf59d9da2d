//! `decorate`: prepare a feed file for browser viewing.

use anyhow::{Context, Result};

use super::common::{read_input, write_output};
use crate::{
    cli::DecorateArgs,
    config::PreviewConfig,
    feed::decorate::{DecorateOptions, decorate},
};

/// Run the decorate command.
pub fn decorate_feed(args: &DecorateArgs, config: &PreviewConfig) -> Result<()> {
    let content = read_input(&args.input)?;
    let (stylesheet_href, script_src) = config.decorate_hrefs(&args.web_path);
    let options = DecorateOptions {
        stylesheet_href: &stylesheet_href,
        script_src: &script_src,
    };

    let decorated = decorate(&content, &options)
        .with_context(|| format!("could not decorate `{}`", args.input.display()))?;

    write_output("decorate", args.output.as_deref(), &decorated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{ATOM_NS, XHTML_NS};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(input: PathBuf, output: PathBuf, web_path: &str) -> DecorateArgs {
        DecorateArgs {
            input,
            web_path: web_path.into(),
            output: Some(output),
        }
    }

    #[test]
    fn test_decorate_feed_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("atom.xml");
        let output = dir.path().join("public/atom.xml");
        fs::write(
            &input,
            format!("<?xml version=\"1.0\"?>\n<feed xmlns=\"{ATOM_NS}\"><title>t</title></feed>"),
        )
        .unwrap();

        decorate_feed(&args(input, output.clone(), "/feeds/"), &PreviewConfig::default()).unwrap();

        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.contains("<?xml-stylesheet href='/feeds/styles.css' type='text/css'?>"));
        assert!(xml.contains(&format!(
            r#"<script xmlns="{XHTML_NS}" src="/feeds/rss.js" defer=""/>"#
        )));
    }

    #[test]
    fn test_decorate_feed_twice_is_stable() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("atom.xml");
        let once = dir.path().join("once.xml");
        let twice = dir.path().join("twice.xml");
        fs::write(&input, format!("<feed xmlns=\"{ATOM_NS}\"/>")).unwrap();

        let config = PreviewConfig::default();
        decorate_feed(&args(input, once.clone(), ""), &config).unwrap();
        decorate_feed(&args(once.clone(), twice.clone(), ""), &config).unwrap();

        assert_eq!(
            fs::read_to_string(once).unwrap(),
            fs::read_to_string(twice).unwrap()
        );
    }

    #[test]
    fn test_decorate_rejects_non_xml() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("atom.xml");
        fs::write(&input, "just text").unwrap();

        let err = decorate_feed(
            &args(input, dir.path().join("out.xml"), ""),
            &PreviewConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("could not decorate"));
    }
}
