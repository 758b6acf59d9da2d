//! Prepare a feed for browser viewing without changing what newsreaders see.
//!
//! Two references are added to the served XML:
//!
//! 1. an `<?xml-stylesheet?>` instruction right after the XML declaration,
//!    so browsers style the raw feed while the preview loads;
//! 2. an XHTML `<script>` as the first child of the root element, which is
//!    the hook a browser uses to swap the feed for its preview page.
//!
//! Everything else streams through `quick-xml` untouched.

use super::{FeedError, QualifiedNode, XHTML_NS, XmlDocument};
use crate::debug;
use quick_xml::{
    Reader, Writer,
    escape::escape,
    events::{BytesPI, BytesStart, BytesText, Event},
};
use std::str;

/// Where the injected references point.
#[derive(Debug, Clone, Copy)]
pub struct DecorateOptions<'a> {
    pub stylesheet_href: &'a str,
    pub script_src: &'a str,
}

/// Insert the stylesheet instruction and viewer script into `xml`.
///
/// Returns the input unchanged if the root already carries a script with
/// the same `src`. An identical stylesheet instruction is not repeated.
pub fn decorate(xml: &str, options: &DecorateOptions<'_>) -> Result<String, FeedError> {
    if has_viewer_script(xml, options.script_src)? {
        debug!("decorate"; "viewer script already present");
        return Ok(xml.to_string());
    }

    let instruction = stylesheet_instruction(options.stylesheet_href);
    let mut stylesheet_written = has_stylesheet(xml, &instruction)?;
    if stylesheet_written {
        debug!("decorate"; "stylesheet instruction already present");
    }

    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::new());
    let mut root_seen = false;

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Decl(decl) if !stylesheet_written => {
                writer.write_event(Event::Decl(decl))?;
                writer.write_event(Event::Text(BytesText::new("\n")))?;
                write_stylesheet(&mut writer, &instruction)?;
                stylesheet_written = true;
            }
            Event::Start(start) if !root_seen => {
                root_seen = true;
                if !stylesheet_written {
                    write_stylesheet(&mut writer, &instruction)?;
                    writer.write_event(Event::Text(BytesText::new("\n")))?;
                    stylesheet_written = true;
                }
                writer.write_event(Event::Start(start.borrow()))?;
                write_script(&mut writer, options.script_src)?;
            }
            Event::Empty(start) if !root_seen => {
                root_seen = true;
                if !stylesheet_written {
                    write_stylesheet(&mut writer, &instruction)?;
                    writer.write_event(Event::Text(BytesText::new("\n")))?;
                    stylesheet_written = true;
                }
                // `<feed/>` has nowhere to put a child, so expand it
                writer.write_event(Event::Start(start.borrow()))?;
                write_script(&mut writer, options.script_src)?;
                writer.write_event(Event::Text(BytesText::new("\n")))?;
                writer.write_event(Event::End(start.to_end()))?;
            }
            event => writer.write_event(event)?,
        }
    }

    if !root_seen {
        return Err(FeedError::MissingRoot);
    }

    String::from_utf8(writer.into_inner()).map_err(|err| err.utf8_error().into())
}

/// Whether the root element already holds `{xhtml}script[src=script_src]`.
fn has_viewer_script(xml: &str, script_src: &str) -> Result<bool, FeedError> {
    let doc = XmlDocument::parse(xml)?;
    Ok(doc
        .root()
        .descendants_named(XHTML_NS, "script")
        .into_iter()
        .any(|script| script.attribute("src") == Some(script_src)))
}

/// Whether the prolog already holds exactly `instruction`.
fn has_stylesheet(xml: &str, instruction: &str) -> Result<bool, FeedError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::PI(pi) if str::from_utf8(&pi)?.trim() == instruction => return Ok(true),
            Event::Start(_) | Event::Empty(_) | Event::Eof => return Ok(false),
            _ => {}
        }
    }
}

fn stylesheet_instruction(href: &str) -> String {
    format!("xml-stylesheet href='{}' type='text/css'", escape(href))
}

fn write_stylesheet(writer: &mut Writer<Vec<u8>>, instruction: &str) -> Result<(), FeedError> {
    writer.write_event(Event::PI(BytesPI::new(instruction)))?;
    Ok(())
}

fn write_script(writer: &mut Writer<Vec<u8>>, src: &str) -> Result<(), FeedError> {
    let script =
        BytesStart::new("script").with_attributes([("xmlns", XHTML_NS), ("src", src), ("defer", "")]);
    writer.write_event(Event::Text(BytesText::new("\n  ")))?;
    writer.write_event(Event::Empty(script))?;
    Ok(())
}
