//! Namespace-resolved XML document tree.
//!
//! Feeds are small, so the whole document is read into an owned tree with
//! every element tagged by its resolved namespace URI. Lookups then work on
//! `(namespace, local name)` pairs and never on prefixes, which makes
//! `<feed xmlns="...">` and `<a:feed xmlns:a="...">` equivalent.

use super::error::FeedError;
use super::lookup::QualifiedNode;
use quick_xml::{
    escape::resolve_predefined_entity,
    events::{BytesStart, Event},
    name::ResolveResult,
    reader::NsReader,
};
use std::{borrow::Cow, str};

// ============================================================================
// Tree Types
// ============================================================================

/// A parsed XML document. Only the root element is kept; prolog content
/// (declaration, processing instructions, doctype) is dropped.
#[derive(Debug, Clone)]
pub struct XmlDocument {
    root: XmlElement,
}

/// An element with its resolved namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    namespace: Option<String>,
    local_name: String,
    /// Attributes by qualified name as written (`href`, `xml:lang`).
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

// ============================================================================
// Parsing
// ============================================================================

impl XmlDocument {
    /// Parse a complete XML document.
    pub fn parse(xml: &str) -> Result<Self, FeedError> {
        let mut reader = NsReader::from_str(xml);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            let (resolved, event) = reader.read_resolved_event()?;
            let namespace = namespace_uri(resolved)?;

            match event {
                Event::Start(start) => {
                    stack.push(XmlElement::from_start(namespace, &start)?);
                }
                Event::Empty(start) => {
                    let element = XmlElement::from_start(namespace, &start)?;
                    attach(&mut stack, &mut root, element);
                }
                Event::End(_) => {
                    if let Some(element) = stack.pop() {
                        attach(&mut stack, &mut root, element);
                    }
                }
                Event::Text(text) => push_text(&mut stack, str::from_utf8(&text)?),
                Event::CData(data) => push_text(&mut stack, str::from_utf8(&data)?),
                Event::GeneralRef(reference) => {
                    if let Some(ch) = reference.resolve_char_ref()? {
                        push_text(&mut stack, ch.encode_utf8(&mut [0; 4]));
                    } else {
                        let name = str::from_utf8(&reference)?;
                        match resolve_predefined_entity(name) {
                            Some(value) => push_text(&mut stack, value),
                            // Undeclared entity: keep it visible rather than fail
                            None => push_text(&mut stack, &format!("&{name};")),
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.pop() {
            return Err(FeedError::UnclosedElement(open.local_name));
        }

        root.map(|root| Self { root }).ok_or(FeedError::MissingRoot)
    }

    /// The document element.
    pub fn root(&self) -> &XmlElement {
        &self.root
    }
}

/// Turn a resolved namespace into an owned URI.
fn namespace_uri(resolved: ResolveResult<'_>) -> Result<Option<String>, FeedError> {
    match resolved {
        ResolveResult::Bound(ns) => Ok(Some(str::from_utf8(ns.as_ref())?.to_string())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(FeedError::UnboundPrefix(
            String::from_utf8_lossy(&prefix).into_owned(),
        )),
    }
}

/// Append a finished element to its parent, or make it the root.
///
/// Anything after the first root element is ignored.
fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(XmlNode::Element(element)),
        None if root.is_none() => *root = Some(element),
        None => {}
    }
}

/// Append text to the open element, merging with a preceding text node so
/// entity references do not fragment the content.
fn push_text(stack: &mut [XmlElement], text: &str) {
    let Some(parent) = stack.last_mut() else {
        return;
    };
    match parent.children.last_mut() {
        Some(XmlNode::Text(existing)) => existing.push_str(text),
        _ => parent.children.push(XmlNode::Text(text.to_string())),
    }
}

/// Unescape an attribute value. Unknown entity references and a stray `&`
/// are kept as written, the same way text content treats them.
fn unescape_lenient(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let Some(end) = tail.find(';') else {
            out.push_str(tail);
            return Cow::Owned(out);
        };
        let name = &tail[1..end];
        if !resolve_reference(name, &mut out) {
            out.push_str(&tail[..=end]);
        }
        rest = &tail[end + 1..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Push the replacement for `&name;` onto `out`. Returns `false` if the
/// reference is neither predefined nor a valid character reference.
fn resolve_reference(name: &str, out: &mut String) -> bool {
    if let Some(value) = resolve_predefined_entity(name) {
        out.push_str(value);
        return true;
    }

    let code = name.strip_prefix('#').and_then(|num| match num.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => num.parse().ok(),
    });
    match code.and_then(char::from_u32) {
        Some(ch) => {
            out.push(ch);
            true
        }
        None => false,
    }
}

impl XmlElement {
    fn from_start(
        namespace: Option<String>,
        start: &BytesStart<'_>,
    ) -> Result<Self, FeedError> {
        let local_name = str::from_utf8(start.local_name().as_ref())?.to_string();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = str::from_utf8(attr.key.as_ref())?.to_string();
            let value = unescape_lenient(str::from_utf8(&attr.value)?).into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            namespace,
            local_name,
            attributes,
            children: Vec::new(),
        })
    }

    /// Resolved namespace URI, `None` for elements in no namespace.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Whether this element is `{namespace}local_name`.
    pub fn is(&self, namespace: &str, local_name: &str) -> bool {
        self.local_name == local_name && self.namespace.as_deref() == Some(namespace)
    }

    /// All descendant elements in document order (self excluded).
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Text(text) => out.push_str(text),
                XmlNode::Element(element) => element.collect_text(out),
            }
        }
    }
}

/// Pre-order walk over descendant elements.
pub struct Descendants<'a> {
    stack: Vec<std::slice::Iter<'a, XmlNode>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(XmlNode::Element(element)) => {
                    self.stack.push(element.children.iter());
                    return Some(element);
                }
                Some(XmlNode::Text(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

// ============================================================================
// Lookup Capability
// ============================================================================

impl QualifiedNode for XmlElement {
    fn first_descendant(&self, namespace: &str, local_name: &str) -> Option<&Self> {
        self.descendants().find(|el| el.is(namespace, local_name))
    }

    fn descendants_named(&self, namespace: &str, local_name: &str) -> Vec<&Self> {
        self.descendants()
            .filter(|el| el.is(namespace, local_name))
            .collect()
    }

    fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ATOM: &str = "http://www.w3.org/2005/Atom";

    #[test]
    fn test_parse_default_namespace() {
        let doc = XmlDocument::parse(r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>T</title></feed>"#)
            .unwrap();
        let root = doc.root();
        assert!(root.is(ATOM, "feed"));
        assert_eq!(root.children().len(), 1);
    }

    #[test]
    fn test_parse_prefixed_namespace() {
        let doc = XmlDocument::parse(
            r#"<a:feed xmlns:a="http://www.w3.org/2005/Atom"><a:title>T</a:title></a:feed>"#,
        )
        .unwrap();
        let title = doc.root().first_descendant(ATOM, "title").unwrap();
        assert_eq!(title.local_name(), "title");
        assert_eq!(title.namespace(), Some(ATOM));
    }

    #[test]
    fn test_other_namespace_is_not_matched() {
        let doc = XmlDocument::parse(
            r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:dc="http://purl.org/dc/elements/1.1/">
                <dc:title>wrong</dc:title>
                <title>right</title>
            </feed>"#,
        )
        .unwrap();
        let title = doc.root().first_descendant(ATOM, "title").unwrap();
        assert_eq!(title.text_content(), "right");
    }

    #[test]
    fn test_no_namespace_element() {
        let doc = XmlDocument::parse("<feed><title>T</title></feed>").unwrap();
        assert_eq!(doc.root().namespace(), None);
        assert!(doc.root().first_descendant(ATOM, "title").is_none());
    }

    #[test]
    fn test_entities_are_resolved_and_merged() {
        let doc = XmlDocument::parse(
            r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>Tom &amp; Jerry &#65;&#x42; &lt;3</title></feed>"#,
        )
        .unwrap();
        let title = doc.root().first_descendant(ATOM, "title").unwrap();
        assert_eq!(title.text_content(), "Tom & Jerry AB <3");
        assert_eq!(title.children().len(), 1);
    }

    #[test]
    fn test_cdata_text() {
        let doc = XmlDocument::parse(
            r#"<feed xmlns="http://www.w3.org/2005/Atom"><summary><![CDATA[<b>bold</b>]]></summary></feed>"#,
        )
        .unwrap();
        let summary = doc.root().first_descendant(ATOM, "summary").unwrap();
        assert_eq!(summary.text_content(), "<b>bold</b>");
    }

    #[test]
    fn test_attributes_unescaped() {
        let doc = XmlDocument::parse(
            r#"<feed xmlns="http://www.w3.org/2005/Atom"><link href="https://x.test/?a=1&amp;b=2"/></feed>"#,
        )
        .unwrap();
        let link = doc.root().first_descendant(ATOM, "link").unwrap();
        assert_eq!(link.attribute("href"), Some("https://x.test/?a=1&b=2"));
        assert_eq!(link.attribute("rel"), None);
    }

    #[test]
    fn test_unknown_entity_in_attribute_is_kept() {
        let doc = XmlDocument::parse(
            r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>t&nbsp;x</title><entry><link href="a&nbsp;b&amp;c"/></entry></feed>"#,
        )
        .unwrap();
        let title = doc.root().first_descendant(ATOM, "title").unwrap();
        assert_eq!(title.text_content(), "t&nbsp;x");
        let link = doc.root().first_descendant(ATOM, "link").unwrap();
        assert_eq!(link.attribute("href"), Some("a&nbsp;b&c"));
    }

    #[test]
    fn test_unescape_lenient() {
        assert!(matches!(unescape_lenient("plain"), Cow::Borrowed("plain")));
        assert_eq!(unescape_lenient("&lt;&#65;&#x42;&gt;"), "<AB>");
        assert_eq!(unescape_lenient("a&b"), "a&b");
        assert_eq!(unescape_lenient("&bogus; &#xZZ; &"), "&bogus; &#xZZ; &");
    }

    #[test]
    fn test_descendants_document_order() {
        let doc = XmlDocument::parse(
            r#"<feed xmlns="http://www.w3.org/2005/Atom">
                <entry><title>1</title></entry>
                <entry><title>2</title><entry><title>3</title></entry></entry>
            </feed>"#,
        )
        .unwrap();
        let titles: Vec<String> = doc
            .root()
            .descendants_named(ATOM, "title")
            .into_iter()
            .map(QualifiedNode::text_content)
            .collect();
        assert_eq!(titles, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_prolog_is_skipped() {
        let doc = XmlDocument::parse(
            "<?xml version='1.0' encoding='UTF-8'?>\n<?xml-stylesheet href='styles.css' type='text/css'?>\n<feed xmlns=\"http://www.w3.org/2005/Atom\"/>",
        )
        .unwrap();
        assert!(doc.root().is(ATOM, "feed"));
        assert!(doc.root().children().is_empty());
    }

    #[test]
    fn test_unbound_prefix_is_error() {
        let err = XmlDocument::parse("<x:feed/>").unwrap_err();
        assert!(matches!(err, FeedError::UnboundPrefix(prefix) if prefix == "x"));
    }

    #[test]
    fn test_empty_input_has_no_root() {
        assert!(matches!(XmlDocument::parse(""), Err(FeedError::MissingRoot)));
        assert!(matches!(
            XmlDocument::parse("<?xml version='1.0'?>"),
            Err(FeedError::MissingRoot)
        ));
    }

    #[test]
    fn test_mismatched_end_tag_is_error() {
        assert!(XmlDocument::parse("<feed><title></feed>").is_err());
    }
}
