//! Presentation document tree and serializer.
//!
//! The renderer builds the whole page as a value first; nothing is written
//! until `HtmlDocument::to_html()` runs. Text and attribute values are
//! `Escaped`, so the serializer copies them verbatim.

use crate::utils::html::{Escaped, is_block_element, is_void_element};
use std::fmt;

/// A node in the presentation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Element(HtmlElement),
    Text(Escaped),
}

/// An HTML element with escaped attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlElement {
    tag: &'static str,
    attributes: Vec<(&'static str, Escaped)>,
    children: Vec<HtmlNode>,
}

impl HtmlElement {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: add an attribute.
    pub fn attr(mut self, name: &'static str, value: Escaped) -> Self {
        self.attributes.push((name, value));
        self
    }

    /// Builder: append a text child.
    pub fn text(mut self, text: Escaped) -> Self {
        self.children.push(HtmlNode::Text(text));
        self
    }

    /// Builder: append an element child.
    pub fn child(mut self, child: HtmlElement) -> Self {
        self.push(child);
        self
    }

    pub fn push(&mut self, child: HtmlElement) {
        self.children.push(HtmlNode::Element(child));
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&Escaped> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    /// Direct element children.
    pub fn elements(&self) -> impl Iterator<Item = &HtmlElement> {
        self.children.iter().filter_map(|node| match node {
            HtmlNode::Element(element) => Some(element),
            HtmlNode::Text(_) => None,
        })
    }

    /// All descendant elements with `tag`, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<&HtmlElement> {
        let mut found = Vec::new();
        self.collect(tag, &mut found);
        found
    }

    /// First descendant element with `tag`.
    pub fn find(&self, tag: &str) -> Option<&HtmlElement> {
        self.find_all(tag).into_iter().next()
    }

    /// Concatenated (escaped) text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                HtmlNode::Text(text) => out.push_str(text.as_str()),
                HtmlNode::Element(element) => out.push_str(&element.text_content()),
            }
        }
        out
    }

    fn collect<'a>(&'a self, tag: &str, found: &mut Vec<&'a HtmlElement>) {
        for element in self.elements() {
            if element.tag == tag {
                found.push(element);
            }
            element.collect(tag, found);
        }
    }

    /// Serialize with two-space indentation for elements that hold blocks.
    fn write_to(&self, out: &mut String, depth: usize) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value.as_str());
            out.push('"');
        }
        out.push('>');

        if is_void_element(self.tag) {
            return;
        }

        let has_blocks = self.elements().any(|el| is_block_element(el.tag));
        for child in &self.children {
            if has_blocks {
                out.push('\n');
                push_indent(out, depth + 1);
            }
            match child {
                HtmlNode::Text(text) => out.push_str(text.as_str()),
                HtmlNode::Element(element) => element.write_to(out, depth + 1),
            }
        }
        if has_blocks {
            out.push('\n');
            push_indent(out, depth);
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// A complete presentation document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    root: HtmlElement,
}

impl HtmlDocument {
    pub fn new(root: HtmlElement) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &HtmlElement {
        &self.root
    }

    /// Serialize as an HTML5 document.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n");
        self.root.write_to(&mut out, 0);
        out.push('\n');
        out
    }
}

impl fmt::Display for HtmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
