//! Namespace-qualified lookups.
//!
//! The extractor only needs one capability from a document representation:
//! "given a namespace and a local tag name, find matching descendants".
//! `QualifiedNode` captures exactly that, so the same extraction code runs on
//! any tree that can answer it.

/// A node that supports namespace-qualified descendant lookup.
pub trait QualifiedNode {
    /// First `{namespace}local_name` descendant in document order.
    fn first_descendant(&self, namespace: &str, local_name: &str) -> Option<&Self>;

    /// Every `{namespace}local_name` descendant in document order.
    fn descendants_named(&self, namespace: &str, local_name: &str) -> Vec<&Self>;

    /// Concatenated text of all descendant text nodes.
    fn text_content(&self) -> String;

    /// Attribute value by qualified name.
    fn attribute(&self, name: &str) -> Option<&str>;
}

/// Trimmed text of the first `{namespace}tag` descendant, or `""`.
pub fn get_text<N: QualifiedNode>(parent: &N, tag: &str, namespace: &str) -> String {
    parent
        .first_descendant(namespace, tag)
        .map(|node| node.text_content().trim().to_string())
        .unwrap_or_default()
}

/// `attr_name` of the first `{namespace}tag` descendant, or `""` when either
/// the element or the attribute is missing.
pub fn get_attribute<N: QualifiedNode>(
    parent: &N,
    tag: &str,
    namespace: &str,
    attr_name: &str,
) -> String {
    parent
        .first_descendant(namespace, tag)
        .and_then(|node| node.attribute(attr_name))
        .unwrap_or_default()
        .to_string()
}
