//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate: attribute maps, direct element
//! children and serialization. Extraction code goes through these instead of
//! touching `dom_query` node internals directly.

use std::collections::HashMap;

pub use dom_query::{Document, NodeRef, Selection};

// === Tag/Node Information ===

/// Get tag name (lowercase) of an element node.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_string())
}

/// Text of the node's first child, when that child is a text node.
///
/// `<title>Foo</title>` yields `Some("Foo")`, `<title></title>` yields `None`.
#[must_use]
pub fn first_child_text(node: &NodeRef) -> Option<String> {
    node.first_child()
        .filter(NodeRef::is_text)
        .map(|child| child.text().to_string())
}

// === Attribute Operations ===

/// Collect all attributes of a node into a case-sensitive map.
///
/// Attribute names are lowercased by the HTML parser; values are kept as-is.
#[must_use]
pub fn attribute_map(node: &NodeRef) -> HashMap<String, String> {
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}

/// Get all attribute names of a node.
#[must_use]
pub fn attribute_names(node: &NodeRef) -> Vec<String> {
    node.attrs()
        .iter()
        .map(|attr| attr.name.local.to_string())
        .collect()
}

/// Remove an attribute
#[inline]
pub fn remove_attribute(node: &NodeRef, name: &str) {
    node.remove_attr(name);
}

// === Tree Navigation ===

/// Direct element children of a node, in document order.
///
/// Text, comment and other non-element nodes are skipped.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

/// First node matched by a selector, if any.
#[must_use]
pub fn first_match<'a>(doc: &'a Document, selector: &str) -> Option<NodeRef<'a>> {
    doc.select(selector).nodes().first().copied()
}

// === Tree Manipulation ===

/// Remove elements but keep their children (unwrap)
#[inline]
pub fn strip_tags(sel: &Selection, tags: &[&str]) {
    sel.strip_elements(tags);
}

// === Serialization ===

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> String {
    sel.inner_html().to_string()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> String {
    sel.html().to_string()
}
