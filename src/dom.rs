//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate offering the handful of operations the
//! noise filter, container selector and block extractor need: parsing,
//! attribute access, tag names, visible text and removal.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

use crate::patterns::collapse_whitespace;

// === Parsing ===

/// Parse an HTML string into a document.
///
/// Parsing never fails: malformed markup is repaired the way browsers do,
/// and whatever structure survives is extracted.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get the class attribute split into its individual classes.
#[must_use]
pub fn class_list(sel: &Selection) -> Vec<String> {
    class_name(sel)
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants, as stored in the tree.
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Visible text of a selection: every descendant text node trimmed, joined
/// with single spaces, whitespace collapsed.
///
/// Unlike [`text_content`], adjacent inline elements do not run together:
/// `<p>Fast<b>Secure</b></p>` yields `"Fast Secure"`.
#[must_use]
pub fn visible_text(sel: &Selection) -> String {
    let mut parts = Vec::new();
    for node in sel.nodes() {
        collect_text_nodes(node, &mut parts);
    }
    collapse_whitespace(&parts.join(" "))
}

fn collect_text_nodes(node: &NodeRef, parts: &mut Vec<String>) {
    if node.is_text() {
        let text = node.text();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed.to_string());
        }
        return;
    }
    for child in node.children() {
        collect_text_nodes(&child, parts);
    }
}

/// Rendered text length in characters, whitespace collapsed.
#[must_use]
pub fn text_length(sel: &Selection) -> usize {
    collapse_whitespace(&text_content(sel)).chars().count()
}

// === Tree Manipulation ===

/// Remove elements (with their subtrees) from the tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}
