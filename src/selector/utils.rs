//! Utility functions for selector rules
//!
//! Attribute accessors that return empty strings instead of `Option`, so rules
//! can be written as flat boolean expressions.

use crate::dom;
use dom_query::Selection;

/// Get element ID attribute (empty string if missing)
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> String {
    dom::id(sel).unwrap_or_default()
}

/// Get tag name (empty string if missing)
#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

/// Lowercase `"{id} {class1 class2 ...}"` for substring checks against
/// both attributes at once.
///
/// # Example
///
/// ```rust
/// use brochurist::selector::utils;
/// use brochurist::dom;
///
/// let doc = dom::parse(r#"<div id="Cookie-Bar" class="fixed  Bottom">x</div>"#);
/// let div = doc.select("div");
///
/// assert_eq!(utils::id_class(&div), "cookie-bar fixed bottom");
/// ```
#[must_use]
pub fn id_class(sel: &Selection) -> String {
    let classes = dom::class_list(sel).join(" ");
    format!("{} {}", id(sel), classes).to_lowercase()
}
