//! Selector Infrastructure
//!
//! Rules are plain predicate functions over a `Selection`. The noise filter is
//! expressed as a list of rules (see [`discard`]); `query_all` walks a subtree
//! in document order and applies a rule to every element.

use dom_query::Selection;

pub mod discard;
pub mod utils;

/// A selector rule that tests if a selection matches certain criteria.
pub type Rule = fn(&Selection) -> bool;

/// Query for all elements matching the rule, in document order.
///
/// # Example
///
/// ```rust
/// use brochurist::selector::{self, utils};
/// use brochurist::dom;
///
/// let doc = dom::parse(r#"<div><p id="lead">text</p><p>more</p></div>"#);
/// let root = doc.select("div");
///
/// fn is_lead(sel: &dom_query::Selection) -> bool {
///     utils::id(sel) == "lead"
/// }
///
/// assert_eq!(selector::query_all(&root, is_lead).len(), 1);
/// ```
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, rule: Rule) -> Vec<Selection<'a>> {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| rule(sel))
        .collect()
}
