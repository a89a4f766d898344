//! HTML processing: noise removal and main container selection.
//!
//! Both steps run on a parsed [`Document`] before block extraction:
//! [`remove_noise`] prunes page chrome in place, then [`pick_main_container`]
//! chooses the subtree the extractor walks.

use dom_query::{Document, Selection};

use crate::dom;
use crate::selector::{self, discard::NOISE_RULES};

/// Strip non-content elements from the document, in place.
///
/// Rules run in order (scripts/styles, then structural chrome, then
/// id/class noise markers), each removing matched elements together with
/// their subtrees. Running it again on a filtered document removes nothing.
///
/// Returns the number of elements removed.
///
/// # Example
///
/// ```rust
/// use brochurist::{dom, html_processing};
///
/// let doc = dom::parse(r#"<nav>Menu</nav><div class="cookie-banner">Accept</div><p>Body</p>"#);
/// html_processing::remove_noise(&doc);
///
/// assert!(doc.select("nav").is_empty());
/// assert!(doc.select(".cookie-banner").is_empty());
/// assert!(doc.select("p").exists());
/// ```
pub fn remove_noise(doc: &Document) -> usize {
    let root = Selection::from(doc.root());
    let mut removed = 0;

    for rule in NOISE_RULES {
        let matches = selector::query_all(&root, *rule);
        removed += matches.len();
        for sel in &matches {
            dom::remove(sel);
        }
    }

    tracing::debug!(removed, "noise filter");
    removed
}

/// Choose the subtree most likely to hold the page's primary content.
///
/// 1. The first `<main>` element, if any.
/// 2. The whole document when there is no `<body>`.
/// 3. Otherwise the `<div>` anywhere under body with the longest
///    whitespace-collapsed text. Only a strictly longer div replaces the
///    current candidate, so ties keep the earlier one. Body is returned when
///    no div carries any text.
///
/// Body's own text never competes with the divs: on a page that keeps its
/// headings and paragraphs directly in `<body>` next to a small `<div>`
/// (a logo, a badge), that div is chosen and the body-level content is not
/// extracted. Wrap such content in `<main>` or a `<div>` to have it picked.
#[must_use]
pub fn pick_main_container(doc: &Document) -> Selection<'_> {
    let main = doc.select_single("main");
    if main.exists() {
        tracing::debug!("main container: <main>");
        return main;
    }

    let body = doc.select_single("body");
    if !body.exists() {
        tracing::debug!("main container: document (no body)");
        return Selection::from(doc.root());
    }

    let mut candidate = body.clone();
    let mut max_len = 0;

    for node in body.select("div").nodes() {
        let div = Selection::from(*node);
        let text_len = dom::text_length(&div);
        if text_len > max_len {
            max_len = text_len;
            candidate = div;
        }
    }

    tracing::debug!(
        tag = %dom::tag_name(&candidate).unwrap_or_default(),
        text_len = max_len,
        "main container"
    );
    candidate
}
