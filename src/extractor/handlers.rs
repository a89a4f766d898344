//! Element handlers: turn a single heading or paragraph element into a block.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{contains_any, BOILERPLATE_PHRASES};
use crate::result::ContentBlock;

/// Whether a text fragment is worth keeping as a block.
///
/// Meaningful text is non-empty after trimming, at least `min_chars`
/// characters long, and free of legal boilerplate phrases
/// ("all rights reserved", "privacy policy", ...), compared case-insensitively.
///
/// # Example
///
/// ```rust
/// use brochurist::extractor::handlers::is_meaningful_text;
///
/// assert!(is_meaningful_text("We build reliable cloud platforms for teams.", 25));
/// assert!(!is_meaningful_text("Learn more", 25));
/// assert!(!is_meaningful_text("© 2024 Acme Inc. All Rights Reserved.", 25));
/// ```
#[must_use]
pub fn is_meaningful_text(text: &str, min_chars: usize) -> bool {
    let stripped = text.trim();
    if stripped.is_empty() {
        return false;
    }
    if stripped.chars().count() < min_chars {
        return false;
    }
    !contains_any(&stripped.to_lowercase(), BOILERPLATE_PHRASES)
}

/// Build a heading block from an `h1`..`h6` element, if its text is meaningful.
#[must_use]
pub fn handle_heading(element: &Selection, level: u8, min_chars: usize) -> Option<ContentBlock> {
    let text = dom::visible_text(element);
    if !is_meaningful_text(&text, min_chars) {
        return None;
    }
    ContentBlock::heading(level, text)
}

/// Build a paragraph block from a `p`/`li` element, if its text is meaningful.
#[must_use]
pub fn handle_paragraph(element: &Selection, min_chars: usize) -> Option<ContentBlock> {
    let text = dom::visible_text(element);
    if !is_meaningful_text(&text, min_chars) {
        return None;
    }
    ContentBlock::paragraph(text)
}
