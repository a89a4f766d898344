//! Tag catalogs for block extraction.
//!
//! Maps HTML tag names to the kind of content block they can produce.

/// Heading tags: h1-h6, indexed by level - 1
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Paragraph-like tags: p, li
pub static PARAGRAPH_TAGS: [&str; 2] = ["p", "li"];

/// What an element contributes to the block sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    /// `h1`..`h6` with its level.
    Heading(u8),
    /// `p` or `li`.
    Paragraph,
    /// Anything else: not emitted, but its descendants are still visited.
    Other,
}

/// Classify a lowercase tag name.
#[must_use]
pub fn block_tag(tag: &str) -> BlockTag {
    if let Some(index) = HEADING_TAGS.iter().position(|h| *h == tag) {
        return BlockTag::Heading(index as u8 + 1);
    }
    if PARAGRAPH_TAGS.contains(&tag) {
        return BlockTag::Paragraph;
    }
    BlockTag::Other
}
