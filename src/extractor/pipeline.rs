//! Block extraction pipeline: noise removal, container choice, document-order walk.

use dom_query::{Document, Selection};

use crate::extractor::handlers::{handle_heading, handle_paragraph};
use crate::extractor::tags::{block_tag, BlockTag};
use crate::html_processing::{pick_main_container, remove_noise};
use crate::options::Options;
use crate::result::ContentBlock;
use crate::selector::utils::tag;

/// Walk `root` in document order and emit heading/paragraph blocks.
///
/// Every descendant element is visited (pre-order), so headings and
/// paragraphs nested inside arbitrary wrappers are found. A `<p>` inside an
/// `<li>` yields a block for each. Elements whose text fails the
/// meaningful-text check are skipped.
#[must_use]
pub fn extract_blocks(root: &Selection, opts: &Options) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();

    for node in root.select("*").nodes() {
        let element = Selection::from(*node);
        let block = match block_tag(&tag(&element)) {
            BlockTag::Heading(level) => handle_heading(&element, level, opts.min_block_chars),
            BlockTag::Paragraph => handle_paragraph(&element, opts.min_block_chars),
            BlockTag::Other => None,
        };
        blocks.extend(block);
    }

    blocks
}

/// Full HTML path: filter noise in place, pick the main container, extract.
pub fn extract_document(doc: &Document, opts: &Options) -> Vec<ContentBlock> {
    remove_noise(doc);
    let root = pick_main_container(doc);
    let blocks = extract_blocks(&root, opts);
    tracing::debug!(blocks = blocks.len(), "html blocks extracted");
    blocks
}
