//! Content blocks from free-form text.
//!
//! Each non-blank line is classified on its own:
//!
//! 1. `# Title` style lines are markdown headings (level = number of `#`, max 6).
//! 2. Short ALL-CAPS lines without closing punctuation are level-2 headings,
//!    title-cased.
//! 3. Other short lines without closing punctuation are level-2 headings.
//! 4. Everything else is a paragraph.

use crate::patterns::{LINE_ENDING, MARKDOWN_HEADING};
use crate::result::ContentBlock;

/// Lines at least this long are never treated as ALL-CAPS headings.
const MAX_CAPS_HEADING_CHARS: usize = 100;

/// Lines at least this long are never treated as plain headings.
const MAX_PLAIN_HEADING_CHARS: usize = 80;

const EMPTY_INPUT_HEADING: &str = "Company Overview";
const EMPTY_INPUT_PARAGRAPH: &str =
    "A company focused on delivering value and innovation to customers.";
const FALLBACK_HEADING: &str = "Company Description";

/// Convert raw text into content blocks.
///
/// Blank input yields a generic overview heading and paragraph, so the
/// result is never empty. Deterministic: the same input always produces the
/// same blocks.
///
/// # Example
///
/// ```rust
/// use brochurist::text_input::analyze_text;
///
/// let blocks = analyze_text("# Acme Cloud\nWe provide secure, scalable hosting.");
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].text(), "Acme Cloud");
/// assert_eq!(blocks[0].level(), Some(1));
/// assert!(!blocks[1].is_heading());
/// ```
#[must_use]
pub fn analyze_text(text: &str) -> Vec<ContentBlock> {
    let normalized = LINE_ENDING.replace_all(text, "\n");
    let trimmed = normalized.trim();

    if trimmed.is_empty() {
        return vec![
            ContentBlock::heading(1, EMPTY_INPUT_HEADING),
            ContentBlock::paragraph(EMPTY_INPUT_PARAGRAPH),
        ]
        .into_iter()
        .flatten()
        .collect();
    }

    let mut blocks: Vec<ContentBlock> = trimmed
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(classify_line)
        .collect();

    if blocks.is_empty() {
        blocks.extend(ContentBlock::heading(1, FALLBACK_HEADING));
        blocks.extend(ContentBlock::paragraph(trimmed));
    }

    tracing::debug!(blocks = blocks.len(), "text blocks extracted");
    blocks
}

/// Classify one trimmed, non-blank line.
///
/// Returns `None` for a bare `#` run with nothing after it.
fn classify_line(line: &str) -> Option<ContentBlock> {
    if let Some(caps) = MARKDOWN_HEADING.captures(line) {
        let level = caps[1].len().min(6) as u8;
        return ContentBlock::heading(level, caps[2].trim());
    }

    let len = line.chars().count();

    if is_all_caps(line) && len < MAX_CAPS_HEADING_CHARS && !ends_with_any(line, &['.', '!', '?']) {
        return ContentBlock::heading(2, title_case(line));
    }

    if len < MAX_PLAIN_HEADING_CHARS && !ends_with_any(line, &['.', '!', '?', ',']) {
        return ContentBlock::heading(2, line);
    }

    ContentBlock::paragraph(line)
}

fn ends_with_any(line: &str, marks: &[char]) -> bool {
    line.ends_with(marks)
}

/// At least one ASCII letter and no lowercase ASCII letters.
#[must_use]
pub fn is_all_caps(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_uppercase()) && !text.chars().any(|c| c.is_ascii_lowercase())
}

/// Upper-case the first letter of each word, lower-case the rest.
///
/// A word starts at any letter that follows a non-letter, so
/// `"ACME-CLOUD SERVICES"` becomes `"Acme-Cloud Services"`.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c.to_ascii_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}
