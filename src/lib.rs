//! # brochurist
//!
//! Turn a company's web page, an image, or a few lines of pitch text into
//! three short marketing brochures: one for customers, one for investors,
//! one for partners.
//!
//! ## Quick Start
//!
//! ```rust
//! use brochurist::{analyze_business, blocks_from_text, generate_brochures};
//!
//! let blocks = blocks_from_text("# Acme Cloud\nWe provide secure, scalable infrastructure hosting for enterprises.");
//! let profile = analyze_business(&blocks)?;
//! let brochures = generate_brochures(&profile);
//!
//! assert!(profile.core_offerings.contains(&"Managed infrastructure and hosting".to_string()));
//! println!("{}", brochures.customers);
//! # Ok::<(), brochurist::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Content blocks**: headings and paragraphs from HTML (noise stripped,
//!   main container chosen), from text (line heuristics), or from an image
//!   (file name and pixel cues)
//! - **Business profile**: keyword rules over a bounded context, with a
//!   fallback for every field
//! - **Brochures**: fixed markdown templates, optionally with generated
//!   JPEG backgrounds
//!
//! Everything is deterministic except background sparkles.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Selector rules for noise detection.
pub mod selector;

/// Noise removal and main container selection.
pub mod html_processing;

/// Content block extraction from HTML.
pub mod extractor;

/// Content blocks from free-form text.
pub mod text_input;

/// Content blocks from image files.
pub mod image_input;

/// Business profile classification.
pub mod analyzer;

/// Markdown brochure templates.
pub mod generator;

/// Generated brochure backgrounds.
pub mod background;

/// Character encoding detection and HTML file loading.
pub mod encoding;

// Public API - re-exports
pub use analyzer::{analyze_business, analyze_business_with_options};
pub use error::{Error, Result};
pub use extract::{blocks_for, generate, write_outputs, Input};
pub use generator::generate_brochures;
pub use options::Options;
pub use result::{Audience, BlockKind, BrochureSet, BusinessProfile, ContentBlock, Report};

use std::path::Path;

/// Extracts content blocks from HTML markup using default options.
///
/// Never fails: malformed markup is parsed best-effort, and a page without
/// meaningful text simply yields no blocks.
///
/// # Example
///
/// ```rust
/// use brochurist::blocks_from_html;
///
/// let html = r#"<body><nav>Home</nav><main><h1>Acme builds cloud platforms</h1></main></body>"#;
/// let blocks = blocks_from_html(html);
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].level(), Some(1));
/// ```
#[must_use]
pub fn blocks_from_html(html: &str) -> Vec<ContentBlock> {
    extract::blocks_from_html(html, &Options::default())
}

/// Extracts content blocks from HTML markup with custom options.
#[must_use]
pub fn blocks_from_html_with_options(html: &str, options: &Options) -> Vec<ContentBlock> {
    extract::blocks_from_html(html, options)
}

/// Extracts content blocks from HTML bytes, detecting the charset from the
/// page's meta declaration.
#[must_use]
pub fn blocks_from_html_bytes(html: &[u8]) -> Vec<ContentBlock> {
    blocks_from_html(&encoding::transcode_to_utf8(html))
}

/// Extracts content blocks from an HTML file.
///
/// Returns [`Error::NotFound`] if `path` is not a readable file.
pub fn blocks_from_html_file(path: impl AsRef<Path>) -> Result<Vec<ContentBlock>> {
    let html = encoding::read_html_file(path.as_ref())?;
    Ok(blocks_from_html(&html))
}

/// Converts free-form text into content blocks. Never returns an empty list.
#[must_use]
pub fn blocks_from_text(text: &str) -> Vec<ContentBlock> {
    text_input::analyze_text(text)
}

/// Derives content blocks from an image file.
///
/// Returns [`Error::NotFound`] if `path` is not a file.
pub fn blocks_from_image(path: impl AsRef<Path>) -> Result<Vec<ContentBlock>> {
    image_input::analyze_image(path.as_ref())
}
