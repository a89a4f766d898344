//! Content block extraction from HTML.
//!
//! # Module Structure
//!
//! - `tags`: which tags produce headings, which produce paragraphs
//! - `handlers`: meaningful-text check and per-element block construction
//! - `pipeline`: noise removal, container selection and the document-order walk
//!
//! # Usage
//!
//! ```rust
//! use brochurist::{dom, extractor, Options};
//!
//! let doc = dom::parse("<main><h1>Acme builds developer platforms</h1></main>");
//! let blocks = extractor::extract_document(&doc, &Options::default());
//! assert_eq!(blocks.len(), 1);
//! ```

pub mod handlers;
pub mod pipeline;
pub mod tags;

pub use handlers::is_meaningful_text;
pub use pipeline::{extract_blocks, extract_document};
