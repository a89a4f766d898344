//! Content blocks from an uploaded image.
//!
//! No OCR and no vision model: the blocks come from the file name and two
//! coarse pixel statistics (overall brightness of the dominant colors and
//! orientation). An image that cannot be decoded still yields its file-name
//! blocks.

use std::collections::HashMap;
use std::path::Path;

use image::DynamicImage;

use crate::error::{Error, Result};
use crate::result::ContentBlock;
use crate::text_input::title_case;

/// Industry terms looked for in the lowercase file name.
pub static FILENAME_KEYWORDS: &[&str] = &[
    "company",
    "business",
    "startup",
    "enterprise",
    "tech",
    "ai",
    "cloud",
    "software",
    "service",
    "solutions",
    "platform",
    "app",
    "digital",
];

/// Mean `r + g + b` of the dominant colors above which an image counts as bright.
const BRIGHT_THRESHOLD: f64 = 400.0;

/// Mean `r + g + b` of the dominant colors below which an image counts as dark.
const DARK_THRESHOLD: f64 = 200.0;

/// Number of most frequent colors averaged for brightness.
const DOMINANT_COLORS: usize = 3;

const BRIGHT_PARAGRAPH: &str =
    "The company presents a modern, bright brand identity suggesting innovation and clarity.";
const LANDSCAPE_PARAGRAPH: &str = "The visual style emphasizes breadth and comprehensive solutions.";
const DEFAULT_HEADING: &str = "Company Overview";
const DEFAULT_PARAGRAPH: &str = "A forward-thinking company dedicated to delivering exceptional products and services to its customers.";

/// Coarse visual cues read from the pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSignals {
    pub width: u32,
    pub height: u32,
    pub is_bright: bool,
    pub is_dark: bool,
}

impl ImageSignals {
    #[must_use]
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    #[must_use]
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }
}

/// Compute brightness and orientation signals for a decoded image.
///
/// Brightness uses the most frequent colors: the summed `r + g + b` of the
/// top three is divided by three (an image with fewer distinct colors is
/// divided by three all the same).
#[must_use]
pub fn image_signals(img: &DynamicImage) -> ImageSignals {
    let rgb = img.to_rgb8();

    let mut counts: HashMap<[u8; 3], u64> = HashMap::new();
    for pixel in rgb.pixels() {
        *counts.entry(pixel.0).or_insert(0) += 1;
    }

    let mut colors: Vec<([u8; 3], u64)> = counts.into_iter().collect();
    // Most frequent first; equal counts ordered by color for determinism.
    colors.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let channel_sum: u64 = colors
        .iter()
        .take(DOMINANT_COLORS)
        .map(|(c, _)| u64::from(c[0]) + u64::from(c[1]) + u64::from(c[2]))
        .sum();
    let mean = channel_sum as f64 / DOMINANT_COLORS as f64;

    ImageSignals {
        width: rgb.width(),
        height: rgb.height(),
        is_bright: mean > BRIGHT_THRESHOLD,
        is_dark: mean < DARK_THRESHOLD,
    }
}

/// Industry keywords contained in a file name, in vocabulary order.
#[must_use]
pub fn filename_keywords(file_name: &str) -> Vec<&'static str> {
    let lower = file_name.to_lowercase();
    FILENAME_KEYWORDS
        .iter()
        .copied()
        .filter(|k| lower.contains(k))
        .collect()
}

/// Turn an image file into content blocks.
///
/// Returns [`Error::NotFound`] if `path` is not an existing file. Decoding
/// failures are logged and tolerated.
pub fn analyze_image(path: &Path) -> Result<Vec<ContentBlock>> {
    if !path.is_file() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let signals = match image::open(path) {
        Ok(img) => Some(image_signals(&img)),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "image could not be decoded; using file name only");
            None
        }
    };

    let blocks = blocks_from_parts(path, signals);
    tracing::debug!(blocks = blocks.len(), "image blocks extracted");
    Ok(blocks)
}

fn blocks_from_parts(path: &Path, signals: Option<ImageSignals>) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !stem.is_empty() {
        let readable = stem.replace(['_', '-'], " ");
        blocks.extend(ContentBlock::heading(1, title_case(&readable)));
    }

    if let Some(signals) = signals {
        if signals.is_bright {
            blocks.extend(ContentBlock::paragraph(BRIGHT_PARAGRAPH));
        }
        if signals.is_landscape() {
            blocks.extend(ContentBlock::paragraph(LANDSCAPE_PARAGRAPH));
        }
    }

    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let keywords = filename_keywords(&file_name);
    if !keywords.is_empty() {
        blocks.extend(ContentBlock::paragraph(format!(
            "The company operates in the {} space, focusing on delivering value to clients.",
            keywords.join(", ")
        )));
    }

    if blocks.is_empty() {
        blocks.extend(ContentBlock::heading(1, DEFAULT_HEADING));
        blocks.extend(ContentBlock::paragraph(DEFAULT_PARAGRAPH));
    }

    blocks
}
