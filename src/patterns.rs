//! Fixed vocabularies and compiled regex patterns.
//!
//! All patterns are compiled once on first use via `LazyLock`.
//! Vocabularies are plain slices, matched as lowercase substrings.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Noise Detection
// =============================================================================

/// Tags removed outright, regardless of content.
pub static SCRIPT_TAGS: &[&str] = &["script", "style", "noscript"];

/// Structural wrappers that rarely hold primary content. Removed with their subtree.
pub static CHROME_TAGS: &[&str] = &["nav", "footer", "form", "aside"];

/// Substrings of `id`/`class` marking page chrome (cookie banners, popups, ads).
///
/// Matched against `"{id} {classes}"` in lowercase, so "ads" also hits
/// compound names like "sidebar-ads".
pub static NOISE_KEYWORDS: &[&str] = &[
    "cookie",
    "banner",
    "consent",
    "gdpr",
    "newsletter",
    "signup",
    "subscribe",
    "modal",
    "popup",
    "promo",
    "advert",
    "ads",
    "legal",
    "terms",
    "privacy",
];

// =============================================================================
// Block Filtering
// =============================================================================

/// Phrases that mark a text fragment as legal/footer boilerplate.
pub static BOILERPLATE_PHRASES: &[&str] = &[
    "all rights reserved",
    "terms of use",
    "privacy policy",
    "cookie policy",
];

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Matches any line ending (`\r\n`, lone `\r`, `\n`).
pub static LINE_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n?|\n").expect("LINE_ENDING regex"));

/// Matches a markdown-style heading marker: leading `#` run and the remainder.
pub static MARKDOWN_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)(.*)$").expect("MARKDOWN_HEADING regex"));

/// Collapse all whitespace runs to single spaces and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text.trim(), " ").into_owned()
}

/// True if `haystack` contains any of `needles`.
#[inline]
#[must_use]
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
