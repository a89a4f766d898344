//! Error types for brochurist.
//!
//! This module defines the error types returned by the input producers and
//! the profile classifier.

use std::path::PathBuf;

/// Error type for brochure generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input path does not resolve to a readable file.
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The classifier was handed something it cannot work with
    /// (an empty block sequence).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a background image failed.
    #[error("Image processing failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for brochure operations.
pub type Result<T> = std::result::Result<T, Error>;
