//! Configuration options for brochure generation.
//!
//! The `Options` struct controls the thresholds used by block extraction and
//! profile classification, and whether background images are produced.

/// Minimum length (characters) of a block's text, see [`Options::min_block_chars`].
pub const DEFAULT_MIN_BLOCK_CHARS: usize = 25;

/// Context budget of the classifier, see [`Options::max_context_chars`].
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 2000;

/// Configuration options for brochure generation.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use brochurist::Options;
///
/// // Use defaults
/// let options = Options::default();
/// assert_eq!(options.min_block_chars, 25);
///
/// // Customize specific fields
/// let options = Options {
///     with_backgrounds: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Minimum trimmed length for an HTML heading or paragraph to become a
    /// content block.
    ///
    /// Filters out UI labels such as "OK" or "Learn more".
    ///
    /// Default: `25`
    pub min_block_chars: usize,

    /// Maximum length of the compacted context the classifier reads.
    ///
    /// Longer contexts are shortened at a word boundary and end with a
    /// truncation marker.
    ///
    /// Default: `2000`
    pub max_context_chars: usize,

    /// Also render a decorative background image for each brochure.
    ///
    /// Default: `false`
    pub with_backgrounds: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_block_chars: DEFAULT_MIN_BLOCK_CHARS,
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
            with_backgrounds: false,
        }
    }
}
