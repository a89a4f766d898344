//! Pipeline orchestration: input -> blocks -> profile -> brochures.
//!
//! Each call is independent and stateless. Output file names are fixed per
//! audience, so concurrent runs must be given distinct output directories.

use std::fs;
use std::path::{Path, PathBuf};

use crate::analyzer::analyze_business_with_options;
use crate::background::write_background;
use crate::dom;
use crate::encoding::read_html_file;
use crate::error::Result;
use crate::extractor::extract_document;
use crate::generator::generate_brochures;
use crate::image_input::analyze_image;
use crate::options::Options;
use crate::result::{ContentBlock, Report};
use crate::text_input::analyze_text;

/// One of the supported input modalities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Path to a saved HTML page.
    Html(PathBuf),
    /// Path to a raster image (logo, banner, screenshot).
    Image(PathBuf),
    /// Free-form description or pitch text.
    Text(String),
}

impl Input {
    /// Short name of the modality, for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Input::Html(_) => "html",
            Input::Image(_) => "image",
            Input::Text(_) => "text",
        }
    }
}

/// Extract content blocks from HTML markup.
#[must_use]
pub fn blocks_from_html(html: &str, opts: &Options) -> Vec<ContentBlock> {
    let doc = dom::parse(html);
    extract_document(&doc, opts)
}

/// Produce content blocks from any input.
///
/// File inputs that do not exist fail with [`Error::NotFound`](crate::Error::NotFound).
pub fn blocks_for(input: &Input, opts: &Options) -> Result<Vec<ContentBlock>> {
    match input {
        Input::Html(path) => Ok(blocks_from_html(&read_html_file(path)?, opts)),
        Input::Image(path) => analyze_image(path),
        Input::Text(text) => Ok(analyze_text(text)),
    }
}

/// Run the whole pipeline for one input.
///
/// An HTML page with no meaningful text yields no blocks, which the
/// classifier reports as [`Error::InvalidInput`](crate::Error::InvalidInput).
pub fn generate(input: &Input, opts: &Options) -> Result<Report> {
    let blocks = blocks_for(input, opts)?;
    tracing::debug!(input = input.kind(), blocks = blocks.len(), "blocks produced");

    let profile = analyze_business_with_options(&blocks, opts)?;
    let brochures = generate_brochures(&profile);

    tracing::info!(
        input = input.kind(),
        blocks = blocks.len(),
        offerings = profile.core_offerings.len(),
        "brochures generated"
    );
    Ok(Report {
        blocks,
        profile,
        brochures,
    })
}

/// Write `brochure_{audience}.md` files into `dir`, creating it if needed,
/// plus `brochure_bg_{audience}.jpg` backgrounds when
/// [`Options::with_backgrounds`] is set.
///
/// Audiences whose brochure is empty are skipped. Returns the written paths.
pub fn write_outputs(report: &Report, dir: &Path, opts: &Options) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    for (audience, body) in report.brochures.iter() {
        if body.trim().is_empty() {
            tracing::warn!(%audience, "empty brochure, not written");
            continue;
        }
        let path = dir.join(format!("brochure_{audience}.md"));
        fs::write(&path, report.brochures.to_document(audience))?;
        written.push(path);

        if opts.with_backgrounds {
            written.push(write_background(audience, dir)?);
        }
    }

    tracing::info!(dir = %dir.display(), files = written.len(), "outputs written");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn text_input_runs_end_to_end() {
        let input = Input::Text("# Acme\nWe help SaaS founders deploy faster.".to_string());
        let report = generate(&input, &Options::default()).unwrap();

        assert_eq!(report.blocks.len(), 2);
        assert!(report.brochures.customers.contains("Model deployment and monitoring"));
    }

    #[test]
    fn html_without_content_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.html");
        fs::write(&path, "<html><body><nav>Home About</nav><p>short</p></body></html>").unwrap();

        let err = generate(&Input::Html(path), &Options::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn missing_html_is_not_found() {
        let err = generate(&Input::Html("/missing/page.html".into()), &Options::default()).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn writes_three_markdown_files() {
        let report = generate(&Input::Text(String::new()), &Options::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("output");

        let written = write_outputs(&report, &out, &Options::default()).unwrap();

        assert_eq!(written.len(), 3);
        let customers = fs::read_to_string(out.join("brochure_customers.md")).unwrap();
        assert!(customers.starts_with("# Customers Brochure\n\n## 🚀"));
        assert!(customers.ends_with('\n'));
        assert!(out.join("brochure_partners.md").is_file());
    }

    #[test]
    fn backgrounds_written_on_request() {
        let report = generate(&Input::Text("Acme".to_string()), &Options::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let opts = Options {
            with_backgrounds: true,
            ..Options::default()
        };

        let written = write_outputs(&report, dir.path(), &opts).unwrap();

        assert_eq!(written.len(), 6);
        assert!(dir.path().join("brochure_bg_customers.jpg").is_file());
    }
}
