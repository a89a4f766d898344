//! Command-line entry point: generate brochures from an HTML page, an image,
//! or text, and write them as markdown files.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use brochurist::analyzer::TRUNCATION_MARKER;
use brochurist::{generate, write_outputs, Input, Options};
use clap::{Args, Parser};

#[derive(Parser)]
#[command(name = "brochurist", about = "Generate customer, investor and partner brochures")]
struct Cli {
    #[command(flatten)]
    input: InputArgs,

    /// Directory where brochure files will be written
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// Also generate a background image for each brochure
    #[arg(long)]
    backgrounds: bool,

    /// Print the blocks, profile and brochures as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Maximum characters of page content the classifier reads
    #[arg(
        long,
        default_value_t = brochurist::Options::default().max_context_chars,
        value_parser = parse_context_chars
    )]
    max_context_chars: usize,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Path to a local HTML file to analyze
    #[arg(long)]
    html: Option<PathBuf>,

    /// Path to an image (logo, banner, screenshot) to analyze
    #[arg(long)]
    image: Option<PathBuf>,

    /// Company description or idea as text
    #[arg(long)]
    text: Option<String>,

    /// Read the company description from a text file
    #[arg(long)]
    text_file: Option<PathBuf>,
}

impl InputArgs {
    fn into_input(self) -> anyhow::Result<Input> {
        if let Some(path) = self.html {
            return Ok(Input::Html(path));
        }
        if let Some(path) = self.image {
            return Ok(Input::Image(path));
        }
        if let Some(path) = self.text_file {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            return Ok(Input::Text(text));
        }
        Ok(Input::Text(self.text.unwrap_or_default()))
    }
}

/// Context budgets shorter than the truncation marker cannot be honored.
fn parse_context_chars(value: &str) -> Result<usize, String> {
    let chars: usize = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    let min = TRUNCATION_MARKER.chars().count();
    if chars < min {
        return Err(format!("must be at least {min}"));
    }
    Ok(chars)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = Options {
        max_context_chars: cli.max_context_chars,
        with_backgrounds: cli.backgrounds,
        ..Options::default()
    };

    let input = cli.input.into_input()?;
    let report = generate(&input, &options).context("brochure generation failed")?;
    let written = write_outputs(&report, &cli.output, &options)
        .with_context(|| format!("writing to {}", cli.output.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    eprintln!("Wrote {} files to {}", written.len(), cli.output.display());
    Ok(())
}
