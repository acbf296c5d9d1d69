//! Display utilities and input loading for the readtime CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use readtime_lib::prelude::*;
use std::path::Path;

/// Output format for reports.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
    Ndjson,
    Csv,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
            Format::Csv => Self::Csv,
        }
    }
}

/// Returns true if `path` names stdin.
pub(crate) fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Returns a label for `path` suitable for reports.
pub(crate) fn source_label(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Load and parse an HTML document from a file or stdin.
pub(crate) fn load_document(path: &Path) -> Result<HtmlDocument> {
    let document = if is_stdin(path) {
        HtmlDocument::from_reader(std::io::stdin().lock())
            .context("Failed to read document from stdin")?
    } else {
        HtmlDocument::from_path(path)?
    };
    Ok(document)
}

/// Load a JSON options file.
pub(crate) fn load_options(path: &Path) -> Result<RequestTimeOption> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file {}", path.display()))?;
    RequestTimeOption::from_json(&json)
        .with_context(|| format!("Invalid options file {}", path.display()))
}
