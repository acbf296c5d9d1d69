//! Page command implementation.
//!
//! This module estimates reading time for each input document and writes a
//! report in the requested format.

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use readtime_lib::prelude::*;
use readtime_lib::total_words;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::display::{Format, is_stdin, load_document, load_options, source_label};

/// Selector used when neither flags nor an options file provide one.
const DEFAULT_SELECTOR: &str = "body";

/// Estimate reading time for every input and write the report.
pub(crate) fn page(
    inputs: &[PathBuf],
    selectors: Vec<String>,
    options_path: Option<&Path>,
    wpm: Option<f64>,
    format: Format,
    output: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    ensure_single_stdin(inputs)?;
    let options = resolve_options(selectors, options_path, wpm)?;
    let words_per_minute = options.effective_words_per_minute();
    info!(
        inputs = inputs.len(),
        selectors = ?options.selectors,
        words_per_minute,
        "estimating reading time"
    );

    let progress = if quiet || inputs.len() < 2 {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} documents {msg}")
                .context("Invalid progress template")?
                .progress_chars("=>-"),
        );
        pb
    };

    let mut reports = Vec::with_capacity(inputs.len());
    for input in inputs {
        let label = source_label(input);
        progress.set_message(label.clone());

        let document = load_document(input)?;
        let words = total_words(&document, &options.selectors);
        let estimate = calculate(words as f64, words_per_minute);
        if words == 0 {
            warn!(source = %label, "no words found for the given selectors");
        }

        reports.push(PageReport::new(label, words, words_per_minute, estimate));
        progress.inc(1);
    }
    progress.finish_and_clear();

    let format = OutputFormat::from(format);
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            format.write_reports(&reports, &mut writer)?;
            writer.flush()?;
            if !quiet {
                eprintln!("Report written to: {}", path.display());
            }
        }
        None => {
            let stdout = std::io::stdout();
            format.write_reports(&reports, stdout.lock())?;
        }
    }

    Ok(())
}

/// Stdin can only be read once, so `-` may appear at most once.
fn ensure_single_stdin(inputs: &[PathBuf]) -> Result<()> {
    if inputs.iter().filter(|input| is_stdin(input)).count() > 1 {
        bail!("`-` (stdin) can only be given once");
    }
    Ok(())
}

/// Merge command line flags with the options file.
///
/// Flags win over the file; with neither, the whole `body` is read at the
/// default speed.
fn resolve_options(
    selectors: Vec<String>,
    options_path: Option<&Path>,
    wpm: Option<f64>,
) -> Result<RequestTimeOption> {
    let mut options = match options_path {
        Some(path) => load_options(path)?,
        None => RequestTimeOption::default(),
    };

    if !selectors.is_empty() {
        options.selectors = selectors;
    } else if options_path.is_none() {
        options.selectors = vec![DEFAULT_SELECTOR.to_string()];
    }

    if let Some(wpm) = wpm {
        options.words_per_minute = Some(wpm);
    }

    Ok(options)
}
