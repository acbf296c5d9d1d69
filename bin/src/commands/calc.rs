//! Calc command implementation.
//!
//! Estimates reading time for a word count given on the command line.

use anyhow::Result;
use readtime_lib::prelude::*;

use crate::display::Format;

/// Print the estimate for `words` at the given reading speed.
pub(crate) fn calc(words: f64, wpm: Option<f64>, format: Format) -> Result<()> {
    let wpm = wpm.unwrap_or(DEFAULT_WORDS_PER_MINUTE);
    let estimate = calculate(words, wpm);
    let speed = Estimator::new(wpm).words_per_minute();

    match format {
        Format::Text => {
            println!("Words:        {words}");
            println!("Speed:        {speed} wpm");
            println!("Reading time: {}", Estimator::format_minutes(&estimate));
            println!(
                "Detail:       {} ({} min)",
                Estimator::format_detail(&estimate),
                estimate.detail
            );
        }
        Format::Json | Format::Ndjson => {
            println!("{}", serde_json::to_string(&estimate)?);
        }
        Format::Csv => {
            println!("words,words_per_minute,minutes,detail");
            println!("{words},{speed},{},{}", estimate.data, estimate.detail);
        }
    }

    Ok(())
}
