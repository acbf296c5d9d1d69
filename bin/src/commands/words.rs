//! Words command implementation.

use anyhow::Result;
use readtime_lib::prelude::*;
use readtime_lib::total_words;
use std::path::Path;

use crate::display::load_document;

/// Print the word count of each selector and the total.
pub(crate) fn words(input: &Path, selectors: &[String]) -> Result<()> {
    let document = load_document(input)?;

    println!("{:<30} {:>10}", "SELECTOR", "WORDS");
    println!("{}", "-".repeat(41));

    for selector in selectors {
        println!(
            "{:<30} {:>10}",
            selector,
            get_total_words(&document, selector)
        );
    }

    println!("\nTotal: {} words", total_words(&document, selectors));
    Ok(())
}
