//! Reading time across several selectors.

use readtime_estimate::calculate;
use readtime_types::{EstimateResult, RequestTimeOption};
use tracing::debug;

use crate::{Document, get_total_words};

/// Sums the word counts of every selector.
pub fn total_words<D, S>(document: &D, selectors: &[S]) -> usize
where
    D: Document + ?Sized,
    S: AsRef<str>,
{
    selectors
        .iter()
        .map(|selector| get_total_words(document, selector.as_ref()))
        .sum()
}

/// Estimates the reading time of all elements named by `options`.
pub fn get_estimate<D>(document: &D, options: &RequestTimeOption) -> EstimateResult
where
    D: Document + ?Sized,
{
    let words = total_words(document, &options.selectors);
    let words_per_minute = options.effective_words_per_minute();
    let estimate = calculate(words as f64, words_per_minute);

    debug!(
        selectors = options.selectors.len(),
        words,
        words_per_minute,
        minutes = estimate.data,
        "estimated reading time"
    );
    estimate
}

/// Returns the rounded reading time in minutes of all elements named by
/// `options`.
///
/// An empty selector list, selectors that match nothing and elements without
/// text all contribute 0 words; a total of 0 words reads in 0 minutes.
pub fn get_time<D>(document: &D, options: &RequestTimeOption) -> u64
where
    D: Document + ?Sized,
{
    get_estimate(document, options).data
}
