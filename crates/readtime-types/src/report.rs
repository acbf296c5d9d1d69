//! Per-document summary.

use serde::{Deserialize, Serialize};

use crate::EstimateResult;

/// Word count and reading time for one input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageReport {
    /// Where the text came from (file path, `-` for stdin, or a label).
    pub source: String,
    /// Total words across all selectors.
    pub words: usize,
    /// Reading speed the estimate was computed with.
    pub words_per_minute: f64,
    /// The reading time estimate.
    pub estimate: EstimateResult,
}

impl PageReport {
    /// Creates a new report.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        words: usize,
        words_per_minute: f64,
        estimate: EstimateResult,
    ) -> Self {
        Self {
            source: source.into(),
            words,
            words_per_minute,
            estimate,
        }
    }
}
