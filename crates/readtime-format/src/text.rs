//! Plain text output format.

use readtime_estimate::Estimator;
use readtime_types::PageReport;
use std::io::Write;

use crate::{FormatError, Formatter};

/// Human-readable formatter, one line per report.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// Whether to append word count and unrounded time.
    detailed: bool,
}

impl TextFormatter {
    /// Creates a new text formatter that prints details.
    #[must_use]
    pub const fn new() -> Self {
        Self { detailed: true }
    }

    /// Sets whether to print the word count and unrounded time.
    #[must_use]
    pub const fn with_details(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn write_reports<W: Write>(
        &self,
        reports: &[PageReport],
        mut writer: W,
    ) -> Result<(), FormatError> {
        for report in reports {
            write!(
                writer,
                "{}: {}",
                report.source,
                Estimator::format_minutes(&report.estimate)
            )?;
            if self.detailed {
                write!(
                    writer,
                    " ({} words at {} wpm, {})",
                    report.words,
                    report.words_per_minute,
                    Estimator::format_detail(&report.estimate)
                )?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readtime_types::EstimateResult;

    fn sample() -> Vec<PageReport> {
        vec![
            PageReport::new("post.html", 900, 200.0, EstimateResult::new(5, 4.3)),
            PageReport::new("empty.html", 0, 200.0, EstimateResult::ZERO),
        ]
    }

    #[test]
    fn test_text_detailed() {
        let mut output = Vec::new();
        TextFormatter::new()
            .write_reports(&sample(), &mut output)
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "post.html: 5 min read (900 words at 200 wpm, 4m 30s)");
        assert_eq!(lines[1], "empty.html: 0 min read (0 words at 200 wpm, 0s)");
    }

    #[test]
    fn test_default_matches_new() {
        let mut from_default = Vec::new();
        let mut from_new = Vec::new();
        TextFormatter::default()
            .write_reports(&sample(), &mut from_default)
            .unwrap();
        TextFormatter::new()
            .write_reports(&sample(), &mut from_new)
            .unwrap();

        assert_eq!(from_default, from_new);
    }

    #[test]
    fn test_text_brief() {
        let mut output = Vec::new();
        TextFormatter::new()
            .with_details(false)
            .write_reports(&sample(), &mut output)
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "post.html: 5 min read\nempty.html: 0 min read\n");
    }
}
