//! CSV output format.

use readtime_types::PageReport;
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    /// Quotes a field if it contains the delimiter, a quote or a line break.
    fn escape(&self, field: &str) -> String {
        if field.contains([self.delimiter, '"', '\n', '\r']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CsvFormatter {
    fn write_reports<W: Write>(
        &self,
        reports: &[PageReport],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "source{d}words{d}words_per_minute{d}minutes{d}detail")?;
        }

        for report in reports {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}",
                self.escape(&report.source),
                report.words,
                report.words_per_minute,
                report.estimate.data,
                report.estimate.detail
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readtime_types::EstimateResult;

    #[test]
    fn test_csv() {
        let reports = vec![
            PageReport::new("post.html", 900, 200.0, EstimateResult::new(5, 4.3)),
            PageReport::new("a,b.html", 4, 200.0, EstimateResult::new(1, 0.012)),
        ];
        let mut output = Vec::new();
        CsvFormatter::new()
            .write_reports(&reports, &mut output)
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "source,words,words_per_minute,minutes,detail");
        assert_eq!(lines[1], "post.html,900,200,5,4.3");
        assert_eq!(lines[2], "\"a,b.html\",4,200,1,0.012");
    }

    #[test]
    fn test_default_matches_new() {
        let reports = vec![PageReport::new("post.html", 900, 200.0, EstimateResult::new(5, 4.3))];
        let mut from_default = Vec::new();
        let mut from_new = Vec::new();
        CsvFormatter::default()
            .write_reports(&reports, &mut from_default)
            .unwrap();
        CsvFormatter::new()
            .write_reports(&reports, &mut from_new)
            .unwrap();

        assert_eq!(from_default, from_new);
        assert_eq!(
            String::from_utf8(from_default).unwrap(),
            "source,words,words_per_minute,minutes,detail\npost.html,900,200,5,4.3\n"
        );
    }

    #[test]
    fn test_custom_delimiter_quotes_fields() {
        let reports = vec![PageReport::new("a;b.html", 4, 200.0, EstimateResult::new(1, 0.5))];
        let mut output = Vec::new();
        let formatter = CsvFormatter::new().with_delimiter(';');
        formatter.write_reports(&reports, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "source;words;words_per_minute;minutes;detail");
        assert_eq!(lines[1], "\"a;b.html\";4;200;1;0.5");
        assert_eq!(formatter.extension(), "csv");
    }

    #[test]
    fn test_tsv_without_header() {
        let reports = vec![PageReport::new("x", 0, 250.0, EstimateResult::ZERO)];
        let mut output = Vec::new();
        let formatter = CsvFormatter::tsv().with_header(false);
        formatter.write_reports(&reports, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "x\t0\t250\t0\t0\n");
        assert_eq!(formatter.extension(), "tsv");
    }
}
