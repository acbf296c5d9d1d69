//! Output format abstraction.

use readtime_types::PageReport;
use std::io::Write;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
    /// CSV format.
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
            Self::Csv => "csv",
        }
    }

    /// Returns the format name as accepted by [`str::parse`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
            Self::Csv => "csv",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Text, Self::Json, Self::Ndjson, Self::Csv]
    }

    /// Writes reports in this format with the formatter's default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_reports<W: Write>(
        &self,
        reports: &[PageReport],
        writer: W,
    ) -> Result<(), FormatError> {
        match self {
            Self::Text => crate::TextFormatter::new().write_reports(reports, writer),
            Self::Json => crate::JsonFormatter::new()
                .with_pretty(true)
                .write_reports(reports, writer),
            Self::Ndjson => crate::JsonFormatter::ndjson().write_reports(reports, writer),
            Self::Csv => crate::CsvFormatter::new().write_reports(reports, writer),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            "csv" => Ok(Self::Csv),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for output formatters.
pub trait Formatter {
    /// Writes reports to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_reports<W: Write>(&self, reports: &[PageReport], writer: W)
    -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
