//! Report formatters for the readtime estimator.
//!
//! This crate provides formatters for writing per-document reading time
//! reports to various output formats:
//!
//! - [`TextFormatter`] - One human-readable line per document
//! - [`JsonFormatter`] - JSON array or NDJSON format
//! - [`CsvFormatter`] - CSV or TSV format

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod text;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
pub use text::TextFormatter;
