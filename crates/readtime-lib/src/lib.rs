//! Estimate human reading time from word counts or HTML documents.
//!
//! This is a facade crate that re-exports functionality from the readtime
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use readtime_lib::prelude::*;
//!
//! // From a raw word count
//! let estimate = calculate(900.0, 200.0);
//! assert_eq!(estimate.data, 5);
//!
//! // From the elements of a page
//! let page = HtmlDocument::parse(
//!     r#"<h1 class="title">Hello</h1><article>test apple is check</article>"#,
//! );
//! let options = RequestTimeOption::new([".title", "article"]).with_words_per_minute(250.0);
//! assert_eq!(get_time(&page, &options), 1);
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use readtime_types::*;

// Re-export estimation
pub use readtime_estimate::{Estimator, SECONDS_FACTOR, calculate};

// Re-export extraction
#[cfg(feature = "extract")]
pub use readtime_extract::{
    Document, FnDocument, HtmlDocument, count_words, from_fn, get_estimate, get_time,
    get_total_words, total_words,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use readtime_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, TextFormatter,
};

/// Prelude module for convenient imports.
///
/// ```
/// use readtime_lib::prelude::*;
/// ```
pub mod prelude {
    pub use readtime_types::{
        DEFAULT_WORDS_PER_MINUTE, EstimateResult, PageReport, ReadtimeError, RequestTimeOption,
        Result,
    };

    pub use readtime_estimate::{Estimator, calculate};

    #[cfg(feature = "extract")]
    pub use readtime_extract::{
        Document, HtmlDocument, from_fn, get_estimate, get_time, get_total_words,
    };

    #[cfg(feature = "format")]
    pub use readtime_format::{
        CsvFormatter, Formatter, JsonFormatter, OutputFormat, TextFormatter,
    };
}
