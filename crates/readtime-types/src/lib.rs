//! Core types for the readtime reading time estimator.
//!
//! This crate provides the fundamental data structures used throughout readtime:
//!
//! - [`EstimateResult`] - Rounded and unrounded reading time in minutes
//! - [`RequestTimeOption`] - Selectors and reading speed for a document lookup
//! - [`PageReport`] - Word count and estimate for a single input document
//! - [`ReadtimeError`] - Errors raised when loading inputs or writing output

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod estimate;
mod options;
mod report;

pub use error::{ReadtimeError, Result};
pub use estimate::EstimateResult;
pub use options::{DEFAULT_WORDS_PER_MINUTE, RequestTimeOption, resolve_words_per_minute};
pub use report::PageReport;
